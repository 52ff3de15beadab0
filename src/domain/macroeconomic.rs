//! Macroeconomic indicators. Rates are in percentage points.

/// Spread of the long-term over the short-term yield. Negative means inverted.
pub fn yield_curve_slope(long_term_yield: f64, short_term_yield: f64) -> f64 {
    long_term_yield - short_term_yield
}

pub fn real_interest_rate(nominal_rate: f64, inflation_rate: f64) -> f64 {
    nominal_rate - inflation_rate
}

/// Surprise of an actual print versus forecast, percent of the forecast.
pub fn economic_surprise(actual: f64, forecast: f64) -> f64 {
    ((actual - forecast) / forecast) * 100.0
}

pub fn purchasing_power_parity(domestic_price: f64, foreign_price: f64, exchange_rate: f64) -> f64 {
    domestic_price / (foreign_price * exchange_rate)
}

/// Taylor rule policy rate:
/// `neutral + inflation + 0.5 * (inflation - target) + 0.5 * output_gap`.
pub fn taylor_rule(
    neutral_rate: f64,
    inflation: f64,
    target_inflation: f64,
    output_gap: f64,
) -> f64 {
    neutral_rate + inflation + 0.5 * (inflation - target_inflation) + 0.5 * output_gap
}

/// Sahm rule recession signal: unemployment at least 0.5 points above its
/// 12-month low.
pub fn sahm_rule(current_unemployment: f64, min_unemployment_12_months: f64) -> bool {
    current_unemployment - min_unemployment_12_months >= 0.5
}

pub fn misery_index(unemployment_rate: f64, inflation_rate: f64) -> f64 {
    unemployment_rate + inflation_rate
}
