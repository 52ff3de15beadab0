//! Fundamental valuation and balance-sheet ratios.
//!
//! Ratios are plain quotients; the `*_margin`, `roe`, `roa` and `fcf_yield`
//! figures are percentages. A zero denominator follows IEEE semantics.

pub fn pe_ratio(price: f64, earnings: f64) -> f64 {
    price / earnings
}

pub fn pb_ratio(price: f64, book_value: f64) -> f64 {
    price / book_value
}

pub fn debt_to_equity(total_debt: f64, total_equity: f64) -> f64 {
    total_debt / total_equity
}

/// Return on equity, percent.
pub fn roe(net_income: f64, shareholders_equity: f64) -> f64 {
    (net_income / shareholders_equity) * 100.0
}

/// Return on assets, percent.
pub fn roa(net_income: f64, total_assets: f64) -> f64 {
    (net_income / total_assets) * 100.0
}

pub fn current_ratio(current_assets: f64, current_liabilities: f64) -> f64 {
    current_assets / current_liabilities
}

/// (current assets - inventory) / current liabilities
pub fn quick_ratio(current_assets: f64, inventory: f64, current_liabilities: f64) -> f64 {
    (current_assets - inventory) / current_liabilities
}

pub fn gross_margin(revenue: f64, cogs: f64) -> f64 {
    ((revenue - cogs) / revenue) * 100.0
}

pub fn operating_margin(operating_income: f64, revenue: f64) -> f64 {
    (operating_income / revenue) * 100.0
}

/// Free cash flow yield, percent of market cap.
pub fn fcf_yield(free_cash_flow: f64, market_cap: f64) -> f64 {
    (free_cash_flow / market_cap) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valuation_ratios() {
        assert!((pe_ratio(150.0, 6.0) - 25.0).abs() < 1e-12);
        assert!((pb_ratio(40.0, 16.0) - 2.5).abs() < 1e-12);
        assert!((debt_to_equity(500.0, 1000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn returns_are_percentages() {
        assert!((roe(15.0, 100.0) - 15.0).abs() < 1e-12);
        assert!((roa(5.0, 200.0) - 2.5).abs() < 1e-12);
        assert!((fcf_yield(8.0, 200.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn liquidity_ratios() {
        assert!((current_ratio(300.0, 150.0) - 2.0).abs() < 1e-12);
        assert!((quick_ratio(300.0, 60.0, 150.0) - 1.6).abs() < 1e-12);
    }

    #[test]
    fn margins() {
        assert!((gross_margin(1000.0, 600.0) - 40.0).abs() < 1e-12);
        assert!((operating_margin(150.0, 1000.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn zero_earnings_is_infinite() {
        assert!(pe_ratio(100.0, 0.0).is_infinite());
    }
}
