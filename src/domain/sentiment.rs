//! Market sentiment indicators.

/// The seven sub-scores of the Fear & Greed composite, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FearGreedComponents {
    pub vix: f64,
    pub momentum: f64,
    pub demand: f64,
    pub breadth: f64,
    pub options: f64,
    pub bonds: f64,
    pub safe_haven: f64,
}

impl FearGreedComponents {
    fn as_array(&self) -> [f64; 7] {
        [
            self.vix,
            self.momentum,
            self.demand,
            self.breadth,
            self.options,
            self.bonds,
            self.safe_haven,
        ]
    }
}

/// Equal-weight mean of the components, clamped to `[0, 100]`.
pub fn fear_greed_index(components: &FearGreedComponents) -> f64 {
    let values = components.as_array();
    let average = values.iter().sum::<f64>() / values.len() as f64;
    average.clamp(0.0, 100.0)
}

pub fn put_call_ratio(put_volume: f64, call_volume: f64) -> f64 {
    put_volume / call_volume
}

pub fn advance_decline_ratio(advancing: f64, declining: f64) -> f64 {
    advancing / declining
}

/// New highs as a percentage of new highs plus new lows.
pub fn high_low_index(new_highs: f64, new_lows: f64) -> f64 {
    new_highs / (new_highs + new_lows) * 100.0
}

/// Insider buys as a fraction of all insider transactions.
pub fn insider_ratio(insider_buys: f64, insider_sells: f64) -> f64 {
    insider_buys / (insider_buys + insider_sells)
}
