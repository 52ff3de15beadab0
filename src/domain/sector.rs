//! Sector rotation indicators.

use crate::domain::stats::mean;

pub const DEFAULT_MOMENTUM_PERIOD: usize = 63;

/// Cumulative return of the last `period` observations, one value per sector.
/// `period == 0` sums the whole history.
pub fn sector_momentum(sector_returns: &[Vec<f64>], period: usize) -> Vec<f64> {
    sector_returns
        .iter()
        .map(|returns| {
            let start = match period {
                0 => 0,
                _ => returns.len().saturating_sub(period),
            };
            returns[start..].iter().sum()
        })
        .collect()
}

/// Sector cumulative return relative to the market's, in percent:
/// `(Σ sector / Σ market - 1) * 100`.
pub fn relative_strength(sector_returns: &[f64], market_returns: &[f64]) -> f64 {
    let sector_perf: f64 = sector_returns.iter().sum();
    let market_perf: f64 = market_returns.iter().sum();
    (sector_perf / market_perf - 1.0) * 100.0
}

/// Pearson correlation over the common prefix of the two series.
pub fn sector_correlation(sector1_returns: &[f64], sector2_returns: &[f64]) -> f64 {
    let n = sector1_returns.len().min(sector2_returns.len());
    let a = &sector1_returns[..n];
    let b = &sector2_returns[..n];

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut covariance = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        variance_a += dx * dx;
        variance_b += dy * dy;
    }

    covariance / (variance_a * variance_b).sqrt()
}
