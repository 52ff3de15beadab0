//! Statistical utilities shared by the indicator modules.
//!
//! Two variance conventions are in use:
//! [`population_variance`] divides by `n`, [`sample_variance`] by `n - 1`.

pub const NORMALIZE_MIN: f64 = 0.0;
pub const NORMALIZE_MAX: f64 = 100.0;
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.3;

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Variance with denominator `n`; `NaN` for an empty slice.
pub fn population_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

/// Variance with denominator `n - 1`; `NaN` for fewer than two values.
pub fn sample_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

/// Linearly rescale `data` into `[min, max]` using the sample's own extremes.
///
/// A constant input has no range to rescale, so every element is `NaN`.
pub fn normalize(data: &[f64], min: f64, max: f64) -> Vec<f64> {
    let data_min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = data_max - data_min;

    if range == 0.0 {
        return vec![f64::NAN; data.len()];
    }

    data.iter()
        .map(|v| min + ((v - data_min) / range) * (max - min))
        .collect()
}

/// `normalize` into `[0, 100]`.
pub fn normalize_default(data: &[f64]) -> Vec<f64> {
    normalize(data, NORMALIZE_MIN, NORMALIZE_MAX)
}

/// Standard scores using population standard deviation.
///
/// Zero-variance input yields `NaN` for every element.
pub fn z_score(data: &[f64]) -> Vec<f64> {
    // Rounding in the mean can leave a constant series with a tiny nonzero
    // deviation, so test for constancy directly.
    if data.windows(2).all(|w| w[0] == w[1]) {
        return vec![f64::NAN; data.len()];
    }

    let m = mean(data);
    let std_dev = population_variance(data).sqrt();

    data.iter().map(|v| (v - m) / std_dev).collect()
}

/// Percentage of `data` strictly below `value`. Equal values do not count.
pub fn percentile_rank(value: f64, data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let below = data.iter().filter(|&&v| v < value).count();
    below as f64 / data.len() as f64 * 100.0
}

/// Single exponential smoothing seeded with `data[0]`.
pub fn exponential_smoothing(data: &[f64], alpha: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(data.len());
    let mut iter = data.iter();

    let Some(&first) = iter.next() else {
        return result;
    };
    result.push(first);

    let mut prev = first;
    for &v in iter {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }
    result
}
