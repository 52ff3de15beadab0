//! Economic regime classification from growth, inflation and unemployment.
//!
//! Thresholds are calibrated on 1970-2024 history. Confidence combines how
//! clearly each input sits inside its regime with the regime's historical
//! frequency, capped at 0.95.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    Recession,
    Expansion,
    Stagflation,
    Boom,
}

impl Regime {
    /// Share of time spent in this regime historically.
    pub fn historical_frequency(self) -> f64 {
        match self {
            Regime::Recession => 0.15,
            Regime::Expansion => 0.65,
            Regime::Stagflation => 0.08,
            Regime::Boom => 0.12,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Recession => write!(f, "RECESSION"),
            Regime::Expansion => write!(f, "EXPANSION"),
            Regime::Stagflation => write!(f, "STAGFLATION"),
            Regime::Boom => write!(f, "BOOM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQuality::High => write!(f, "HIGH"),
            DataQuality::Medium => write!(f, "MEDIUM"),
            DataQuality::Low => write!(f, "LOW"),
        }
    }
}

/// Percent levels separating the regimes.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeThresholds {
    pub growth_recession: f64,
    pub growth_expansion: f64,
    pub growth_boom: f64,
    pub inflation_deflation: f64,
    pub inflation_stable: f64,
    pub inflation_high: f64,
    pub unemployment_low: f64,
    pub unemployment_normal: f64,
    pub unemployment_high: f64,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            growth_recession: -0.5,
            growth_expansion: 2.0,
            growth_boom: 4.0,
            inflation_deflation: 0.0,
            inflation_stable: 2.0,
            inflation_high: 4.0,
            unemployment_low: 4.0,
            unemployment_normal: 6.0,
            unemployment_high: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegimeAssessment {
    pub regime: Regime,
    pub confidence: f64,
    pub growth: f64,
    pub inflation: f64,
    pub unemployment: f64,
    pub data_quality: DataQuality,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegimeSummary {
    pub dominant_regime: Regime,
    /// Regime counts in order of first appearance.
    pub distribution: Vec<(Regime, usize)>,
    pub average_confidence: f64,
    pub countries_analyzed: usize,
}

const GROWTH_FALLBACK: f64 = 0.0;
const INFLATION_FALLBACK: f64 = 2.0;
const UNEMPLOYMENT_FALLBACK: f64 = 5.0;
const CONFIDENCE_CAP: f64 = 0.95;
const EMPTY_SUMMARY_CONFIDENCE: f64 = 0.75;

pub fn classify(growth: f64, inflation: f64, unemployment: f64, t: &RegimeThresholds) -> Regime {
    if growth < t.growth_recession {
        if inflation > t.inflation_high {
            Regime::Stagflation
        } else {
            Regime::Recession
        }
    } else if growth > t.growth_boom {
        Regime::Boom
    } else if inflation > t.inflation_high && unemployment > t.unemployment_high {
        Regime::Stagflation
    } else {
        Regime::Expansion
    }
}

#[derive(Debug, Clone, Copy)]
enum Factor {
    Growth,
    Inflation,
    Unemployment,
}

fn clarity(value: f64, factor: Factor, regime: Regime, t: &RegimeThresholds) -> f64 {
    match (regime, factor) {
        (Regime::Recession, Factor::Growth) => pick(value < t.growth_recession, 0.5),
        (Regime::Recession, Factor::Unemployment) => pick(value > t.unemployment_high, 0.7),
        (Regime::Boom, Factor::Growth) => pick(value > t.growth_boom, 0.6),
        (Regime::Boom, Factor::Unemployment) => pick(value < t.unemployment_low, 0.7),
        (Regime::Stagflation, Factor::Inflation) => pick(value > t.inflation_high, 0.5),
        (Regime::Stagflation, Factor::Unemployment) => pick(value > t.unemployment_high, 0.6),
        _ => 0.8,
    }
}

fn pick(clear: bool, otherwise: f64) -> f64 {
    if clear { 1.0 } else { otherwise }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classification confidence in `[0, 0.95]`, rounded to two decimals.
pub fn confidence(
    growth: f64,
    inflation: f64,
    unemployment: f64,
    regime: Regime,
    t: &RegimeThresholds,
) -> f64 {
    let score = clarity(growth, Factor::Growth, regime, t) * 0.4
        + clarity(inflation, Factor::Inflation, regime, t) * 0.3
        + clarity(unemployment, Factor::Unemployment, regime, t) * 0.3;

    let weighted = score * (0.7 + regime.historical_frequency() * 0.6);
    round2(weighted.min(CONFIDENCE_CAP))
}

/// Year-over-year growth of a quarterly level series, percent.
///
/// Compares the latest value with the one four observations back. Fewer
/// than four points or a non-positive base → 0.
pub fn growth_rate(levels: &[f64]) -> f64 {
    year_over_year(levels, 4).unwrap_or(GROWTH_FALLBACK)
}

/// Year-over-year change of a monthly price index, percent.
///
/// Compares the latest value with the one twelve observations back. Fewer
/// than twelve points or a non-positive base → 2.0.
pub fn inflation_rate(index: &[f64]) -> f64 {
    year_over_year(index, 12).unwrap_or(INFLATION_FALLBACK)
}

fn year_over_year(series: &[f64], lag: usize) -> Option<f64> {
    if series.len() < lag {
        return None;
    }
    let recent = series[series.len() - 1];
    let year_ago = series[series.len() - lag];
    if year_ago <= 0.0 {
        return None;
    }
    Some(round2((recent / year_ago - 1.0) * 100.0))
}

/// Latest unemployment rate; 5.0 when the series is empty.
pub fn latest_unemployment(rates: &[f64]) -> f64 {
    rates.last().map(|&r| round2(r)).unwrap_or(UNEMPLOYMENT_FALLBACK)
}

/// Raw series for one country. An empty slice counts as a missing source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegimeInputs<'a> {
    /// Quarterly real GDP levels.
    pub gdp: &'a [f64],
    /// Monthly consumer price index.
    pub cpi: &'a [f64],
    /// Monthly unemployment rate, percent.
    pub unemployment: &'a [f64],
}

pub fn detect(inputs: &RegimeInputs<'_>, t: &RegimeThresholds) -> RegimeAssessment {
    let growth = growth_rate(inputs.gdp);
    let inflation = inflation_rate(inputs.cpi);
    let unemployment_rate = latest_unemployment(inputs.unemployment);

    let available = [inputs.gdp, inputs.cpi, inputs.unemployment]
        .iter()
        .filter(|s| !s.is_empty())
        .count();
    let data_quality = match available {
        3 => DataQuality::High,
        2 => DataQuality::Medium,
        _ => DataQuality::Low,
    };

    assess(growth, inflation, unemployment_rate, data_quality, t)
}

/// Classify from already-derived rates.
pub fn assess(
    growth: f64,
    inflation: f64,
    unemployment: f64,
    data_quality: DataQuality,
    t: &RegimeThresholds,
) -> RegimeAssessment {
    let regime = classify(growth, inflation, unemployment, t);
    RegimeAssessment {
        regime,
        confidence: confidence(growth, inflation, unemployment, regime, t),
        growth,
        inflation,
        unemployment,
        data_quality,
    }
}

/// Aggregate per-country assessments.
///
/// The dominant regime is the most frequent one; ties go to the regime seen
/// first. An empty input is dominated by Expansion at 0.75 confidence.
pub fn summarize(assessments: &[(String, RegimeAssessment)]) -> RegimeSummary {
    let mut distribution: Vec<(Regime, usize)> = Vec::new();
    for (_, a) in assessments {
        match distribution.iter_mut().find(|(r, _)| *r == a.regime) {
            Some((_, count)) => *count += 1,
            None => distribution.push((a.regime, 1)),
        }
    }

    let mut dominant_regime = Regime::Expansion;
    let mut best = 0;
    for &(regime, count) in &distribution {
        if count > best {
            best = count;
            dominant_regime = regime;
        }
    }

    let average_confidence = if assessments.is_empty() {
        EMPTY_SUMMARY_CONFIDENCE
    } else {
        let total: f64 = assessments.iter().map(|(_, a)| a.confidence).sum();
        round2(total / assessments.len() as f64)
    };

    RegimeSummary {
        dominant_regime,
        distribution,
        average_confidence,
        countries_analyzed: assessments.len(),
    }
}
