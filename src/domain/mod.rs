//! Indicator math, parameter records and the configuration rules that feed
//! them. Nothing in here performs I/O.

pub mod config_validation;
pub mod crypto;
pub mod error;
pub mod fundamental;
pub mod indicator;
pub mod macroeconomic;
pub mod ohlcv;
pub mod params;
pub mod regime;
pub mod risk;
pub mod sector;
pub mod sentiment;
pub mod snapshot;
pub mod stats;
pub mod volatility;
