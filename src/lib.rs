//! oracle-indicators: technical, risk, fundamental, macro, sentiment, sector
//! and crypto indicators over plain `f64` series.
//!
//! Hexagonal layout: indicator math in [`domain`], port traits in [`ports`],
//! file-backed implementations in [`adapters`], the command line in [`cli`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
