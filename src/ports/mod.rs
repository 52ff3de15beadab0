//! Port traits the CLI talks to; adapters implement them.

pub mod config_port;
pub mod data_port;
pub mod report_port;
