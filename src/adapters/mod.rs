//! Concrete adapter implementations for ports.

pub mod ascii_chart;
pub mod csv_adapter;
pub mod file_config_adapter;
