//! priceta — technical indicators over daily price history.
//!
//! Hexagonal architecture: pure indicator math and analysis in [`domain`],
//! port traits in [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
