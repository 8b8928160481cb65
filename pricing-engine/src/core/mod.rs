//! Core module - engine configuration and error definitions
//!
//! - [`EngineConfig`] - engine configuration
//! - [`PricingError`] - pricing errors

pub mod config;
pub mod error;

pub use config::EngineConfig;
pub use error::{PricingError, PricingResult};
