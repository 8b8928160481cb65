//! Data models
//!
//! Shared between the pricing engine and whatever catalog feeds it.

pub mod promotion;

// Re-exports
pub use promotion::*;
