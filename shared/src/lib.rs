//! Shared types for the promotion pricing workspace
//!
//! Common types used across crates: error codes, promotion definitions
//! and decimal money helpers.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{ErrorCategory, ErrorCode};
pub use models::{PromotionDefinition, TierDefinition};
