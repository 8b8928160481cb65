//! Error codes shared by the pricing engine and its callers
//!
//! - [`ErrorCode`]: Standardized numeric codes
//! - [`ErrorCategory`]: Classification of codes by range
//!
//! # Error Code Ranges
//!
//! - 5xxx: Catalog errors
//! - 6xxx: Pricing errors
//! - anything else: System
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCategory, ErrorCode};
//!
//! let code = ErrorCode::UnitPriceMissing;
//! assert_eq!(code.code(), 6001);
//! assert_eq!(code.category(), ErrorCategory::Pricing);
//! ```

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
