//! Error codes for promotion pricing
//!
//! Error codes are organized by category:
//! - 5xxx: Catalog errors (promotion definitions)
//! - 6xxx: Pricing errors (chain evaluation)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing error code enum
///
/// All error codes are represented as u16 values so they can travel in
/// quotation payloads without carrying Rust enum names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 5xxx: Catalog ====================
    /// Promotion definition cannot be turned into a chain
    InvalidPromotionDefinition = 5001,
    /// Two tiers share the same minimum quantity
    DuplicateTierThreshold = 5002,

    // ==================== 6xxx: Pricing ====================
    /// Unit price was not supplied
    UnitPriceMissing = 6001,
    /// Bulk group size must be at least one
    InvalidGroupSize = 6002,
    /// An amount left the representable decimal range
    AmountOverflow = 6003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPromotionDefinition => "Promotion definition is invalid",
            ErrorCode::DuplicateTierThreshold => "Tier minimum quantity is duplicated",

            ErrorCode::UnitPriceMissing => "Unit price is required",
            ErrorCode::InvalidGroupSize => "Bulk group size must be at least one",
            ErrorCode::AmountOverflow => "Amount exceeds the decimal range",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            5001 => Ok(ErrorCode::InvalidPromotionDefinition),
            5002 => Ok(ErrorCode::DuplicateTierThreshold),

            6001 => Ok(ErrorCode::UnitPriceMissing),
            6002 => Ok(ErrorCode::InvalidGroupSize),
            6003 => Ok(ErrorCode::AmountOverflow),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
