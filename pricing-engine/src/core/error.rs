use shared::error::ErrorCode;
use thiserror::Error;

/// Errors raised while building or evaluating a pricing chain
///
/// Evaluation fails only with `MissingValue` or `AmountOverflow`; the other
/// variants occur when a chain is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Missing required value: {0}")]
    MissingValue(&'static str),

    #[error("Bulk group size must be at least 1")]
    InvalidGroupSize,

    #[error("Invalid promotion definition: {0}")]
    InvalidDefinition(String),

    #[error("Duplicate tier threshold: {0}")]
    DuplicateTier(i64),

    #[error("Amount exceeds the decimal range")]
    AmountOverflow,
}

impl PricingError {
    /// Numeric code for callers that forward the failure outside the process
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::MissingValue(_) => ErrorCode::UnitPriceMissing,
            PricingError::InvalidGroupSize => ErrorCode::InvalidGroupSize,
            PricingError::InvalidDefinition(_) => ErrorCode::InvalidPromotionDefinition,
            PricingError::DuplicateTier(_) => ErrorCode::DuplicateTierThreshold,
            PricingError::AmountOverflow => ErrorCode::AmountOverflow,
        }
    }
}

/// Result type for pricing operations
pub type PricingResult<T> = std::result::Result<T, PricingError>;
