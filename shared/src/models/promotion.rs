//! Promotion Definition Model
//!
//! The catalog-side description of a pricing chain. A catalog source
//! hands one of these over and the engine materializes it into a strategy
//! chain; how definitions are stored is up to the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a quantity/discount table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierDefinition {
    /// Minimum quantity at which this tier starts to apply
    pub min_quantity: i64,
    /// Discount percentage (10 = 10%)
    pub percentage: Decimal,
}

/// Promotion definition (one node of a pricing chain)
///
/// ```json
/// {
///   "type": "FLAT_PERCENTAGE",
///   "percentage": 10,
///   "inner": { "type": "BULK_GROUP", "group_size": 3, "payable_count": 2 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionDefinition {
    /// Regular price, quantity × unit price
    NoDiscount,
    /// Buy `group_size`, pay `payable_count`
    BulkGroup { group_size: u32, payable_count: u32 },
    /// Flat percentage off whatever `inner` computes
    FlatPercentage {
        percentage: Decimal,
        inner: Box<PromotionDefinition>,
    },
    /// Quantity-dependent percentage off whatever `inner` computes
    TieredQuantity {
        #[serde(default)]
        tiers: Vec<TierDefinition>,
        inner: Box<PromotionDefinition>,
    },
}

impl PromotionDefinition {
    /// Parse a definition from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Short machine name of this node's variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoDiscount => "NO_DISCOUNT",
            Self::BulkGroup { .. } => "BULK_GROUP",
            Self::FlatPercentage { .. } => "FLAT_PERCENTAGE",
            Self::TieredQuantity { .. } => "TIERED_QUANTITY",
        }
    }

    /// The wrapped definition, if this node is a decorator
    pub fn inner(&self) -> Option<&PromotionDefinition> {
        match self {
            Self::FlatPercentage { inner, .. } | Self::TieredQuantity { inner, .. } => Some(inner),
            Self::NoDiscount | Self::BulkGroup { .. } => None,
        }
    }
}
