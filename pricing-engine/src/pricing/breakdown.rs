//! Price Breakdown
//!
//! Per-layer audit trail of one chain evaluation, innermost layer first.
//! Each entry records what that layer produced and how much it took off
//! the amount it received.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{PriceStrategy, Strategy};
use crate::core::{PricingError, PricingResult};

/// Contribution of a single layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedStrategy {
    pub name: String,
    pub description: String,
    /// Amount after this layer
    pub amount: Decimal,
    /// Amount removed by this layer (negative when it added to the price)
    pub adjustment: Decimal,
}

/// Full breakdown of a calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub quantity: i64,
    pub unit_price: Decimal,
    /// quantity × unit price, before any strategy
    pub list_price: Decimal,
    /// Layers from the base variant outward
    pub layers: Vec<AppliedStrategy>,
    /// Final amount, identical to `calculate`
    pub total: Decimal,
}

impl Strategy {
    /// Evaluate the chain layer by layer
    ///
    /// Fails like `calculate`: absent unit price or an amount out of range.
    pub fn breakdown(
        &self,
        quantity: i64,
        unit_price: Option<Decimal>,
    ) -> PricingResult<PriceBreakdown> {
        let unit_price = unit_price.ok_or(PricingError::MissingValue("unit_price"))?;
        let list_price = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or(PricingError::AmountOverflow)?;

        let mut ordered: Vec<&Strategy> = self.layers().collect();
        ordered.reverse();

        let mut previous = list_price;
        let mut layers = Vec::with_capacity(ordered.len());
        for layer in ordered {
            let amount = layer.amount(quantity, unit_price)?;
            let adjustment = previous
                .checked_sub(amount)
                .ok_or(PricingError::AmountOverflow)?;
            layers.push(AppliedStrategy {
                name: layer.name(),
                description: layer.description(),
                amount,
                adjustment,
            });
            previous = amount;
        }

        Ok(PriceBreakdown {
            quantity,
            unit_price,
            list_price,
            layers,
            total: previous,
        })
    }
}
