//! Tiered Quantity Decorator
//!
//! Applies a quantity-dependent percentage to the wrapped strategy's amount.
//! The tier table maps a minimum quantity to a percentage; the tier used is
//! the one with the largest minimum quantity not exceeding the quantity
//! being priced. When no tier qualifies (empty table, or quantity below
//! every threshold) the inner amount passes through unchanged.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::money::apply_percentage_discount;
use tracing::{debug, trace};

use super::{PriceStrategy, Strategy};
use crate::core::{PricingError, PricingResult};

/// Quantity/discount table over an owned inner strategy
///
/// The table is kept ordered by threshold, so the order tiers were supplied
/// in never matters.
#[derive(Debug, Clone, PartialEq)]
pub struct TieredQuantityDecorator {
    inner: Box<Strategy>,
    tiers: BTreeMap<i64, Decimal>,
}

impl TieredQuantityDecorator {
    /// Build from `(min_quantity, percentage)` pairs
    ///
    /// A repeated threshold keeps the last percentage given for it.
    pub fn new<I>(inner: impl Into<Strategy>, tiers: I) -> Self
    where
        I: IntoIterator<Item = (i64, Decimal)>,
    {
        Self {
            inner: Box::new(inner.into()),
            tiers: tiers.into_iter().collect(),
        }
    }

    pub fn inner(&self) -> &Strategy {
        &self.inner
    }

    pub fn tiers(&self) -> &BTreeMap<i64, Decimal> {
        &self.tiers
    }

    /// Tier applying to `quantity`: highest threshold `<= quantity`
    pub fn select_tier(&self, quantity: i64) -> Option<(i64, Decimal)> {
        self.tiers
            .range(..=quantity)
            .next_back()
            .map(|(threshold, percentage)| (*threshold, *percentage))
    }

    fn render_table(&self) -> String {
        let entries: Vec<String> = self
            .tiers
            .iter()
            .map(|(threshold, percentage)| format!("{}={}", threshold, percentage))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

impl PriceStrategy for TieredQuantityDecorator {
    fn amount(&self, quantity: i64, unit_price: Decimal) -> PricingResult<Decimal> {
        let inner_amount = self.inner.amount(quantity, unit_price)?;

        match self.select_tier(quantity) {
            Some((threshold, percentage)) => {
                debug!(quantity, threshold, percentage = %percentage, "Quantity tier selected");
                apply_percentage_discount(inner_amount, percentage)
                    .ok_or(PricingError::AmountOverflow)
            }
            None => {
                trace!(quantity, tiers = self.tiers.len(), "No tier applies");
                Ok(inner_amount)
            }
        }
    }

    fn name(&self) -> String {
        "Discount by quantity".to_string()
    }

    fn description(&self) -> String {
        format!("quantity/discount table: {}", self.render_table())
    }

    fn wrapped(&self) -> Option<&Strategy> {
        Some(&self.inner)
    }
}
