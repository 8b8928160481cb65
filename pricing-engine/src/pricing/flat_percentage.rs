//! Flat Percentage Decorator
//!
//! Takes a fixed percentage off whatever the wrapped strategy computes.
//! Stacking two of these is multiplicative: 10% then 20% leaves 72% of the
//! base amount, not 70%.

use rust_decimal::Decimal;
use shared::money::{apply_percentage_discount, format_percentage};
use tracing::trace;

use super::{PriceStrategy, Strategy};
use crate::core::{PricingError, PricingResult};

/// Flat percentage discount over an owned inner strategy
///
/// The percentage is not range-checked: 0 is a passthrough, 100 yields zero
/// and anything above 100 yields a negative amount.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPercentageDecorator {
    inner: Box<Strategy>,
    percentage: Decimal,
}

impl FlatPercentageDecorator {
    pub fn new(inner: impl Into<Strategy>, percentage: Decimal) -> Self {
        Self {
            inner: Box::new(inner.into()),
            percentage,
        }
    }

    pub fn percentage(&self) -> Decimal {
        self.percentage
    }

    pub fn inner(&self) -> &Strategy {
        &self.inner
    }
}

impl PriceStrategy for FlatPercentageDecorator {
    fn amount(&self, quantity: i64, unit_price: Decimal) -> PricingResult<Decimal> {
        let inner_amount = self.inner.amount(quantity, unit_price)?;
        let result = apply_percentage_discount(inner_amount, self.percentage)
            .ok_or(PricingError::AmountOverflow)?;
        trace!(
            quantity,
            inner = %inner_amount,
            percentage = %self.percentage,
            result = %result,
            "Flat discount applied"
        );
        Ok(result)
    }

    fn name(&self) -> String {
        "Flat discount".to_string()
    }

    fn description(&self) -> String {
        format!("Flat discount of {} %", format_percentage(self.percentage))
    }

    fn wrapped(&self) -> Option<&Strategy> {
        Some(&self.inner)
    }
}
