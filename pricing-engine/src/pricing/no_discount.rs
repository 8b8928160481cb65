//! Regular price: quantity × unit price

use rust_decimal::Decimal;

use super::PriceStrategy;
use crate::core::{PricingError, PricingResult};

/// Identity pricing, the usual base of a chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl PriceStrategy for NoDiscount {
    fn amount(&self, quantity: i64, unit_price: Decimal) -> PricingResult<Decimal> {
        Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or(PricingError::AmountOverflow)
    }

    fn name(&self) -> String {
        "Regular price".to_string()
    }

    fn description(&self) -> String {
        "No discount applied".to_string()
    }
}
