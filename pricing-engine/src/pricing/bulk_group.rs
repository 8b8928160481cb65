//! Bulk Group Pricing
//!
//! "Buy N, pay M": every complete group of N units is charged as M units,
//! leftover units are charged at full price.

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use super::PriceStrategy;
use crate::core::{PricingError, PricingResult};

/// Buy `group_size`, pay `payable_count`
///
/// No relation between the two counts is enforced; with `payable_count >
/// group_size` the strategy charges more than list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkGroup {
    group_size: NonZeroU32,
    payable_count: u32,
}

impl BulkGroup {
    /// Create a bulk group, rejecting a group size of zero
    pub fn new(group_size: u32, payable_count: u32) -> PricingResult<Self> {
        let group_size = NonZeroU32::new(group_size).ok_or(PricingError::InvalidGroupSize)?;
        Ok(Self {
            group_size,
            payable_count,
        })
    }

    pub fn group_size(&self) -> u32 {
        self.group_size.get()
    }

    pub fn payable_count(&self) -> u32 {
        self.payable_count
    }

    /// Number of units actually charged for `quantity`
    ///
    /// Division truncates toward zero, so a negative quantity mirrors the
    /// positive one. Always representable: `|i64| × u32::MAX` stays below the
    /// `Decimal` limit.
    pub fn payable_units(&self, quantity: i64) -> Decimal {
        let size = i64::from(self.group_size.get());
        let full_groups = quantity / size;
        let remainder = quantity % size;
        Decimal::from(full_groups) * Decimal::from(self.payable_count) + Decimal::from(remainder)
    }
}

impl PriceStrategy for BulkGroup {
    fn amount(&self, quantity: i64, unit_price: Decimal) -> PricingResult<Decimal> {
        self.payable_units(quantity)
            .checked_mul(unit_price)
            .ok_or(PricingError::AmountOverflow)
    }

    fn name(&self) -> String {
        format!("Buy {}, pay {}", self.group_size, self.payable_count)
    }

    fn description(&self) -> String {
        format!("{} X {}", self.group_size, self.payable_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_for_two() {
        // 7 units: 2 full groups (pay 4) + 1 remainder = 5 units
        let bulk = BulkGroup::new(3, 2).unwrap();
        assert_eq!(bulk.payable_units(7), Decimal::from(5));
        assert_eq!(
            bulk.calculate(7, Some(Decimal::new(10000, 2))).unwrap(),
            Decimal::new(50000, 2)
        );
    }

    #[test]
    fn test_exact_groups() {
        let bulk = BulkGroup::new(3, 2).unwrap();
        assert_eq!(bulk.payable_units(9), Decimal::from(6));
        assert_eq!(bulk.payable_units(3), Decimal::from(2));
    }

    #[test]
    fn test_below_group_size_pays_full() {
        let bulk = BulkGroup::new(3, 2).unwrap();
        assert_eq!(bulk.payable_units(1), Decimal::ONE);
        assert_eq!(bulk.payable_units(2), Decimal::from(2));
    }

    #[test]
    fn test_zero_quantity() {
        let bulk = BulkGroup::new(3, 2).unwrap();
        assert_eq!(bulk.amount(0, Decimal::from(100)), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_zero_group_size_rejected() {
        assert_eq!(BulkGroup::new(0, 2), Err(PricingError::InvalidGroupSize));
    }

    #[test]
    fn test_payable_above_group_size_not_blocked() {
        // "Buy 2, pay 3" charges more than list price
        let bulk = BulkGroup::new(2, 3).unwrap();
        assert_eq!(bulk.amount(4, Decimal::from(10)), Ok(Decimal::from(60)));
    }

    #[test]
    fn test_pay_nothing_for_full_groups() {
        let bulk = BulkGroup::new(2, 0).unwrap();
        assert_eq!(bulk.amount(5, Decimal::from(10)), Ok(Decimal::from(10)));
    }

    #[test]
    fn test_negative_quantity_mirrors_positive() {
        let bulk = BulkGroup::new(3, 2).unwrap();
        assert_eq!(bulk.payable_units(-7), Decimal::from(-5));
        assert_eq!(bulk.amount(-7, Decimal::from(100)), Ok(Decimal::from(-500)));
    }

    #[test]
    fn test_group_of_one() {
        // Every unit is its own group
        let bulk = BulkGroup::new(1, 1).unwrap();
        assert_eq!(bulk.amount(13, Decimal::from(2)), Ok(Decimal::from(26)));
    }

    #[test]
    fn test_extreme_quantities_do_not_panic() {
        // Largest group count times the largest payable count
        let bulk = BulkGroup::new(1, u32::MAX).unwrap();
        assert_eq!(
            bulk.payable_units(i64::MAX),
            Decimal::from(i64::MAX) * Decimal::from(u32::MAX)
        );
        assert_eq!(
            bulk.payable_units(i64::MIN),
            Decimal::from(i64::MIN) * Decimal::from(u32::MAX)
        );
        assert_eq!(
            bulk.amount(i64::MAX, Decimal::from(10)),
            Err(PricingError::AmountOverflow)
        );
    }

    #[test]
    fn test_labels() {
        let bulk = BulkGroup::new(3, 2).unwrap();
        assert_eq!(bulk.name(), "Buy 3, pay 2");
        assert_eq!(bulk.description(), "3 X 2");
        assert_eq!(bulk.group_size(), 3);
        assert_eq!(bulk.payable_count(), 2);
    }
}
