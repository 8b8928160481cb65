//! Money calculation utilities using rust_decimal for precision
//!
//! Pricing chains compute in `Decimal` without rounding. The helpers here
//! round and format at the output edge and hold the percentage arithmetic
//! both discount decorators share.

use rust_decimal::prelude::*;

/// Default rounding for monetary output (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary amount half away from zero
#[inline]
pub fn round_money(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Reduce `amount` by `percentage` percent: `amount - amount * percentage / 100`
///
/// Percentages outside 0..=100 are applied as-is, so 150% yields a negative
/// amount. Returns `None` when the result leaves the `Decimal` range.
#[inline]
pub fn apply_percentage_discount(amount: Decimal, percentage: Decimal) -> Option<Decimal> {
    let rate = percentage.checked_div(Decimal::ONE_HUNDRED)?;
    amount.checked_sub(amount.checked_mul(rate)?)
}

/// Render an amount with exactly `places` decimal places, rounding half-up
pub fn format_money(value: Decimal, places: u32) -> String {
    let mut rounded = round_money(value, places);
    rounded.rescale(places);
    rounded.to_string()
}

/// Render a percentage with exactly two decimal places (`15.7` -> `"15.70"`)
pub fn format_percentage(percentage: Decimal) -> String {
    format_money(percentage, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(
            round_money(Decimal::new(10005, 3), 2),
            Decimal::new(1001, 2)
        );
        assert_eq!(
            round_money(Decimal::new(-10005, 3), 2),
            Decimal::new(-1001, 2)
        );
        assert_eq!(round_money(Decimal::new(12345, 3), 0), Decimal::from(12));
    }

    #[test]
    fn test_apply_percentage_discount() {
        let amount = Decimal::from(1000);
        assert_eq!(
            apply_percentage_discount(amount, Decimal::from(10)),
            Some(Decimal::from(900))
        );
        assert_eq!(
            apply_percentage_discount(amount, Decimal::ZERO),
            Some(Decimal::from(1000))
        );
        assert_eq!(
            apply_percentage_discount(amount, Decimal::ONE_HUNDRED),
            Some(Decimal::ZERO)
        );
        // Above 100% goes negative, nothing clamps it
        assert_eq!(
            apply_percentage_discount(amount, Decimal::from(150)),
            Some(Decimal::from(-500))
        );
    }

    #[test]
    fn test_apply_percentage_discount_out_of_range() {
        // MAX × (1 - (-100%)) = 2 × MAX
        assert_eq!(
            apply_percentage_discount(Decimal::MAX, Decimal::from(-100)),
            None
        );
        assert_eq!(
            apply_percentage_discount(Decimal::MAX, Decimal::from(10_000)),
            None
        );
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(450000, 3), 2), "450.00");
        assert_eq!(format_money(Decimal::from(7), 2), "7.00");
        assert_eq!(format_money(Decimal::new(-10005, 3), 2), "-10.01");
        assert_eq!(format_money(Decimal::new(12345, 3), 0), "12");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Decimal::new(1575, 2)), "15.75");
        assert_eq!(format_percentage(Decimal::from(10)), "10.00");
        assert_eq!(format_percentage(Decimal::new(157, 1)), "15.70");
        assert_eq!(format_percentage(Decimal::new(12345, 3)), "12.35");
        assert_eq!(format_percentage(Decimal::ZERO), "0.00");
    }
}
