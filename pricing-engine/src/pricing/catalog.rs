//! Catalog Materialization
//!
//! Turns a [`PromotionDefinition`] into a ready-to-use [`Strategy`] chain.
//! Definitions are validated only as far as the chain needs: group sizes
//! must be non-zero, tier thresholds positive and unique.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::{PromotionDefinition, TierDefinition};
use tracing::debug;

use super::{BulkGroup, FlatPercentageDecorator, NoDiscount, Strategy, TieredQuantityDecorator};
use crate::core::{PricingError, PricingResult};

/// Build the chain described by `definition`
pub fn build_chain(definition: &PromotionDefinition) -> PricingResult<Strategy> {
    let strategy = match definition {
        PromotionDefinition::NoDiscount => Strategy::from(NoDiscount),
        PromotionDefinition::BulkGroup {
            group_size,
            payable_count,
        } => Strategy::from(BulkGroup::new(*group_size, *payable_count)?),
        PromotionDefinition::FlatPercentage { percentage, inner } => {
            let inner = build_chain(inner)?;
            Strategy::from(FlatPercentageDecorator::new(inner, *percentage))
        }
        PromotionDefinition::TieredQuantity { tiers, inner } => {
            let table = tier_table(tiers)?;
            let inner = build_chain(inner)?;
            Strategy::from(TieredQuantityDecorator::new(inner, table))
        }
    };

    debug!(kind = definition.kind(), depth = strategy.depth(), "Chain materialized");
    Ok(strategy)
}

fn tier_table(tiers: &[TierDefinition]) -> PricingResult<BTreeMap<i64, Decimal>> {
    let mut table = BTreeMap::new();
    for tier in tiers {
        if tier.min_quantity < 1 {
            return Err(PricingError::InvalidDefinition(format!(
                "tier min_quantity must be positive, got {}",
                tier.min_quantity
            )));
        }
        if table.insert(tier.min_quantity, tier.percentage).is_some() {
            return Err(PricingError::DuplicateTier(tier.min_quantity));
        }
    }
    Ok(table)
}

impl TryFrom<&PromotionDefinition> for Strategy {
    type Error = PricingError;

    fn try_from(definition: &PromotionDefinition) -> PricingResult<Self> {
        build_chain(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriceStrategy;

    fn tier(min_quantity: i64, percentage: i64) -> TierDefinition {
        TierDefinition {
            min_quantity,
            percentage: Decimal::from(percentage),
        }
    }

    #[test]
    fn test_build_nested_chain() {
        let definition = PromotionDefinition::FlatPercentage {
            percentage: Decimal::from(10),
            inner: Box::new(PromotionDefinition::TieredQuantity {
                tiers: vec![tier(6, 10), tier(1, 0)],
                inner: Box::new(PromotionDefinition::BulkGroup {
                    group_size: 3,
                    payable_count: 2,
                }),
            }),
        };

        let chain = Strategy::try_from(&definition).unwrap();
        let expected = Strategy::from(BulkGroup::new(3, 2).unwrap())
            .with_tiers(vec![(1, Decimal::ZERO), (6, Decimal::from(10))])
            .with_flat_percentage(Decimal::from(10));

        assert_eq!(chain, expected);
        assert_eq!(chain.depth(), 3);
        assert_eq!(
            chain.calculate(7, Some(Decimal::from(100))).unwrap(),
            Decimal::from(405)
        );
    }

    #[test]
    fn test_build_from_json() {
        let json = r#"{
            "type": "TIERED_QUANTITY",
            "tiers": [
                { "min_quantity": 11, "percentage": 15 },
                { "min_quantity": 1, "percentage": 0 },
                { "min_quantity": 6, "percentage": 10 },
                { "min_quantity": 3, "percentage": 5 }
            ],
            "inner": { "type": "NO_DISCOUNT" }
        }"#;
        let definition = PromotionDefinition::from_json(json).unwrap();
        let chain = build_chain(&definition).unwrap();

        assert_eq!(
            chain.calculate(8, Some(Decimal::new(5000, 2))).unwrap(),
            Decimal::from(360)
        );
    }

    #[test]
    fn test_zero_group_size_rejected() {
        let definition = PromotionDefinition::BulkGroup {
            group_size: 0,
            payable_count: 1,
        };
        assert_eq!(build_chain(&definition), Err(PricingError::InvalidGroupSize));
    }

    #[test]
    fn test_duplicate_threshold_rejected() {
        let definition = PromotionDefinition::TieredQuantity {
            tiers: vec![tier(3, 5), tier(3, 8)],
            inner: Box::new(PromotionDefinition::NoDiscount),
        };
        assert_eq!(build_chain(&definition), Err(PricingError::DuplicateTier(3)));
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let definition = PromotionDefinition::TieredQuantity {
            tiers: vec![tier(0, 5)],
            inner: Box::new(PromotionDefinition::NoDiscount),
        };
        assert!(matches!(
            build_chain(&definition),
            Err(PricingError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_inner_error_propagates() {
        let definition = PromotionDefinition::FlatPercentage {
            percentage: Decimal::from(5),
            inner: Box::new(PromotionDefinition::BulkGroup {
                group_size: 0,
                payable_count: 0,
            }),
        };
        assert_eq!(build_chain(&definition), Err(PricingError::InvalidGroupSize));
    }

    #[test]
    fn test_unvalidated_parameters_accepted() {
        // M > N and percentage > 100 are the caller's business
        let definition = PromotionDefinition::FlatPercentage {
            percentage: Decimal::from(150),
            inner: Box::new(PromotionDefinition::BulkGroup {
                group_size: 2,
                payable_count: 5,
            }),
        };
        let chain = build_chain(&definition).unwrap();
        // 4 units → 2 groups × 5 = 10 payable × 10 = 100, minus 150% = -50
        assert_eq!(chain.amount(4, Decimal::from(10)), Ok(Decimal::from(-50)));
    }
}
