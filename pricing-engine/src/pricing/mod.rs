//! Promotion Pricing Module
//!
//! Composable pricing strategies for a quantity of identical items:
//! - [`NoDiscount`] and [`BulkGroup`] are base variants
//! - [`FlatPercentageDecorator`] and [`TieredQuantityDecorator`] wrap any
//!   strategy and adjust its result
//!
//! A chain is built once by nesting, then evaluated any number of times:
//!
//! ```
//! use pricing_engine::pricing::{BulkGroup, PriceStrategy, Strategy};
//! use rust_decimal::Decimal;
//!
//! let chain = Strategy::from(BulkGroup::new(3, 2).unwrap())
//!     .with_tiers(vec![(1, Decimal::ZERO), (6, Decimal::from(10))])
//!     .with_flat_percentage(Decimal::from(10));
//!
//! let amount = chain.calculate(7, Some(Decimal::from(100))).unwrap();
//! assert_eq!(amount, Decimal::from(405));
//! ```

mod breakdown;
mod bulk_group;
pub mod catalog;
mod flat_percentage;
mod no_discount;
mod strategy;
mod tiered_quantity;

pub use breakdown::*;
pub use bulk_group::*;
pub use catalog::build_chain;
pub use flat_percentage::*;
pub use no_discount::*;
pub use strategy::*;
pub use tiered_quantity::*;
