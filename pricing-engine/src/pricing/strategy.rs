//! Price Strategy
//!
//! The [`PriceStrategy`] contract and the closed [`Strategy`] enum over its
//! four implementors. Dispatch is static (enum_dispatch); decorators own
//! their wrapped strategy as a boxed `Strategy`, so a chain is always a
//! linear, acyclic nesting built from the inside out.

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use tracing::warn;

use super::{BulkGroup, FlatPercentageDecorator, NoDiscount, TieredQuantityDecorator};
use crate::core::{PricingError, PricingResult};

/// Pricing contract shared by every strategy in a chain
#[enum_dispatch]
pub trait PriceStrategy {
    /// Amount payable for `quantity` units at `unit_price`
    ///
    /// Exact decimal arithmetic, no rounding. Quantity is not range-checked:
    /// a negative quantity yields a negative amount. Fails with
    /// `AmountOverflow` when the result leaves the `Decimal` range.
    fn amount(&self, quantity: i64, unit_price: Decimal) -> PricingResult<Decimal>;

    /// Human-readable name, for audit and display only
    fn name(&self) -> String;

    /// Human-readable description of the parameters
    fn description(&self) -> String;

    /// Strategy wrapped by this one (decorators only)
    fn wrapped(&self) -> Option<&Strategy> {
        None
    }

    /// Amount payable, failing when the unit price is absent
    fn calculate(&self, quantity: i64, unit_price: Option<Decimal>) -> PricingResult<Decimal> {
        let Some(unit_price) = unit_price else {
            warn!(quantity, strategy = %self.name(), "Unit price missing, calculation aborted");
            return Err(PricingError::MissingValue("unit_price"));
        };
        self.amount(quantity, unit_price)
    }
}

/// A pricing chain: one base variant, optionally wrapped by decorators
#[enum_dispatch(PriceStrategy)]
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    NoDiscount(NoDiscount),
    BulkGroup(BulkGroup),
    FlatPercentage(FlatPercentageDecorator),
    TieredQuantity(TieredQuantityDecorator),
}

impl Strategy {
    /// Wrap this chain in a flat percentage discount
    pub fn with_flat_percentage(self, percentage: Decimal) -> Self {
        FlatPercentageDecorator::new(self, percentage).into()
    }

    /// Wrap this chain in a quantity/discount table
    pub fn with_tiers<I>(self, tiers: I) -> Self
    where
        I: IntoIterator<Item = (i64, Decimal)>,
    {
        TieredQuantityDecorator::new(self, tiers).into()
    }

    /// Iterate the chain from the outermost layer to the base variant
    pub fn layers(&self) -> Layers<'_> {
        Layers { next: Some(self) }
    }

    /// Number of layers, the base variant included
    pub fn depth(&self) -> usize {
        self.layers().count()
    }

    /// The innermost (base) variant
    pub fn base(&self) -> &Strategy {
        let mut current = self;
        while let Some(inner) = current.wrapped() {
            current = inner;
        }
        current
    }

    pub fn is_decorator(&self) -> bool {
        self.wrapped().is_some()
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::NoDiscount(NoDiscount)
    }
}

/// Iterator over the layers of a chain, outermost first
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a Strategy>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a Strategy;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.wrapped();
        Some(current)
    }
}
