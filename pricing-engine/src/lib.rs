//! Promotion pricing engine
//!
//! Computes the payable amount for a quantity of identical items through a
//! chain of pricing strategies: a base variant (regular price or "buy N,
//! pay M") optionally wrapped by flat-percentage and quantity-tier
//! discounts.
//!
//! # Module layout
//!
//! ```text
//! pricing-engine/src/
//! ├── core/      # configuration, errors
//! ├── pricing/   # strategies, chain, breakdown, catalog
//! ├── quote.rs   # single-line quoting for the binary
//! └── utils/     # logging
//! ```

pub mod core;
pub mod pricing;
pub mod quote;
pub mod utils;

// Re-export public types
pub use crate::core::{EngineConfig, PricingError, PricingResult};
pub use pricing::{
    BulkGroup, FlatPercentageDecorator, NoDiscount, PriceBreakdown, PriceStrategy, Strategy,
    TieredQuantityDecorator, build_chain,
};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
