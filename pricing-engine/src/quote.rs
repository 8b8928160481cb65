//! Single-line quoting
//!
//! Backs the `promo-quote` binary: read a promotion definition from disk,
//! materialize the chain and price one line.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use shared::models::PromotionDefinition;
use shared::money::format_money;
use tracing::warn;

use crate::core::{EngineConfig, PricingError};
use crate::pricing::{PriceBreakdown, Strategy};

/// Command line of `promo-quote`
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "promo-quote",
    version,
    about = "Price a quantity of identical items through a promotion chain"
)]
pub struct QuoteRequest {
    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Promotion definition file (JSON)
    pub definition_path: PathBuf,

    /// Number of units
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,

    /// Price of one unit; quoting fails when it is absent
    #[arg(allow_negative_numbers = true)]
    pub unit_price: Option<Decimal>,
}

fn log_rejection(stage: &'static str, err: &PricingError) {
    let code = err.code();
    warn!(
        stage,
        code = code.code(),
        category = code.category().name(),
        "{}",
        err
    );
}

/// Price the request and render the output text
pub fn run(request: &QuoteRequest, config: &EngineConfig) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(&request.definition_path).with_context(|| {
        format!(
            "failed to read definition {}",
            request.definition_path.display()
        )
    })?;
    let definition = PromotionDefinition::from_json(&raw).context("failed to parse definition")?;
    let chain = Strategy::try_from(&definition).inspect_err(|e| log_rejection("definition", e))?;

    tracing::info!(
        definition = %request.definition_path.display(),
        depth = chain.depth(),
        quantity = request.quantity,
        "Pricing line"
    );

    let breakdown = chain
        .breakdown(request.quantity, request.unit_price)
        .inspect_err(|e| log_rejection("evaluation", e))?;

    if request.json {
        return Ok(serde_json::to_string_pretty(&breakdown)?);
    }
    Ok(render_breakdown(&breakdown, config.decimal_places))
}

/// Human-readable rendering, amounts rounded to `places`
pub fn render_breakdown(breakdown: &PriceBreakdown, places: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} x {} = {}",
        breakdown.quantity,
        format_money(breakdown.unit_price, places),
        format_money(breakdown.list_price, places)
    );
    for layer in &breakdown.layers {
        let _ = writeln!(
            out,
            "  {} ({}): {}, adjustment {}",
            layer.name,
            layer.description,
            format_money(layer.amount, places),
            format_money(layer.adjustment, places)
        );
    }
    let _ = write!(out, "Total: {}", format_money(breakdown.total, places));
    out
}
