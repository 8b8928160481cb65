use clap::Parser;
use pricing_engine::quote::{self, QuoteRequest};
use pricing_engine::{EngineConfig, init_logger_with_file};

fn main() -> anyhow::Result<()> {
    // 1. Arguments (--help and --version exit here)
    let request = QuoteRequest::parse();

    // 2. Environment (.env) and logging
    let _ = dotenv::dotenv();
    let config = EngineConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    // 3. Price the line; a failure is printed once by the returned error
    let output = quote::run(&request, &config)?;
    println!("{}", output);
    Ok(())
}
