use shared::money::DECIMAL_PLACES;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PRICING_DECIMAL_PLACES | 2 | places used when rounding amounts for output |
/// | LOG_LEVEL | info | log level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
///
/// Rounding only applies to presentation. Chains always compute with the
/// full precision of `Decimal`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Decimal places for rounded output
    pub decimal_places: u32,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log directory, file logging is off when unset
    pub log_dir: Option<String>,
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            decimal_places: std::env::var("PRICING_DECIMAL_PLACES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DECIMAL_PLACES),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Override the output precision, mostly for tests
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decimal_places: DECIMAL_PLACES,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
