//! Configuration for the trade calculator

use crate::error::{Result, TradeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use value_registry::picks::DEFAULT_NEAREST_YEAR;
use value_registry::LeagueSettings;

/// Main trade calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeConfig {
    /// League scoring settings
    pub league: LeagueSettings,

    /// Fairness verdict thresholds
    pub fairness: FairnessParameters,

    /// Draft pick valuation parameters
    pub picks: PickParameters,

    /// Where source data is read from
    pub sources: SourceConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Fairness verdict thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairnessParameters {
    /// Fairness percentage at or above which a trade is "very fair"
    pub very_fair_threshold: f64,

    /// Difference, as a share of the average side total, still called fair
    pub fair_band: f64,
}

/// Draft pick valuation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickParameters {
    /// Draft year whose picks are valued per Early/Mid/Late slot
    pub nearest_year: i32,
}

/// Source data locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Dynasty value CSV export
    pub values_csv: Option<PathBuf>,

    /// Market value JSON payload
    pub market_json: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for FairnessParameters {
    fn default() -> Self {
        Self { very_fair_threshold: 95.0, fair_band: 0.05 }
    }
}

impl Default for PickParameters {
    fn default() -> Self {
        Self { nearest_year: DEFAULT_NEAREST_YEAR }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl TradeConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: TradeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TradeError::config(format!("cannot serialize configuration: {e}")))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                tracing::debug!("Loading configuration from file: {:?}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `TRADE_*` environment variables
    pub fn apply_env(&mut self) {
        if let Ok(superflex) = std::env::var("TRADE_SUPERFLEX") {
            self.league.superflex = parse_flag(&superflex);
        }

        if let Ok(te_premium) = std::env::var("TRADE_TE_PREMIUM") {
            self.league.te_premium = parse_flag(&te_premium);
        }

        if let Ok(year) = std::env::var("TRADE_NEAREST_PICK_YEAR") {
            self.picks.nearest_year = year.parse().unwrap_or(DEFAULT_NEAREST_YEAR);
        }

        if let Ok(path) = std::env::var("TRADE_VALUES_CSV") {
            self.sources.values_csv = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("TRADE_MARKET_JSON") {
            self.sources.market_json = Some(PathBuf::from(path));
        }

        if let Ok(level) = std::env::var("TRADE_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(format) = std::env::var("TRADE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let threshold = self.fairness.very_fair_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(TradeError::config(format!("very_fair_threshold must be within 0-100, got {threshold}")));
        }

        let band = self.fairness.fair_band;
        if !(0.0..=1.0).contains(&band) {
            return Err(TradeError::config(format!("fair_band must be within 0-1, got {band}")));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            level => return Err(TradeError::config(format!("Invalid log level: {level}"))),
        }

        match self.logging.format.as_str() {
            "json" | "pretty" | "compact" => {}
            format => return Err(TradeError::config(format!("Invalid log format: {format}"))),
        }

        Ok(())
    }
}
