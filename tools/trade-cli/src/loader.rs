//! Reads valuation source files from disk

use anyhow::{Context, Result};
use source_parser::{parse_market_values, parse_values_csv, sample_market_records};
use std::path::Path;
use tracing::{info, warn};
use trade_engine::config::SourceConfig;
use value_registry::RawValueRecord;

/// Records from every configured source
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub dynasty: Vec<RawValueRecord>,
    pub market: Vec<RawValueRecord>,
}

/// Load both sources; a source that fails to load contributes nothing
///
/// When neither source yields a record the built-in sample market values are
/// used instead.
pub async fn load_sources(sources: &SourceConfig) -> LoadedSources {
    let dynasty = match &sources.values_csv {
        Some(path) => read_values_csv(path).await.unwrap_or_else(|e| {
            warn!("Skipping dynasty values: {:#}", e);
            Vec::new()
        }),
        None => Vec::new(),
    };

    let market = match &sources.market_json {
        Some(path) => read_market_json(path).await.unwrap_or_else(|e| {
            warn!("Skipping market values: {:#}", e);
            Vec::new()
        }),
        None => Vec::new(),
    };

    if dynasty.is_empty() && market.is_empty() {
        warn!("No player data loaded, using sample values");
        return LoadedSources { dynasty, market: sample_market_records() };
    }

    info!("Loaded {} dynasty records and {} market records", dynasty.len(), market.len());
    LoadedSources { dynasty, market }
}

async fn read_values_csv(path: &Path) -> Result<Vec<RawValueRecord>> {
    let text = read_source(path).await?;
    Ok(parse_values_csv(&text))
}

async fn read_market_json(path: &Path) -> Result<Vec<RawValueRecord>> {
    let text = read_source(path).await?;
    parse_market_values(&text).with_context(|| format!("Invalid market payload in {}", path.display()))
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.with_context(|| format!("Failed to read {}", path.display()))
}
