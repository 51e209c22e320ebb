//! Source Parser - Turns raw valuation source payloads into value records
//!
//! Two shapes are understood: the dynasty CSV export (1QB and 2QB values per
//! row, pick rows mixed in) and the market JSON payload (one value per player).
//! Nothing here touches the network; callers hand over text they already have.

pub mod error;
pub mod fallback;
pub mod market;
pub mod values_csv;

pub use error::{Result, SourceError};
pub use fallback::sample_market_records;
pub use market::{parse_market_values, MarketPlayer};
pub use values_csv::{parse_values_csv, split_csv_line};
