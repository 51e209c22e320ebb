//! Value Registry - Maps dynasty assets to comparable trade values
//!
//! This crate reconciles player records from several valuation sources into a
//! single lookup table keyed by normalized name, and values future draft picks
//! from the pick rows those sources publish.

pub mod merge;
pub mod normalize;
pub mod picks;
pub mod registry;
pub mod types;

pub use normalize::{normalize, NormalizedKey};
pub use picks::{ordinal, PickSlot, PickTable, PickValues};
pub use registry::{Suggestion, ValueRegistry};
pub use types::{LeagueSettings, MergedValueRecord, ParsePickSlotError, RawValueRecord};

/// Value assigned to an athlete no source knows about
pub const DEFAULT_VALUE: i64 = 5;

/// Maximum number of name suggestions returned for a partial query
pub const MAX_SUGGESTIONS: usize = 10;

/// Round half up, the rounding every value in this crate uses
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
