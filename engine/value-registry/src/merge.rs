//! Merge formula combining source A (dynasty) and source B (market) values

use crate::{round_half_up, DEFAULT_VALUE};

/// Weight of the dynasty (source A) value when both sources are present
pub const DYNASTY_WEIGHT: f64 = 0.3;

/// Weight of the market (source B) value when both sources are present
pub const MARKET_WEIGHT: f64 = 0.7;

/// Base value before any positional adjustment
///
/// Weighted average when both sources know the player, the single known value
/// otherwise, and [`DEFAULT_VALUE`] when neither does.
pub fn base_value(dynasty: Option<f64>, market: Option<f64>) -> i64 {
    match (dynasty, market) {
        (Some(d), Some(m)) => round_half_up(d * DYNASTY_WEIGHT + m * MARKET_WEIGHT),
        (None, Some(m)) => round_half_up(m),
        (Some(d), None) => round_half_up(d),
        (None, None) => DEFAULT_VALUE,
    }
}

/// Tiered tight end premium multiplier for a base value
pub fn te_premium_multiplier(base: i64) -> f64 {
    if base >= 50 {
        1.4
    } else if base >= 20 {
        1.6
    } else {
        2.0
    }
}

pub fn apply_te_premium(base: i64) -> i64 {
    round_half_up(base as f64 * te_premium_multiplier(base))
}
