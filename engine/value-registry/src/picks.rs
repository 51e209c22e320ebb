//! Draft pick valuation
//!
//! Pick values arrive as pseudo-player rows in the dynasty source ("2026 Early 1st",
//! "2027 2nd", ...). They are matched by exact name, never normalized.

use crate::types::{ParsePickSlotError, RawValueRecord};
use crate::round_half_up;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Draft year whose picks are valued per slot; later years only per round
pub const DEFAULT_NEAREST_YEAR: i32 = 2026;

/// Fallback value for a first round pick missing from the table
pub const FIRST_ROUND_FALLBACK: i64 = 3000;

/// Fallback value for a second round pick missing from the table
pub const SECOND_ROUND_FALLBACK: i64 = 1000;

/// Fallback value for any later round pick missing from the table
pub const LATE_ROUND_FALLBACK: i64 = 500;

/// Name fragments that mark a source row as a pick rather than a player
const PICK_MARKERS: [&str; 5] = ["Pick", "1st", "2nd", "3rd", "4th"];

/// Where in a round a pick is expected to land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PickSlot {
    Early,
    #[default]
    Mid,
    Late,
}

impl PickSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickSlot::Early => "Early",
            PickSlot::Mid => "Mid",
            PickSlot::Late => "Late",
        }
    }
}

impl fmt::Display for PickSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickSlot {
    type Err = ParsePickSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" => Ok(PickSlot::Early),
            "mid" => Ok(PickSlot::Mid),
            "late" => Ok(PickSlot::Late),
            _ => Err(ParsePickSlotError(s.to_string())),
        }
    }
}

/// Both QB-format values of one pick row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickValues {
    pub value_1qb: f64,
    pub value_2qb: f64,
}

/// Ordinal label for a draft round ("1st", "2nd", "3rd", "4th", "5th", ...)
pub fn ordinal(round: u32) -> String {
    match round {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        4 => "4th".to_string(),
        _ => format!("{round}th"),
    }
}

fn is_pick_row(record: &RawValueRecord) -> bool {
    match record.position() {
        None | Some("TE") => false,
        Some(_) => PICK_MARKERS.iter().any(|marker| record.name.contains(marker)),
    }
}

/// Table of draft pick values keyed by the source's pick row name
#[derive(Debug, Clone)]
pub struct PickTable {
    values: HashMap<String, PickValues>,
    nearest_year: i32,
}

impl Default for PickTable {
    fn default() -> Self {
        Self { values: HashMap::new(), nearest_year: DEFAULT_NEAREST_YEAR }
    }
}

impl PickTable {
    /// Create an empty table; every query falls back to the per-round values
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the pick rows out of a dynasty source
    pub fn from_records(records: &[RawValueRecord]) -> Self {
        let mut values = HashMap::new();

        for record in records.iter().filter(|r| is_pick_row(r)) {
            let pick = PickValues {
                value_1qb: record.value_1qb.unwrap_or(0.0),
                value_2qb: record.value_2qb.unwrap_or(0.0),
            };
            debug!("Pick row {}: {:?}", record.name, pick);
            values.insert(record.name.clone(), pick);
        }

        info!("Loaded {} pick values from {} source rows", values.len(), records.len());
        Self { values, nearest_year: DEFAULT_NEAREST_YEAR }
    }

    /// Override the draft year whose picks are distinguished by slot
    pub fn with_nearest_year(mut self, year: i32) -> Self {
        self.nearest_year = year;
        self
    }

    pub fn nearest_year(&self) -> i32 {
        self.nearest_year
    }

    /// Table key for a pick: "2026 Early 1st" for the nearest year, "2027 2nd" beyond it
    pub fn pick_key(&self, year: i32, round: u32, slot: PickSlot) -> String {
        if year == self.nearest_year {
            format!("{year} {slot} {}", ordinal(round))
        } else {
            format!("{year} {}", ordinal(round))
        }
    }

    /// Value of a pick, falling back to a fixed value per round when the table
    /// has no row for it
    pub fn valuate(&self, year: i32, round: u32, slot: PickSlot, superflex: bool) -> i64 {
        match self.values.get(&self.pick_key(year, round, slot)) {
            Some(pick) if superflex => round_half_up(pick.value_2qb),
            Some(pick) => round_half_up(pick.value_1qb),
            None => Self::fallback_value(round),
        }
    }

    pub fn fallback_value(round: u32) -> i64 {
        match round {
            1 => FIRST_ROUND_FALLBACK,
            2 => SECOND_ROUND_FALLBACK,
            _ => LATE_ROUND_FALLBACK,
        }
    }

    pub fn get(&self, key: &str) -> Option<&PickValues> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
