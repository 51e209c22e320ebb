use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::merge;

/// League scoring settings that change how values are merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueSettings {
    /// Two quarterbacks can start (selects the 2QB dynasty value)
    pub superflex: bool,

    /// Tight ends earn extra points per reception
    pub te_premium: bool,
}

impl LeagueSettings {
    pub fn new(superflex: bool, te_premium: bool) -> Self {
        Self { superflex, te_premium }
    }
}

/// A record for one player (or pick row) as delivered by a valuation source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawValueRecord {
    /// Display name exactly as the source spells it (e.g., "Ja'Marr Chase")
    pub name: String,

    /// Position (e.g., "QB", "RB", "WR", "TE", "PICK")
    pub position: Option<String>,

    pub age: Option<u32>,

    /// Team abbreviation, only some sources carry it
    pub team: Option<String>,

    /// Value in single quarterback leagues
    pub value_1qb: Option<f64>,

    /// Value in superflex leagues
    pub value_2qb: Option<f64>,
}

impl RawValueRecord {
    /// Record from a source that publishes separate 1QB and 2QB values
    pub fn dynasty(
        name: impl Into<String>,
        position: Option<String>,
        age: Option<u32>,
        value_1qb: Option<f64>,
        value_2qb: Option<f64>,
    ) -> Self {
        Self { name: name.into(), position, age, team: None, value_1qb, value_2qb }
    }

    /// Record from a source that publishes one value regardless of QB format
    pub fn market(
        name: impl Into<String>,
        position: Option<String>,
        team: Option<String>,
        value: Option<f64>,
    ) -> Self {
        Self { name: name.into(), position, age: None, team, value_1qb: value, value_2qb: value }
    }

    /// Value for the requested QB format
    pub fn value_for(&self, superflex: bool) -> Option<f64> {
        if superflex {
            self.value_2qb
        } else {
            self.value_1qb
        }
    }

    /// Position, treating an empty string as absent
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref().filter(|p| !p.is_empty())
    }
}

/// One entry of the lookup table: a player as seen by every source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedValueRecord {
    /// First non-empty display name seen
    pub original_name: String,

    pub position: Option<String>,

    pub age: Option<u32>,

    pub team: Option<String>,

    /// Source A 1QB value
    pub dynasty_1qb: Option<f64>,

    /// Source A 2QB value
    pub dynasty_2qb: Option<f64>,

    /// Source B value
    pub market: Option<f64>,

    /// Merged value under the settings the table was built with
    pub merged: i64,
}

impl MergedValueRecord {
    pub(crate) fn seed(record: &RawValueRecord) -> Self {
        Self {
            original_name: record.name.clone(),
            position: record.position().map(str::to_string),
            age: record.age,
            team: record.team.clone(),
            dynasty_1qb: None,
            dynasty_2qb: None,
            market: None,
            merged: 0,
        }
    }

    /// Fill fields that are still empty, keeping whatever was seen first
    pub(crate) fn fill_missing(&mut self, record: &RawValueRecord) {
        if self.original_name.is_empty() && !record.name.is_empty() {
            self.original_name = record.name.clone();
        }
        if self.position.is_none() {
            self.position = record.position().map(str::to_string);
        }
        if self.age.is_none() {
            self.age = record.age;
        }
        if self.team.is_none() {
            self.team = record.team.clone();
        }
    }

    /// Source A value for the requested QB format
    pub fn dynasty_value(&self, superflex: bool) -> Option<f64> {
        if superflex {
            self.dynasty_2qb
        } else {
            self.dynasty_1qb
        }
    }

    pub fn is_tight_end(&self) -> bool {
        self.position.as_deref() == Some("TE")
    }

    /// Merge the per-source values under the given settings
    pub fn compute_merged(&self, settings: LeagueSettings) -> i64 {
        let base = merge::base_value(self.dynasty_value(settings.superflex), self.market);
        if settings.te_premium && self.is_tight_end() {
            merge::apply_te_premium(base)
        } else {
            base
        }
    }
}

/// Error returned when a draft pick slot label is not Early, Mid or Late
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid pick slot: {0} (expected Early, Mid or Late)")]
pub struct ParsePickSlotError(pub String);
