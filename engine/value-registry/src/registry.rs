use crate::normalize::{normalize, NormalizedKey};
use crate::types::{LeagueSettings, MergedValueRecord, RawValueRecord};
use crate::MAX_SUGGESTIONS;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A candidate returned by a partial name search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub key: NormalizedKey,
    pub original_name: String,
}

/// Value Registry - Maps normalized player names to merged values
///
/// The registry is built from the dynasty source (source A) and the market
/// source (source B) for one set of league settings. Merged values depend on
/// those settings, so a settings change means building a new registry.
#[derive(Debug, Clone, Default)]
pub struct ValueRegistry {
    /// Map from normalized name to merged record
    records: BTreeMap<NormalizedKey, MergedValueRecord>,

    /// Settings the merged values were computed with
    settings: LeagueSettings,
}

impl ValueRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lookup table from both sources
    ///
    /// Source A is folded in first, then source B. Name, position, age and team
    /// keep the first non-empty value seen; each source only ever writes its own
    /// value slots.
    pub fn build(
        dynasty: &[RawValueRecord],
        market: &[RawValueRecord],
        settings: LeagueSettings,
    ) -> Self {
        let mut records: BTreeMap<NormalizedKey, MergedValueRecord> = BTreeMap::new();

        for record in dynasty {
            let entry = records
                .entry(normalize(&record.name))
                .or_insert_with(|| MergedValueRecord::seed(record));
            entry.fill_missing(record);
            entry.dynasty_1qb = record.value_1qb;
            entry.dynasty_2qb = record.value_2qb;
        }

        let dynasty_keys = records.len();

        for record in market {
            let entry = records
                .entry(normalize(&record.name))
                .or_insert_with(|| MergedValueRecord::seed(record));
            entry.fill_missing(record);
            entry.market = record.value_1qb.or(record.value_2qb);
        }

        for record in records.values_mut() {
            record.merged = record.compute_merged(settings);
        }

        debug!(
            "Merged {} dynasty rows and {} market rows ({} keys from dynasty, {} added by market)",
            dynasty.len(),
            market.len(),
            dynasty_keys,
            records.len() - dynasty_keys
        );
        info!(
            "Built value registry with {} players (superflex: {}, te_premium: {})",
            records.len(),
            settings.superflex,
            settings.te_premium
        );

        Self { records, settings }
    }

    /// Get a record by display name (normalized before lookup)
    pub fn get(&self, name: &str) -> Option<&MergedValueRecord> {
        self.records.get(normalize(name).as_str())
    }

    /// Get a record by an already normalized key
    pub fn get_by_key(&self, key: &str) -> Option<&MergedValueRecord> {
        self.records.get(key)
    }

    /// Merged value for a display name, if any source knows the player
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.get(name).map(|record| record.merged)
    }

    /// Search for players by partial name
    ///
    /// A player matches when any token of the normalized query is a substring
    /// of the player's key. Short tokens over-match; results are capped at
    /// [`MAX_SUGGESTIONS`] in key order.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = normalize(query);
        let tokens: Vec<&str> = query.tokens().collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|(key, _)| tokens.iter().any(|token| key.as_str().contains(token)))
            .take(MAX_SUGGESTIONS)
            .map(|(key, record)| Suggestion {
                key: key.clone(),
                original_name: record.original_name.clone(),
            })
            .collect()
    }

    /// All normalized names in sorted order
    pub fn all_names(&self) -> Vec<&NormalizedKey> {
        self.records.keys().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedKey, &MergedValueRecord)> {
        self.records.iter()
    }

    pub fn settings(&self) -> LeagueSettings {
        self.settings
    }

    /// Get player count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
