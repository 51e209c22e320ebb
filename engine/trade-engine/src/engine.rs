use crate::calculator::FairnessCalculator;
use crate::config::TradeConfig;
use crate::error::{Result, TradeError};
use crate::models::{AssetId, Athlete, DraftPick, Position, Side, TradeAsset, TradeResult};
use crate::share::{self, SharedTrade};
use tracing::{debug, info};
use value_registry::{
    LeagueSettings, MergedValueRecord, PickSlot, PickTable, RawValueRecord, Suggestion, ValueRegistry,
};

/// An editable trade between two teams
///
/// The session keeps the raw source records so it can rebuild the value
/// registry whenever league settings change, and it refreshes every asset's
/// value snapshot after each rebuild.
pub struct TradeSession {
    dynasty: Vec<RawValueRecord>,
    market: Vec<RawValueRecord>,
    registry: ValueRegistry,
    picks: PickTable,
    settings: LeagueSettings,
    calculator: FairnessCalculator,
    team_a: Vec<TradeAsset>,
    team_b: Vec<TradeAsset>,
}

impl TradeSession {
    /// Create a session from both sources
    ///
    /// Pick values are read from the dynasty source rows.
    pub fn new(dynasty: Vec<RawValueRecord>, market: Vec<RawValueRecord>, config: &TradeConfig) -> Self {
        let settings = config.league;
        let registry = ValueRegistry::build(&dynasty, &market, settings);
        let picks = PickTable::from_records(&dynasty).with_nearest_year(config.picks.nearest_year);

        info!(
            "Created trade session with {} players and {} pick values",
            registry.len(),
            picks.len()
        );

        Self {
            dynasty,
            market,
            registry,
            picks,
            settings,
            calculator: FairnessCalculator::new(config.fairness.clone()),
            team_a: Vec::new(),
            team_b: Vec::new(),
        }
    }

    pub fn registry(&self) -> &ValueRegistry {
        &self.registry
    }

    pub fn picks(&self) -> &PickTable {
        &self.picks
    }

    pub fn settings(&self) -> LeagueSettings {
        self.settings
    }

    pub fn assets(&self, side: Side) -> &[TradeAsset] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    fn assets_mut(&mut self, side: Side) -> &mut Vec<TradeAsset> {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    fn push(&mut self, side: Side, asset: TradeAsset) -> &TradeAsset {
        debug!("Adding {} ({}) to {}", asset.label(), asset.value(), side);
        let assets = self.assets_mut(side);
        assets.push(asset);
        &assets[assets.len() - 1]
    }

    fn athlete_from_record(id: AssetId, record: &MergedValueRecord) -> Athlete {
        Athlete {
            id,
            name: record.original_name.clone(),
            position: Position::from_label(record.position.as_deref()),
            age: record.age,
            value: record.merged,
        }
    }

    /// Add a player by name
    ///
    /// Known players take their registry name, position, age and value; unknown
    /// names are kept as typed with the default value.
    pub fn add_athlete(&mut self, side: Side, name: &str) -> &TradeAsset {
        let athlete = match self.registry.get(name) {
            Some(record) => Self::athlete_from_record(AssetId::new(), record),
            None => {
                debug!("No value found for {:?}, using default", name);
                Athlete { name: name.to_string(), ..Athlete::blank() }
            }
        };
        self.push(side, TradeAsset::Athlete(athlete))
    }

    /// Add an empty player row
    pub fn new_athlete(&mut self, side: Side) -> &TradeAsset {
        self.push(side, TradeAsset::Athlete(Athlete::blank()))
    }

    /// Add a draft pick valued from the pick table
    pub fn add_pick(&mut self, side: Side, year: i32, round: u32, slot: PickSlot) -> &TradeAsset {
        let value = self.picks.valuate(year, round, slot, self.settings.superflex);
        let pick = DraftPick { id: AssetId::new(), year, round, slot, value };
        self.push(side, TradeAsset::DraftPick(pick))
    }

    /// Add a first round pick in the middle of the nearest draft
    pub fn new_pick(&mut self, side: Side) -> &TradeAsset {
        let year = self.picks.nearest_year();
        self.add_pick(side, year, 1, PickSlot::Mid)
    }

    /// Replace the asset at `index`
    ///
    /// Draft picks are re-valued from their year, round and slot; athletes are
    /// stored as given.
    pub fn update_asset(&mut self, side: Side, index: usize, asset: TradeAsset) -> Result<()> {
        let asset = match asset {
            TradeAsset::DraftPick(pick) => TradeAsset::DraftPick(self.revalue_pick(pick)),
            athlete => athlete,
        };

        let assets = self.assets_mut(side);
        let len = assets.len();
        let slot = assets.get_mut(index).ok_or(TradeError::AssetIndex { side, index, len })?;
        *slot = asset;
        Ok(())
    }

    /// Remove and return the asset at `index`
    pub fn remove_asset(&mut self, side: Side, index: usize) -> Result<TradeAsset> {
        let assets = self.assets_mut(side);
        if index >= assets.len() {
            return Err(TradeError::AssetIndex { side, index, len: assets.len() });
        }
        Ok(assets.remove(index))
    }

    /// Name suggestions for a partial player name
    pub fn suggest(&self, input: &str) -> Vec<Suggestion> {
        self.registry.suggest(input)
    }

    /// Fill the athlete at `index` from a chosen suggestion
    pub fn select_suggestion(&mut self, side: Side, index: usize, key: &str) -> Result<()> {
        let record = self.registry.get_by_key(key).ok_or_else(|| TradeError::UnknownPlayer(key.to_string()))?.clone();

        let assets = self.assets_mut(side);
        let len = assets.len();
        let asset = assets.get_mut(index).ok_or(TradeError::AssetIndex { side, index, len })?;
        let id = asset.id();
        *asset = TradeAsset::Athlete(Self::athlete_from_record(id, &record));
        Ok(())
    }

    fn revalue_pick(&self, pick: DraftPick) -> DraftPick {
        let value = self.picks.valuate(pick.year, pick.round, pick.slot, self.settings.superflex);
        DraftPick { value, ..pick }
    }

    /// Change league settings, rebuild the registry and refresh every asset
    ///
    /// Athletes missing from the rebuilt registry keep their previous value.
    pub fn set_settings(&mut self, settings: LeagueSettings) {
        info!(
            "Recalculating values - superflex: {}, te_premium: {}",
            settings.superflex, settings.te_premium
        );
        self.settings = settings;
        self.registry = ValueRegistry::build(&self.dynasty, &self.market, settings);

        for side in [Side::A, Side::B] {
            let refreshed: Vec<TradeAsset> = self
                .assets(side)
                .iter()
                .cloned()
                .map(|asset| self.refresh(asset))
                .collect();
            *self.assets_mut(side) = refreshed;
        }
    }

    fn refresh(&self, asset: TradeAsset) -> TradeAsset {
        match asset {
            TradeAsset::Athlete(athlete) => {
                let value = self.registry.value_of(&athlete.name).unwrap_or(athlete.value);
                TradeAsset::Athlete(Athlete { value, ..athlete })
            }
            TradeAsset::DraftPick(pick) => TradeAsset::DraftPick(self.revalue_pick(pick)),
        }
    }

    /// Evaluate the current trade
    pub fn evaluate(&self) -> TradeResult {
        self.calculator.evaluate(&self.team_a, &self.team_b)
    }

    /// Snapshot of both bundles and the settings
    pub fn shared(&self) -> SharedTrade {
        SharedTrade { team_a: self.team_a.clone(), team_b: self.team_b.clone(), settings: self.settings }
    }

    /// Encode the current trade as a share token
    pub fn share_token(&self) -> Result<String> {
        share::encode(&self.shared())
    }

    /// Replace the trade with one decoded from a share token
    ///
    /// Returns false, leaving the session untouched, when the token does not
    /// decode. Restored assets are refreshed against the local data.
    pub fn restore(&mut self, token: &str) -> bool {
        let Some(shared) = share::decode(token) else {
            return false;
        };

        self.team_a = shared.team_a;
        self.team_b = shared.team_b;
        self.set_settings(shared.settings);
        true
    }

    /// Drop every asset from both sides
    pub fn clear(&mut self) {
        self.team_a.clear();
        self.team_b.clear();
    }
}
