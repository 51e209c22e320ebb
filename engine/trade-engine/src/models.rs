use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use value_registry::{PickSlot, DEFAULT_VALUE};

/// Unique identifier of an asset within a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub Uuid);

impl AssetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fantasy position of an athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    QB,
    #[default]
    RB,
    WR,
    TE,
}

impl Position {
    /// Map a source position label, defaulting to RB for anything unrecognised
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_uppercase()).as_deref() {
            Some("QB") => Position::QB,
            Some("WR") => Position::WR,
            Some("TE") => Position::TE,
            _ => Position::RB,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player included in a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: AssetId,
    pub name: String,
    pub position: Position,
    pub age: Option<u32>,
    /// Value snapshot; refreshed whenever the registry is rebuilt
    pub value: i64,
}

impl Athlete {
    /// A blank athlete row waiting for a name
    pub fn blank() -> Self {
        Self { id: AssetId::new(), name: String::new(), position: Position::RB, age: None, value: DEFAULT_VALUE }
    }
}

/// A future draft pick included in a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub id: AssetId,
    pub year: i32,
    pub round: u32,
    pub slot: PickSlot,
    pub value: i64,
}

impl fmt::Display for DraftPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.slot, value_registry::ordinal(self.round))
    }
}

/// Anything that can change hands in a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeAsset {
    Athlete(Athlete),
    DraftPick(DraftPick),
}

impl TradeAsset {
    pub fn id(&self) -> AssetId {
        match self {
            TradeAsset::Athlete(athlete) => athlete.id,
            TradeAsset::DraftPick(pick) => pick.id,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            TradeAsset::Athlete(athlete) => athlete.value,
            TradeAsset::DraftPick(pick) => pick.value,
        }
    }

    /// Human readable label ("Ja'Marr Chase", "2026 Early 1st")
    pub fn label(&self) -> String {
        match self {
            TradeAsset::Athlete(athlete) => athlete.name.clone(),
            TradeAsset::DraftPick(pick) => pick.to_string(),
        }
    }
}

/// One of the two parties to a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "Team A"),
            Side::B => write!(f, "Team B"),
        }
    }
}

/// Which side, if either, comes out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    SideA,
    SideB,
    Fair,
}

/// Outcome of a fairness evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    pub team_a_value: i64,
    pub team_b_value: i64,
    /// Team A total minus team B total
    pub difference: i64,
    /// 0-100, rounded
    pub fairness_percentage: u32,
    pub winner: Verdict,
    pub message: String,
}
