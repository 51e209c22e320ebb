//! Market value JSON payload parsing

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use value_registry::RawValueRecord;

/// One player as published by the market value feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPlayer {
    pub name: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub team: Option<String>,

    pub value: f64,
}

impl From<MarketPlayer> for RawValueRecord {
    fn from(player: MarketPlayer) -> Self {
        let position = (!player.position.is_empty()).then_some(player.position);
        RawValueRecord::market(player.name, position, player.team, Some(player.value))
    }
}

/// The feed has shipped the player list bare and wrapped in two different envelopes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MarketPayload {
    List(Vec<MarketPlayer>),
    Players { players: Vec<MarketPlayer> },
    Data { data: Vec<MarketPlayer> },
}

/// Parse a market value payload into raw records
///
/// Valid JSON in an unrecognised shape yields no records; invalid JSON is an error.
pub fn parse_market_values(json: &str) -> Result<Vec<RawValueRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let players = match serde_json::from_value::<MarketPayload>(value) {
        Ok(MarketPayload::List(players))
        | Ok(MarketPayload::Players { players })
        | Ok(MarketPayload::Data { data: players }) => players,
        Err(e) => {
            warn!("Unexpected market payload format: {}", e);
            return Ok(Vec::new());
        }
    };

    info!("Parsed {} market players", players.len());
    Ok(players.into_iter().map(RawValueRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_list() {
        let json = r#"[
            {"name": "Josh Allen", "position": "QB", "team": "BUF", "value": 9500},
            {"name": "Travis Kelce", "position": "TE", "value": 6500.5}
        ]"#;
        let records = parse_market_values(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Josh Allen");
        assert_eq!(records[0].team.as_deref(), Some("BUF"));
        assert_eq!(records[0].value_for(false), Some(9500.0));
        assert_eq!(records[1].team, None);
        assert_eq!(records[1].value_for(true), Some(6500.5));
    }

    #[test]
    fn test_wrapped_payloads() {
        let players = r#"{"players": [{"name": "Breece Hall", "position": "RB", "value": 8200}]}"#;
        let data = r#"{"data": [{"name": "Bijan Robinson", "position": "RB", "value": 8000}]}"#;
        assert_eq!(parse_market_values(players).unwrap()[0].name, "Breece Hall");
        assert_eq!(parse_market_values(data).unwrap()[0].name, "Bijan Robinson");
    }

    #[test]
    fn test_missing_position_is_absent() {
        let records = parse_market_values(r#"[{"name": "Mystery Man", "value": 10}]"#).unwrap();
        assert_eq!(records[0].position, None);
    }

    #[test]
    fn test_unexpected_shape_yields_nothing() {
        assert!(parse_market_values(r#"{"status": "ok"}"#).unwrap().is_empty());
        assert!(parse_market_values("42").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_market_values("{not json").is_err());
    }
}
