//! Shareable trade links
//!
//! A trade (both bundles plus league settings) is serialized to JSON and
//! base64 encoded so it fits in a URL query parameter.

use crate::error::Result;
use crate::models::TradeAsset;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;
use value_registry::LeagueSettings;

/// Query parameter carrying the encoded trade
pub const TRADE_PARAM: &str = "trade";

/// Everything needed to reproduce a trade on another machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedTrade {
    pub team_a: Vec<TradeAsset>,
    pub team_b: Vec<TradeAsset>,
    pub settings: LeagueSettings,
}

/// Encode a trade as a URL-safe token
pub fn encode(trade: &SharedTrade) -> Result<String> {
    let json = serde_json::to_vec(trade)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token produced by [`encode`]
///
/// Tokens in the standard base64 alphabet are accepted too. Anything that does
/// not decode to a trade yields `None`.
pub fn decode(token: &str) -> Option<SharedTrade> {
    let token = token.trim();
    let bytes = match URL_SAFE_NO_PAD.decode(token).or_else(|_| STANDARD.decode(token)) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Shared trade token is not base64: {}", e);
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(trade) => Some(trade),
        Err(e) => {
            warn!("Shared trade token does not hold a trade: {}", e);
            None
        }
    }
}

/// Put the token into the `trade` query parameter of a base URL
///
/// Any existing `trade` parameter is replaced; other parameters and the
/// fragment are kept.
pub fn share_url(base_url: &str, token: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != TRADE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut().clear().extend_pairs(kept).append_pair(TRADE_PARAM, token);
    Ok(url.into())
}

/// Pull the token out of a share URL; a bare token is returned unchanged
///
/// The query value is percent-decoded, so tokens in the standard base64
/// alphabet survive a trip through a browser.
pub fn token_from_url(input: &str) -> Option<String> {
    let input = input.trim();
    match Url::parse(input) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == TRADE_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty()),
        Err(_) => (!input.is_empty() && !input.contains(char::is_whitespace)).then(|| input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetId, Athlete, DraftPick, Position};
    use value_registry::PickSlot;

    fn sample_trade() -> SharedTrade {
        SharedTrade {
            team_a: vec![TradeAsset::Athlete(Athlete {
                id: AssetId::new(),
                name: "Ja'Marr Chase".to_string(),
                position: Position::WR,
                age: Some(24),
                value: 8700,
            })],
            team_b: vec![TradeAsset::DraftPick(DraftPick {
                id: AssetId::new(),
                year: 2026,
                round: 1,
                slot: PickSlot::Early,
                value: 6200,
            })],
            settings: LeagueSettings::new(true, false),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let trade = sample_trade();
        let token = encode(&trade).unwrap();
        assert!(!token.contains('+') && !token.contains('/') && !token.contains('='));
        assert_eq!(decode(&token), Some(trade));
    }

    #[test]
    fn test_standard_alphabet_is_accepted() {
        let trade = sample_trade();
        let token = STANDARD.encode(serde_json::to_vec(&trade).unwrap());
        assert_eq!(decode(&token), Some(trade));
    }

    #[test]
    fn test_malformed_tokens_yield_none() {
        assert_eq!(decode("***"), None);
        assert_eq!(decode(""), None);
        // valid base64, not a trade
        assert_eq!(decode(&URL_SAFE_NO_PAD.encode(b"{\"hello\": 1}")), None);
    }

    #[test]
    fn test_share_url_replaces_existing_param() {
        assert_eq!(share_url("https://trade.example/", "abc").unwrap(), "https://trade.example/?trade=abc");
        assert_eq!(
            share_url("https://trade.example/?league=12&trade=old", "new").unwrap(),
            "https://trade.example/?league=12&trade=new"
        );
    }

    #[test]
    fn test_share_url_keeps_fragment_after_query() {
        let url = share_url("https://trade.example/calc#results", "abc").unwrap();
        assert_eq!(url, "https://trade.example/calc?trade=abc#results");
        assert_eq!(token_from_url(&url), Some("abc".to_string()));
    }

    #[test]
    fn test_share_url_rejects_relative_base() {
        assert!(matches!(share_url("not a url", "abc"), Err(crate::error::TradeError::Url(_))));
    }

    #[test]
    fn test_token_from_url() {
        assert_eq!(token_from_url("https://trade.example/?league=12&trade=abc#top"), Some("abc".to_string()));
        assert_eq!(token_from_url("https://trade.example/?league=12"), None);
        assert_eq!(token_from_url("https://trade.example/?trade="), None);
        assert_eq!(token_from_url(" abc123 "), Some("abc123".to_string()));
        assert_eq!(token_from_url("https://trade.example/"), None);
        assert_eq!(token_from_url(""), None);
    }

    #[test]
    fn test_percent_encoded_token_is_decoded() {
        assert_eq!(token_from_url("https://trade.example/?trade=ab%2Bc%2Fd%3D%3D"), Some("ab+c/d==".to_string()));

        let trade = sample_trade();
        let token = STANDARD.encode(serde_json::to_vec(&trade).unwrap());
        let url = share_url("https://trade.example/calc", &token).unwrap();
        assert_eq!(token_from_url(&url).and_then(|token| decode(&token)), Some(trade));
    }
}
