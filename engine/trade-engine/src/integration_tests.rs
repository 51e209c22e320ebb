//! End-to-end tests: source payloads through a trade session to a verdict

use crate::config::TradeConfig;
use crate::engine::TradeSession;
use crate::models::{Side, TradeAsset, Verdict};
use crate::share;
use source_parser::{parse_market_values, parse_values_csv, sample_market_records};
use value_registry::{LeagueSettings, PickSlot};

const VALUES_CSV: &str = "\
player,pos,team,age,value_1qb,value_2qb,fp_id
Ja'Marr Chase,WR,CIN,24,100,90,1
Josh Allen,QB,BUF,28,60,120,2
Sam LaPorta,TE,DET,23,10,10,3
Travis Kelce,TE,KC,35,30,30,4
\"Smith-Njigba, Jaxon\",WR,SEA,22,45,40,5
2026 Early 1st,PICK,,,6200,6900,
2026 Late 1st,PICK,,,4800,5200,
2027 1st,PICK,,,4500,5000,
";

const MARKET_JSON: &str = r#"{"players": [
    {"name": "JaMarr Chase", "position": "WR", "team": "CIN", "value": 200},
    {"name": "Ja Marr Chase", "position": "WR", "team": "CIN", "value": 200},
    {"name": "Breece Hall", "position": "RB", "team": "NYJ", "value": 50},
    {"name": "Travis Kelce", "position": "TE", "team": "KC", "value": 70}
]}"#;

fn session_with(settings: LeagueSettings) -> TradeSession {
    let config = TradeConfig { league: settings, ..TradeConfig::default() };
    let dynasty = parse_values_csv(VALUES_CSV);
    let market = parse_market_values(MARKET_JSON).unwrap();
    TradeSession::new(dynasty, market, &config)
}

#[test]
fn test_merged_values_from_parsed_sources() {
    let session = session_with(LeagueSettings::default());
    let registry = session.registry();

    assert_eq!(registry.value_of("Ja'Marr Chase"), Some(170));
    assert_eq!(registry.value_of("Breece Hall"), Some(50));
    // 30 * 0.3 + 70 * 0.7
    assert_eq!(registry.value_of("Travis Kelce"), Some(58));
    assert_eq!(session.picks().len(), 3);
}

#[test]
fn test_te_premium_tiers_through_session() {
    let session = session_with(LeagueSettings::new(false, true));
    let registry = session.registry();

    assert_eq!(registry.value_of("Sam LaPorta"), Some(20));
    assert_eq!(registry.value_of("Travis Kelce"), Some(81));
    assert_eq!(registry.value_of("Josh Allen"), Some(60));
}

#[test]
fn test_full_trade_flow() {
    let mut session = session_with(LeagueSettings::default());

    session.add_athlete(Side::A, "ja'marr chase");
    session.add_pick(Side::B, 2026, 1, PickSlot::Early);
    session.add_athlete(Side::B, "Josh Allen");

    let result = session.evaluate();
    assert_eq!(result.team_a_value, 170);
    assert_eq!(result.team_b_value, 6260);
    assert_eq!(result.winner, Verdict::SideB);
    assert_eq!(result.fairness_percentage, 0);

    // swap the pick for a later year and flip to superflex
    let pick = match session.assets(Side::B)[0].clone() {
        TradeAsset::DraftPick(pick) => pick,
        other => panic!("expected pick, got {other:?}"),
    };
    session
        .update_asset(Side::B, 0, TradeAsset::DraftPick(crate::models::DraftPick { year: 2027, ..pick }))
        .unwrap();
    assert_eq!(session.assets(Side::B)[0].value(), 4500);

    session.set_settings(LeagueSettings::new(true, false));
    assert_eq!(session.assets(Side::B)[0].value(), 5000);
    assert_eq!(session.assets(Side::B)[1].value(), 120);
    // 90 * 0.3 + 200 * 0.7
    assert_eq!(session.assets(Side::A)[0].value(), 167);
}

#[test]
fn test_partial_name_search_over_parsed_data() {
    let session = session_with(LeagueSettings::default());
    let suggestions = session.suggest("njigba");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].original_name, "Smith-Njigba, Jaxon");
}

#[test]
fn test_shared_link_round_trip_between_sessions() {
    let mut sender = session_with(LeagueSettings::new(false, true));
    sender.add_athlete(Side::A, "Travis Kelce");
    sender.add_pick(Side::B, 2026, 1, PickSlot::Late);

    let url = share::share_url("https://trade.example/calc", &sender.share_token().unwrap()).unwrap();
    let token = share::token_from_url(&url).unwrap();

    let mut receiver = session_with(LeagueSettings::default());
    assert!(receiver.restore(&token));
    assert_eq!(receiver.settings(), LeagueSettings::new(false, true));
    assert_eq!(receiver.evaluate(), sender.evaluate());
}

#[test]
fn test_fallback_sample_data_session() {
    let mut session = TradeSession::new(Vec::new(), sample_market_records(), &TradeConfig::default());
    session.add_athlete(Side::A, "Justin Jefferson");
    session.add_athlete(Side::B, "CeeDee Lamb");
    session.add_athlete(Side::B, "Sam LaPorta");

    let result = session.evaluate();
    assert_eq!(result.team_a_value, 9000);
    assert_eq!(result.team_b_value, 14300);
    assert_eq!(result.winner, Verdict::SideB);
    assert_eq!(result.message, "Team B gains +58.9% value");
    // no pick rows in the market sample
    assert_eq!(session.picks().valuate(2026, 1, PickSlot::Early, false), 3000);
}
