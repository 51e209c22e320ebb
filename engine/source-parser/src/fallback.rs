use value_registry::RawValueRecord;

/// Sample market values used when no source data could be loaded
const SAMPLE_PLAYERS: [(&str, &str, u32, f64); 12] = [
    ("Josh Allen", "QB", 28, 9500.0),
    ("Patrick Mahomes", "QB", 29, 9200.0),
    ("Lamar Jackson", "QB", 27, 8800.0),
    ("Christian McCaffrey", "RB", 28, 8500.0),
    ("Breece Hall", "RB", 23, 8200.0),
    ("Bijan Robinson", "RB", 22, 8000.0),
    ("Justin Jefferson", "WR", 25, 9000.0),
    ("Ja'Marr Chase", "WR", 24, 8700.0),
    ("CeeDee Lamb", "WR", 25, 8500.0),
    ("Amon-Ra St. Brown", "WR", 25, 7800.0),
    ("Travis Kelce", "TE", 35, 6500.0),
    ("Sam LaPorta", "TE", 23, 5800.0),
];

/// Built-in market records so the calculator stays usable offline
pub fn sample_market_records() -> Vec<RawValueRecord> {
    SAMPLE_PLAYERS
        .iter()
        .map(|&(name, position, age, value)| RawValueRecord {
            age: Some(age),
            ..RawValueRecord::market(name, Some(position.to_string()), None, Some(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use value_registry::{LeagueSettings, ValueRegistry};

    #[test]
    fn test_sample_records_build_a_registry() {
        let registry = ValueRegistry::build(&[], &sample_market_records(), LeagueSettings::default());
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.value_of("amon ra st brown"), Some(7800));
        assert_eq!(registry.get("Travis Kelce").and_then(|r| r.age), Some(35));
    }
}
