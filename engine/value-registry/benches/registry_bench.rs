use criterion::{black_box, criterion_group, criterion_main, Criterion};
use value_registry::{LeagueSettings, PickSlot, PickTable, RawValueRecord, ValueRegistry};

fn create_dynasty_rows(count: usize) -> Vec<RawValueRecord> {
    (0..count)
        .map(|i| {
            RawValueRecord::dynasty(
                format!("Dynasty Player-{i} Jr."),
                Some(["QB", "RB", "WR", "TE"][i % 4].to_string()),
                Some(21 + (i % 12) as u32),
                Some((count - i) as f64 * 10.0),
                Some((count - i) as f64 * 12.0),
            )
        })
        .collect()
}

fn create_market_rows(count: usize) -> Vec<RawValueRecord> {
    (0..count)
        .map(|i| {
            RawValueRecord::market(
                format!("Dynasty Player {i} Jr"),
                Some(["QB", "RB", "WR", "TE"][i % 4].to_string()),
                None,
                Some((count - i) as f64 * 11.0),
            )
        })
        .collect()
}

fn bench_build_registry(c: &mut Criterion) {
    let dynasty = create_dynasty_rows(600);
    let market = create_market_rows(450);
    let settings = LeagueSettings::new(true, true);

    c.bench_function("build_registry", |b| {
        b.iter(|| ValueRegistry::build(black_box(&dynasty), black_box(&market), settings))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let registry =
        ValueRegistry::build(&create_dynasty_rows(600), &create_market_rows(450), LeagueSettings::default());

    c.bench_function("suggest_partial_name", |b| b.iter(|| registry.suggest(black_box("player 42"))));
}

fn bench_valuate_pick(c: &mut Criterion) {
    let rows = vec![
        RawValueRecord::dynasty("2026 Early 1st", Some("PICK".into()), None, Some(6200.0), Some(6900.0)),
        RawValueRecord::dynasty("2027 1st", Some("PICK".into()), None, Some(4500.0), Some(5000.0)),
    ];
    let table = PickTable::from_records(&rows);

    c.bench_function("valuate_pick", |b| {
        b.iter(|| table.valuate(black_box(2026), black_box(1), PickSlot::Early, black_box(true)))
    });
}

criterion_group!(benches, bench_build_registry, bench_suggest, bench_valuate_pick);
criterion_main!(benches);
