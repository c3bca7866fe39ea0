// benches/build_charts.rs
use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fpl_compare::categories::CategoryMap;
use fpl_compare::chart::ChartKind;
use fpl_compare::normalize::DegeneratePolicy;
use fpl_compare::Engine;

const TEAMS: [&str; 20] = [
    "Arsenal", "Aston Villa", "Bournemouth", "Brentford", "Brighton", "Burnley", "Chelsea",
    "Crystal Palace", "Everton", "Fulham", "Leeds", "Liverpool", "Man City", "Man Utd",
    "Newcastle", "Nott'm Forest", "Sunderland", "Spurs", "West Ham", "Wolves",
];

/// ~700 players, every reference metric filled with a deterministic spread.
fn synthetic_csv() -> String {
    let cats = CategoryMap::reference();
    let metrics = cats.required_metrics();

    let mut out = String::from("name,team");
    for m in &metrics {
        out.push(',');
        out.push_str(m);
    }
    out.push('\n');

    for i in 0..700usize {
        let _ = write!(out, "Player {i},{}", TEAMS[i % TEAMS.len()]);
        for (j, _) in metrics.iter().enumerate() {
            let _ = write!(out, ",{}", (i * 31 + j * 17) % 97);
        }
        out.push('\n');
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let csv = synthetic_csv();
    let engine = Engine::from_reader(csv.as_bytes(), CategoryMap::reference(), DegeneratePolicy::Zero)
        .expect("synthetic dataset");

    c.bench_function("load_dataset", |b| {
        b.iter(|| {
            let e = Engine::from_reader(black_box(csv.as_bytes()), CategoryMap::reference(), DegeneratePolicy::Zero);
            black_box(e.map(|e| e.dataset().len()).unwrap_or(0))
        })
    });

    c.bench_function("radar_two_players_two_teams", |b| {
        b.iter(|| {
            let specs = engine.compare_with(black_box(&[3, 250]), black_box(&["Chelsea", "Spurs"]), ChartKind::Radar);
            black_box(specs.map(|s| s.len()).unwrap_or(0))
        })
    });

    c.bench_function("box_two_teams", |b| {
        b.iter(|| {
            let specs = engine.compare_with::<&str>(&[], black_box(&["Arsenal", "Liverpool"]), ChartKind::Box);
            black_box(specs.map(|s| s.len()).unwrap_or(0))
        })
    });

    c.bench_function("find_players", |b| {
        b.iter(|| black_box(engine.find_players(black_box("layer 1")).len()))
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
