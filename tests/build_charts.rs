// tests/build_charts.rs
//
// Category loop + dispatch table, end to end through the Engine.
use fpl_compare::categories::{Category, CategoryMap};
use fpl_compare::chart::trace::team_color;
use fpl_compare::chart::{ChartKind, EntityKind, Scaling, Trace};
use fpl_compare::engine::CompareRequest;
use fpl_compare::error::{Error, ValidationError};
use fpl_compare::metrics;
use fpl_compare::normalize::DegeneratePolicy;
use fpl_compare::Engine;

const CSV: &str = "\
name,team,goals,assists,minutes
Alice,Arsenal,10,2,900
Bob,Arsenal,0,4,1800
Carl,Chelsea,5,0,2700
Dana,Chelsea,2,6,450
Eve,Brighton,1,1,90
";

// goals 0..10, assists 0..6, minutes 90..2700
fn engine() -> Engine {
    let cats = CategoryMap::new(vec![
        Category::new("Attack", metrics!["goals", "assists"]),
        Category::new("Time", metrics!["minutes"]),
    ])
    .unwrap();
    Engine::from_reader(CSV.as_bytes(), cats, DegeneratePolicy::Zero).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_values(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "got {got:?}, want {want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!(close(*g, *w), "got {got:?}, want {want:?}");
    }
}

#[test]
fn one_spec_per_category_in_map_order() {
    let e = engine();
    let specs = e.compare_with::<&str>(&[0], &[], ChartKind::Line).unwrap();
    let labels: Vec<_> = specs.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(labels, ["Attack", "Time"]);
    assert!(specs.iter().all(|s| s.kind == ChartKind::Line));
    assert_eq!(specs[0].metrics, ["goals", "assists"]);
}

#[test]
fn radar_single_player_is_scaled() {
    let e = engine();
    let specs = e.compare_with::<&str>(&[0], &[], ChartKind::Radar).unwrap();

    assert_eq!(specs[0].traces.len(), 1);
    let t = specs[0].traces[0].as_series().unwrap();
    assert_eq!(t.name, "Alice");
    assert_eq!(t.entity, EntityKind::Player);
    assert_eq!(t.scaling, Scaling::Normalized);
    assert_eq!(t.metrics, ["goals", "assists"]);
    assert_values(&t.values, &[1.0, 2.0 / 6.0]);

    let t = specs[1].traces[0].as_series().unwrap();
    assert_values(&t.values, &[(900.0 - 90.0) / 2610.0]);
}

#[test]
fn bar_line_scatter_area_keep_player_values_raw() {
    let e = engine();
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Scatter, ChartKind::Area] {
        let specs = e.compare_with::<&str>(&[0, 2], &[], kind).unwrap();
        let attack = &specs[0];
        assert_eq!(attack.traces.len(), 2, "{kind}");

        let alice = attack.traces[0].as_series().unwrap();
        let carl = attack.traces[1].as_series().unwrap();
        assert_eq!(alice.scaling, Scaling::Raw);
        assert_values(&alice.values, &[10.0, 2.0]);
        assert_values(&carl.values, &[5.0, 0.0]);
        assert_eq!((alice.slot, carl.slot), (0, 1));
        // players are colored by the renderer
        assert!(alice.color.is_none());
    }
}

#[test]
fn bar_team_uses_unscaled_mean() {
    let e = engine();
    let specs = e.compare_with(&[], &["Chelsea"], ChartKind::Bar).unwrap();

    let t = specs[0].traces[0].as_series().unwrap();
    assert_eq!(t.name, "Chelsea");
    assert_eq!(t.entity, EntityKind::Team);
    assert_values(&t.values, &[3.5, 3.0]);

    let t = specs[1].traces[0].as_series().unwrap();
    assert_values(&t.values, &[1575.0]);
}

#[test]
fn radar_team_scales_the_mean() {
    let e = engine();
    let specs = e.compare_with(&[], &["Chelsea"], ChartKind::Radar).unwrap();
    let t = specs[0].traces[0].as_series().unwrap();
    assert_eq!(t.scaling, Scaling::Normalized);
    assert_values(&t.values, &[0.35, 0.5]);
}

#[test]
fn team_colors_follow_selection_order() {
    let e = engine();
    let specs = e.compare_with(&[], &["Chelsea", "Arsenal"], ChartKind::Line).unwrap();
    let traces: Vec<_> = specs[0].traces.iter().filter_map(Trace::as_series).collect();

    assert_eq!(traces[0].name, "Chelsea");
    assert_eq!(traces[0].color, Some(team_color(0)));
    assert_eq!(traces[1].color, Some(team_color(1)));
    assert_eq!(team_color(0).name, "blue");
    assert_eq!(team_color(1).name, "green");
    // palette wraps instead of running out
    assert_eq!(team_color(2), team_color(0));
}

#[test]
fn scatter_team_markers_are_larger() {
    let e = engine();
    let specs = e.compare_with(&[0], &["Arsenal"], ChartKind::Scatter).unwrap();
    let traces: Vec<_> = specs[0].traces.iter().filter_map(Trace::as_series).collect();
    assert_eq!(traces[0].marker_size, None);
    assert_eq!(traces[1].marker_size, Some(10.0));

    let specs = e.compare_with(&[], &["Arsenal"], ChartKind::Line).unwrap();
    assert_eq!(specs[0].traces[0].as_series().unwrap().marker_size, None);
}

#[test]
fn box_one_trace_per_metric_with_player_labels() {
    let e = engine();
    let specs = e.compare_with(&[], &["Arsenal"], ChartKind::Box).unwrap();
    let attack = &specs[0];
    assert_eq!(attack.title, "Normalized Box Plot of Attack");
    assert_eq!(attack.traces.len(), 2);

    let goals = attack.traces[0].as_distribution().unwrap();
    assert_eq!(goals.name, "Arsenal - goals");
    assert_eq!(goals.metric, "goals");
    assert_eq!(goals.labels, ["Alice", "Bob"]);
    assert_values(&goals.values, &[1.0, 0.0]);

    let assists = attack.traces[1].as_distribution().unwrap();
    assert_eq!(assists.labels, ["Alice", "Bob"]);
    assert_values(&assists.values, &[2.0 / 6.0, 4.0 / 6.0]);

    assert_eq!(specs[1].traces.len(), 1);
}

#[test]
fn box_ignores_players() {
    let e = engine();
    let specs = e.compare_with(&[0, 1], &["Chelsea", "Brighton"], ChartKind::Box).unwrap();

    // teams × metrics, no player traces
    assert_eq!(specs[0].traces.len(), 4);
    assert!(specs.iter().flat_map(|s| &s.traces).all(|t| t.as_series().is_none()));

    let only_players = e.compare_with::<&str>(&[0, 1], &[], ChartKind::Box).unwrap();
    assert!(only_players.iter().all(|s| s.traces.is_empty()));
}

#[test]
fn box_summary_quartiles() {
    let e = engine();
    let specs = e.compare_with(&[], &["Chelsea"], ChartKind::Box).unwrap();
    let goals = specs[0].traces[0].as_distribution().unwrap();
    let sum = goals.summary().unwrap();
    assert!(close(sum.min, 0.2));
    assert!(close(sum.max, 0.5));
    assert!(close(sum.median, 0.35));
}

#[test]
fn title_is_category_label_outside_box() {
    let e = engine();
    let specs = e.compare_with::<&str>(&[], &[], ChartKind::Area).unwrap();
    assert_eq!(specs[0].title, "Attack");
}

#[test]
fn box_title_prefix_only_with_team_traces() {
    let e = engine();
    let specs = e.compare_with::<&str>(&[0], &[], ChartKind::Box).unwrap();
    assert_eq!(specs[0].title, "Attack");
    assert_eq!(specs[1].title, "Time");

    let specs = e.compare_with(&[0], &["Brighton"], ChartKind::Box).unwrap();
    assert_eq!(specs[1].title, "Normalized Box Plot of Time");
}

#[test]
fn empty_selection_gives_empty_charts() {
    let e = engine();
    for kind in ChartKind::ALL {
        let specs = e.compare_with::<&str>(&[], &[], kind).unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|s| s.traces.is_empty()), "{kind}");
    }
}

#[test]
fn players_and_teams_coexist() {
    let e = engine();
    let specs = e.compare_with(&[4], &["Arsenal"], ChartKind::Radar).unwrap();
    let names: Vec<_> = specs[0].traces.iter().map(Trace::name).collect();
    assert_eq!(names, ["Eve", "Arsenal"]);
}

#[test]
fn out_of_range_player_is_a_validation_error() {
    let e = engine();
    let err = e.compare_with::<&str>(&[5], &[], ChartKind::Radar).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::PlayerOutOfRange { index: 5, len: 5 })
    ));
}

#[test]
fn unknown_team_is_a_validation_error() {
    let e = engine();
    // exact match only; search is where case folding happens
    let err = e.compare_with(&[0], &["arsenal"], ChartKind::Bar).unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::UnknownTeam(ref t)) if t == "arsenal"));
}

#[test]
fn chart_type_string_is_parsed_at_the_boundary() {
    let e = engine();

    let req = CompareRequest { players: vec![0], teams: vec![], chart: "  RADAR ".into() };
    assert_eq!(e.compare(&req).unwrap().len(), 2);

    let req = CompareRequest { players: vec![0], teams: vec![], chart: "pie".into() };
    let err = e.compare(&req).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, Error::Validation(ValidationError::UnknownChartType(ref s)) if s == "pie"));

    // bad kind wins over bad ids
    let req = CompareRequest { players: vec![99], teams: vec![], chart: "pie".into() };
    assert!(matches!(e.compare(&req), Err(Error::Validation(ValidationError::UnknownChartType(_)))));
}

#[test]
fn more_than_two_entities() {
    let e = engine();
    let specs = e
        .compare_with(&[0, 1, 2], &["Arsenal", "Chelsea", "Brighton"], ChartKind::Line)
        .unwrap();
    assert_eq!(specs[0].traces.len(), 6);
    let slots: Vec<_> = specs[0].traces.iter().filter_map(Trace::as_series).map(|t| t.slot).collect();
    assert_eq!(slots, [0, 1, 2, 0, 1, 2]);
}
