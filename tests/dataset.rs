// tests/dataset.rs
use fpl_compare::categories::{Category, CategoryMap};
use fpl_compare::config::options::AppOptions;
use fpl_compare::error::ConfigError;
use fpl_compare::metrics;
use fpl_compare::store::Dataset;
use fpl_compare::Engine;

fn cats() -> CategoryMap {
    CategoryMap::new(vec![
        Category::new("A", metrics!["goals", "assists"]),
        Category::new("B", metrics!["assists", "minutes"]),
    ])
    .unwrap()
}

#[test]
fn keeps_only_referenced_metrics_in_map_order() {
    let csv = "minutes,extra,team,assists,name,goals\n90,x,Alpha,1,P1,2\n10,y,Beta,0,P2,5\n";
    let ds = Dataset::from_reader(csv.as_bytes(), &cats()).unwrap();

    assert_eq!(ds.metric_names(), ["goals", "assists", "minutes"]);
    assert_eq!(ds.len(), 2);
    let p = ds.player(1).unwrap();
    assert_eq!((p.name.as_str(), p.team.as_str()), ("P2", "Beta"));
    assert_eq!(p.values(), [5.0, 0.0, 10.0]);
    assert!(ds.metric_col("extra").is_err());
}

#[test]
fn cells_are_trimmed() {
    let csv = "name,team,goals,assists,minutes\n  P1 , Alpha ,  3 , 1.5 ,0\n";
    let ds = Dataset::from_reader(csv.as_bytes(), &cats()).unwrap();
    let p = ds.player(0).unwrap();
    assert_eq!(p.name, "P1");
    assert_eq!(p.team, "Alpha");
    assert_eq!(p.values(), [3.0, 1.5, 0.0]);
}

#[test]
fn missing_metric_column_is_fatal() {
    let csv = "name,team,goals,assists\nP1,Alpha,1,2\n";
    let err = Dataset::from_reader(csv.as_bytes(), &cats()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingColumn(ref c) if c == "minutes"));
}

#[test]
fn missing_name_or_team_is_fatal() {
    let csv = "player,team,goals,assists,minutes\nP1,Alpha,1,2,3\n";
    assert!(matches!(
        Dataset::from_reader(csv.as_bytes(), &cats()),
        Err(ConfigError::MissingColumn(ref c)) if c == "name"
    ));
}

#[test]
fn non_numeric_cell_reports_column_and_line() {
    let csv = "name,team,goals,assists,minutes\nP1,Alpha,1,2,3\nP2,Beta,one,2,3\n";
    let err = Dataset::from_reader(csv.as_bytes(), &cats()).unwrap_err();
    match err {
        ConfigError::NonNumeric { column, row, value } => {
            assert_eq!(column, "goals");
            assert_eq!(row, 3);
            assert_eq!(value, "one");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_and_non_finite_cells_are_rejected() {
    for bad in ["", "NaN", "inf"] {
        let csv = format!("name,team,goals,assists,minutes\nP1,Alpha,{bad},2,3\n");
        assert!(
            matches!(Dataset::from_reader(csv.as_bytes(), &cats()), Err(ConfigError::NonNumeric { .. })),
            "{bad:?} accepted"
        );
    }
}

#[test]
fn teams_and_team_rows() {
    let csv = "name,team,goals,assists,minutes\n\
               a,Beta,0,0,0\nb,Alpha,0,0,0\nc,Beta,0,0,0\n";
    let ds = Dataset::from_reader(csv.as_bytes(), &cats()).unwrap();
    assert_eq!(ds.teams(), ["Beta", "Alpha"]);
    assert_eq!(ds.team_rows("Beta"), [0, 2]);
    assert!(ds.team_rows("Gamma").is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let opts = AppOptions::default().with_dataset("definitely/not/here.csv");
    assert!(matches!(Engine::load(&opts), Err(ConfigError::Io { .. })));
}

#[test]
fn reference_categories_need_their_columns() {
    let csv = "name,team,goals_scored\nP1,Alpha,1\n";
    let err = Dataset::from_reader(csv.as_bytes(), &CategoryMap::reference()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingColumn(ref c) if c == "total_points"));
}
