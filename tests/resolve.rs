// tests/resolve.rs
use fpl_compare::categories::{Category, CategoryMap};
use fpl_compare::metrics;
use fpl_compare::resolve::{find_players, find_teams};
use fpl_compare::store::Dataset;

const CSV: &str = "\
name,team,goals
Bukayo Saka,Arsenal,10
Cole Palmer,Chelsea,15
Ben White,Arsenal,1
Danny Welbeck,Brighton,6
Ben Davies,Spurs,0
Ben White,Brighton,2
";

fn dataset() -> Dataset {
    let cats = CategoryMap::new(vec![Category::new("G", metrics!["goals"])]).unwrap();
    Dataset::from_reader(CSV.as_bytes(), &cats).unwrap()
}

#[test]
fn empty_query_matches_nothing() {
    let ds = dataset();
    assert!(find_players(&ds, "").is_empty());
    assert!(find_teams(&ds, "").is_empty());
    assert!(find_players(&ds, "   ").is_empty());
    assert!(find_teams(&ds, "\t").is_empty());
}

#[test]
fn players_case_insensitive_in_row_order() {
    let ds = dataset();
    let found = find_players(&ds, "BEN");
    let rows: Vec<_> = found.iter().map(|p| p.index).collect();
    assert_eq!(rows, [2, 4, 5]);
    assert_eq!(found[0].label, "Ben White");
    assert_eq!(found[0].team, "Arsenal");
}

#[test]
fn same_name_players_stay_apart() {
    let ds = dataset();
    let found = find_players(&ds, "ben white");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].display(), "Ben White (Arsenal)");
    assert_eq!(found[1].display(), "Ben White (Brighton)");
    assert_ne!(found[0].index, found[1].index);
}

#[test]
fn query_is_literal_and_trimmed() {
    let ds = dataset();
    assert_eq!(find_players(&ds, "  palmer ").len(), 1);
    assert!(find_players(&ds, "B.n").is_empty());
    assert!(find_players(&ds, "zzz").is_empty());
}

#[test]
fn teams_deduplicated_first_occurrence() {
    let ds = dataset();
    assert_eq!(find_teams(&ds, "a"), ["Arsenal", "Chelsea"]);
    assert_eq!(find_teams(&ds, "R"), ["Arsenal", "Brighton", "Spurs"]);
    assert_eq!(find_teams(&ds, "arsenal"), ["Arsenal"]);
    assert!(find_teams(&ds, "city").is_empty());
}
