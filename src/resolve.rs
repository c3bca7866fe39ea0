// src/resolve.rs
//
// Free-text search over the dataset to populate the player/team dropdowns.
// Case-insensitive literal substring match; the query is trimmed and an
// empty query matches nothing.

use serde::Serialize;

use crate::store::Dataset;

/// One player dropdown entry. `index` is the dataset row, which is what
/// identifies a player (names repeat).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerOption {
    pub index: usize,
    #[serde(rename = "name")]
    pub label: String,
    pub team: String,
}

impl PlayerOption {
    /// Dropdown text that tells same-named players apart.
    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.team)
    }
}

fn needle(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() { None } else { Some(q.to_lowercase()) }
}

/// Players whose name contains `query`, dataset row order.
pub fn find_players(ds: &Dataset, query: &str) -> Vec<PlayerOption> {
    let Some(needle) = needle(query) else { return Vec::new() };

    ds.records()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.name.to_lowercase().contains(&needle))
        .map(|(index, p)| PlayerOption { label: p.name.clone(), team: p.team.clone(), index })
        .collect()
}

/// Distinct team names containing `query`, first-occurrence order.
pub fn find_teams(ds: &Dataset, query: &str) -> Vec<String> {
    let Some(needle) = needle(query) else { return Vec::new() };

    ds.teams()
        .into_iter()
        .filter(|t| t.to_lowercase().contains(&needle))
        .map(String::from)
        .collect()
}
