// src/data.rs
//
// Request-local views over the canonical dataset.
//
// - TeamGroup: zero-copy view of one team's rows (row indices + borrowed Dataset).
// - Selection: the resolved input of one comparison. Players and teams are
//   kept as explicit (slot, entity) lists so the slot decides color and
//   nothing assumes exactly two of each.

use crate::error::ValidationError;
use crate::store::{Dataset, MetricCol, PlayerRecord};

/// An entity plus the slot it was picked into (0 = first).
#[derive(Clone, Copy, Debug)]
pub struct Slotted<T> {
    pub slot: usize,
    pub entity: T,
}

/// Rows of one team, in dataset order.
#[derive(Clone, Debug)]
pub struct TeamGroup<'a> {
    name: &'a str,
    /// Positions of the team's rows in the raw dataset
    pub row_ix: Vec<usize>,
    raw: &'a Dataset,
}

impl<'a> TeamGroup<'a> {
    /// None when no row carries this exact team name.
    pub fn from_raw(raw: &'a Dataset, team: &str) -> Option<Self> {
        let row_ix = raw.team_rows(team);
        let first = *row_ix.first()?;
        // Borrow the name from the dataset so the group outlives `team`.
        let name = raw.records()[first].team.as_str();
        Some(Self { name, row_ix, raw })
    }

    pub fn name(&self) -> &'a str { self.name }
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn players(&self) -> impl Iterator<Item = &'a PlayerRecord> + '_ {
        let raw = self.raw;
        self.row_ix.iter().map(move |&ix| &raw.records()[ix])
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players().map(|p| p.name.clone()).collect()
    }

    pub fn values(&self, col: MetricCol) -> Vec<f64> {
        self.players().map(|p| p.value(col)).collect()
    }

    /// Arithmetic mean of one metric over the group. Groups are never empty
    /// when built through `from_raw`.
    pub fn mean(&self, col: MetricCol) -> f64 {
        let n = self.row_ix.len();
        if n == 0 { return 0.0; }
        self.players().map(|p| p.value(col)).sum::<f64>() / n as f64
    }
}

#[derive(Clone, Debug, Default)]
pub struct Selection<'a> {
    players: Vec<Slotted<&'a PlayerRecord>>,
    teams: Vec<Slotted<TeamGroup<'a>>>,
}

impl<'a> Selection<'a> {
    pub fn empty() -> Self { Self::default() }

    /// Dereference row indices and team names. Fails on the first
    /// identifier that isn't in the dataset; nothing partial is returned.
    pub fn resolve<S: AsRef<str>>(
        raw: &'a Dataset,
        player_rows: &[usize],
        team_names: &[S],
    ) -> Result<Self, ValidationError> {
        let mut sel = Self::empty();
        for &row in player_rows {
            sel.push_player(raw.player(row)?);
        }
        for name in team_names {
            let name = name.as_ref();
            let group = TeamGroup::from_raw(raw, name)
                .ok_or_else(|| ValidationError::UnknownTeam(s!(name)))?;
            sel.push_team(group);
        }
        Ok(sel)
    }

    pub fn push_player(&mut self, player: &'a PlayerRecord) {
        let slot = self.players.len();
        self.players.push(Slotted { slot, entity: player });
    }

    pub fn push_team(&mut self, team: TeamGroup<'a>) {
        let slot = self.teams.len();
        self.teams.push(Slotted { slot, entity: team });
    }

    pub fn players(&self) -> &[Slotted<&'a PlayerRecord>] { &self.players }
    pub fn teams(&self) -> &[Slotted<TeamGroup<'a>>] { &self.teams }
}
