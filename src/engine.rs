// src/engine.rs
//
// Process-lifetime owner of the read-only dataset, the category map and the
// normalizer bounds. Frontends (GUI/CLI) hold one Engine and call into it per
// request; nothing here mutates after construction.

use std::io::Read;

use log::{debug, info};

use crate::categories::CategoryMap;
use crate::chart::{ChartBuilder, ChartKind, ChartSpec};
use crate::config::options::AppOptions;
use crate::data::Selection;
use crate::error::{ConfigError, Result};
use crate::normalize::{DegeneratePolicy, Normalizer};
use crate::resolve::{self, PlayerOption};
use crate::store::Dataset;

/// Raw request as it arrives from a frontend: indices and names still
/// unchecked, chart kind still a string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareRequest {
    pub players: Vec<usize>,
    pub teams: Vec<String>,
    pub chart: String,
}

pub struct Engine {
    categories: CategoryMap,
    dataset: Dataset,
    normalizer: Normalizer,
}

impl Engine {
    pub fn new(categories: CategoryMap, dataset: Dataset, policy: DegeneratePolicy) -> Self {
        let normalizer = Normalizer::new(&dataset, policy);
        Self { categories, dataset, normalizer }
    }

    /// Startup: category map (file or built-in), then the dataset against it.
    pub fn load(options: &AppOptions) -> Result<Self, ConfigError> {
        let categories = match &options.data.categories {
            Some(path) => CategoryMap::load(path)?,
            None => CategoryMap::reference(),
        };
        let dataset = Dataset::load(&options.data.dataset, &categories)?;
        info!(
            "Engine: ready (categories={}, players={}, teams={}, degenerate={})",
            categories.len(),
            dataset.len(),
            dataset.teams().len(),
            options.compare.degenerate
        );
        Ok(Self::new(categories, dataset, options.compare.degenerate))
    }

    pub fn from_reader<R: Read>(
        rdr: R,
        categories: CategoryMap,
        policy: DegeneratePolicy,
    ) -> Result<Self, ConfigError> {
        let dataset = Dataset::from_reader(rdr, &categories)?;
        Ok(Self::new(categories, dataset, policy))
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn categories(&self) -> &CategoryMap { &self.categories }
    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }

    pub fn find_players(&self, query: &str) -> Vec<PlayerOption> {
        let found = resolve::find_players(&self.dataset, query);
        debug!("Search: players '{}' → {} match(es)", query, found.len());
        found
    }

    pub fn find_teams(&self, query: &str) -> Vec<String> {
        let found = resolve::find_teams(&self.dataset, query);
        debug!("Search: teams '{}' → {} match(es)", query, found.len());
        found
    }

    /// Validate the whole request, then build. The chart kind is checked
    /// before any identifier so a bad kind never half-resolves.
    pub fn compare(&self, req: &CompareRequest) -> Result<Vec<ChartSpec>> {
        let kind: ChartKind = req.chart.parse()?;
        self.compare_with(&req.players, &req.teams, kind)
    }

    pub fn compare_with<S: AsRef<str>>(
        &self,
        players: &[usize],
        teams: &[S],
        kind: ChartKind,
    ) -> Result<Vec<ChartSpec>> {
        let selection = Selection::resolve(&self.dataset, players, teams)?;
        ChartBuilder::new(&self.categories, &self.dataset, &self.normalizer).build(&selection, kind)
    }
}
