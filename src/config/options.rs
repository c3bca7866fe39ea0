// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::chart::ChartKind;
use crate::normalize::DegeneratePolicy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub compare: CompareOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataOptions::default(),
            compare: CompareOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    /// CSV with a header row: name, team, and every metric of the category map.
    pub dataset: PathBuf,
    /// JSON category map; the built-in six categories when None.
    pub categories: Option<PathBuf>,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            categories: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    pub chart: ChartKind,
    pub degenerate: DegeneratePolicy,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            chart: ChartKind::Radar,
            degenerate: DegeneratePolicy::Zero,
        }
    }
}

impl AppOptions {
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.data.dataset = path.into();
        self
    }
}
