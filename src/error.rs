// src/error.rs
//
// Three failure families:
// - ConfigError: the dataset or category map can't be used. Fatal at startup.
// - ValidationError: a comparison request names something that doesn't exist.
//   The request is aborted as a whole.
// - DegenerateMetricError: a metric is constant over the dataset and the
//   normalizer was told to reject instead of falling back to 0.0.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("invalid category map: {0}")]
    Categories(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown chart type '{0}' (expected one of: radar, bar, line, scatter, area, box)")]
    UnknownChartType(String),

    #[error("player index {index} is out of range (dataset has {len} rows)")]
    PlayerOutOfRange { index: usize, len: usize },

    #[error("team '{0}' is not present in the dataset")]
    UnknownTeam(String),

    #[error("metric '{0}' is not a dataset column")]
    UnknownMetric(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("metric '{metric}' is constant across the dataset (min = max = {value})")]
pub struct DegenerateMetricError {
    pub metric: String,
    pub value: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Degenerate(#[from] DegenerateMetricError),
}

impl Error {
    pub fn is_validation(&self) -> bool { matches!(self, Error::Validation(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
