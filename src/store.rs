// src/store.rs
//
// The player dataset. Loaded once from CSV at startup and read-only after.
// Only the columns the category map needs are kept: name, team, and each
// referenced metric as f64.

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use log::{debug, info};

use crate::categories::CategoryMap;
use crate::config::consts::{NAME_COL, TEAM_COL};
use crate::error::{ConfigError, ValidationError};

/// Position of a metric inside a `Dataset`. Only meaningful for the
/// dataset that handed it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MetricCol(usize);

impl MetricCol {
    pub fn index(self) -> usize { self.0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    values: Vec<f64>,
}

impl PlayerRecord {
    #[inline]
    pub fn value(&self, col: MetricCol) -> f64 { self.values[col.0] }

    pub fn values(&self) -> &[f64] { &self.values }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    metrics: Vec<String>,
    index: HashMap<String, MetricCol>,
    records: Vec<PlayerRecord>,
}

impl Dataset {
    pub fn load(path: &Path, categories: &CategoryMap) -> Result<Self, ConfigError> {
        let file = File::open(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let ds = Self::from_reader(file, categories)?;
        info!("Dataset: loaded {} (rows={}, metrics={})", path.display(), ds.len(), ds.metrics.len());
        Ok(ds)
    }

    /// Parse CSV text with a header row. Every metric the category map
    /// references must be a column, and every cell in it a finite number.
    pub fn from_reader<R: Read>(rdr: R, categories: &CategoryMap) -> Result<Self, ConfigError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let headers = reader.headers()?.clone();
        let find = |col: &str| {
            headers
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| ConfigError::MissingColumn(s!(col)))
        };

        let name_ix = find(NAME_COL)?;
        let team_ix = find(TEAM_COL)?;

        let metrics: Vec<String> = categories
            .required_metrics()
            .into_iter()
            .map(String::from)
            .collect();
        let metric_ix = metrics
            .iter()
            .map(|m| find(m))
            .collect::<Result<Vec<usize>, _>>()?;

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or(records.len() + 2);

            let mut values = Vec::with_capacity(metrics.len());
            for (metric, &ix) in metrics.iter().zip(&metric_ix) {
                values.push(parse_metric(record.get(ix).unwrap_or(""), metric, line)?);
            }

            records.push(PlayerRecord {
                name: s!(record.get(name_ix).unwrap_or("")),
                team: s!(record.get(team_ix).unwrap_or("")),
                values,
            });
        }

        let index = metrics
            .iter()
            .enumerate()
            .map(|(i, m)| (m.clone(), MetricCol(i)))
            .collect();

        debug!("Dataset: parsed {} rows, {} metric columns", records.len(), metrics.len());
        Ok(Self { metrics, index, records })
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[PlayerRecord] { &self.records }
    pub fn record(&self, row: usize) -> Option<&PlayerRecord> { self.records.get(row) }

    /// Row lookup for request input: out of range is the caller's mistake.
    pub fn player(&self, row: usize) -> Result<&PlayerRecord, ValidationError> {
        self.records
            .get(row)
            .ok_or(ValidationError::PlayerOutOfRange { index: row, len: self.records.len() })
    }

    pub fn metric_names(&self) -> &[String] { &self.metrics }

    pub fn metric_col(&self, metric: &str) -> Result<MetricCol, ValidationError> {
        self.index
            .get(metric)
            .copied()
            .ok_or_else(|| ValidationError::UnknownMetric(s!(metric)))
    }

    /// All values of one metric, row order.
    pub fn column(&self, col: MetricCol) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.value(col))
    }

    /// Distinct team names, first-occurrence order.
    pub fn teams(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.team.as_str()) {
                out.push(&r.team);
            }
        }
        out
    }

    /// Row indices of every player on `team` (exact match), row order.
    pub fn team_rows(&self, team: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.team == team)
            .map(|(i, _)| i)
            .collect()
    }
}

fn parse_metric(cell: &str, column: &str, line: usize) -> Result<f64, ConfigError> {
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::NonNumeric { column: s!(column), row: line, value: s!(cell) })
}
