// src/normalize.rs
//
// Min-max scaling against the bounds of the WHOLE dataset, never against the
// selected entities, so charts from different requests share one scale.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::Serialize;

use crate::error::{DegenerateMetricError, Error, ValidationError};
use crate::store::{Dataset, MetricCol};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Bounds { min: f64::INFINITY, max: f64::NEG_INFINITY },
            |b, v| Bounds { min: b.min.min(v), max: b.max.max(v) },
        )
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Constant (or empty) column: scaling would divide by zero.
    pub fn is_degenerate(&self) -> bool { self.max <= self.min }
}

/// What `scale` does when a metric has max == min.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Every value maps to 0.0.
    #[default]
    Zero,
    /// Fail with `DegenerateMetricError`.
    Reject,
}

impl FromStr for DegeneratePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(DegeneratePolicy::Zero),
            "reject" => Ok(DegeneratePolicy::Reject),
            other => Err(format!("unknown degenerate policy '{other}' (expected zero|reject)")),
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DegeneratePolicy::Zero => "zero",
            DegeneratePolicy::Reject => "reject",
        })
    }
}

/// Per-metric dataset bounds, computed once.
#[derive(Clone, Debug)]
pub struct Normalizer {
    names: Vec<String>,
    index: HashMap<String, MetricCol>,
    bounds: Vec<Bounds>,
    policy: DegeneratePolicy,
}

impl Normalizer {
    pub fn new(ds: &Dataset, policy: DegeneratePolicy) -> Self {
        let mut index = HashMap::new();
        let mut bounds = Vec::with_capacity(ds.metric_names().len());

        for name in ds.metric_names() {
            // Names come from the dataset itself, so the lookup can't miss.
            let Ok(col) = ds.metric_col(name) else { continue };
            let b = Bounds::of(ds.column(col));
            if b.is_degenerate() && !ds.is_empty() {
                warn!("Normalize: metric '{}' is constant ({}); policy={}", name, b.min, policy);
            }
            index.insert(name.clone(), col);
            bounds.push(b);
        }

        Self { names: ds.metric_names().to_vec(), index, bounds, policy }
    }

    pub fn policy(&self) -> DegeneratePolicy { self.policy }

    pub fn bounds(&self, metric: &str) -> Result<Bounds, ValidationError> {
        let col = self.col(metric)?;
        Ok(self.bounds[col.index()])
    }

    /// `(value - min) / (max - min)` with dataset-wide bounds.
    pub fn scale(&self, metric: &str, value: f64) -> Result<f64, Error> {
        let col = self.col(metric)?;
        Ok(self.scale_col(col, value)?)
    }

    pub fn scale_col(&self, col: MetricCol, value: f64) -> Result<f64, DegenerateMetricError> {
        let b = self.bounds[col.index()];
        if b.is_degenerate() {
            return match self.policy {
                DegeneratePolicy::Zero => Ok(0.0),
                DegeneratePolicy::Reject => Err(DegenerateMetricError {
                    metric: self.names[col.index()].clone(),
                    value: b.min,
                }),
            };
        }
        Ok((value - b.min) / b.span())
    }

    fn col(&self, metric: &str) -> Result<MetricCol, ValidationError> {
        self.index
            .get(metric)
            .copied()
            .ok_or_else(|| ValidationError::UnknownMetric(s!(metric)))
    }
}
