// src/chart/trace.rs
use serde::Serialize;

use super::kind::ChartKind;
use crate::config::consts::TEAM_PALETTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlotColor {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

/// Palette color for a team slot; wraps past the end of the palette.
pub fn team_color(slot: usize) -> SlotColor {
    TEAM_PALETTE[slot % TEAM_PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Player,
    Team,
}

/// Whether trace values went through min-max scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    Normalized,
    Raw,
}

/// One value per metric, x/theta = `metrics`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesTrace {
    pub name: String,
    pub entity: EntityKind,
    pub slot: usize,
    /// Team traces carry their palette color; player traces leave it to the renderer.
    pub color: Option<SlotColor>,
    pub scaling: Scaling,
    pub metrics: Vec<String>,
    pub values: Vec<f64>,
    pub marker_size: Option<f32>,
}

/// Normalized values of one metric across a team's players (box plots).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DistributionTrace {
    pub name: String,
    pub team: String,
    pub metric: String,
    pub slot: usize,
    pub color: SlotColor,
    pub values: Vec<f64>,
    /// Player name per value, same order.
    pub labels: Vec<String>,
    pub marker_size: f32,
    pub jitter: f32,
}

impl DistributionTrace {
    pub fn summary(&self) -> Option<BoxSummary> {
        BoxSummary::of(&self.values)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Series(SeriesTrace),
    Distribution(DistributionTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Series(t) => &t.name,
            Trace::Distribution(t) => &t.name,
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            Trace::Series(t) => &t.values,
            Trace::Distribution(t) => &t.values,
        }
    }

    pub fn as_series(&self) -> Option<&SeriesTrace> {
        match self { Trace::Series(t) => Some(t), _ => None }
    }

    pub fn as_distribution(&self) -> Option<&DistributionTrace> {
        match self { Trace::Distribution(t) => Some(t), _ => None }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub category: String,
    pub kind: ChartKind,
    pub title: String,
    /// The category's metrics, axis order.
    pub metrics: Vec<String>,
    pub traces: Vec<Trace>,
}

/// Five-number summary with linearly interpolated quartiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() { return None; }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q = |p: f64| {
            let pos = p * (sorted.len() - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
        };

        Some(Self {
            min: sorted[0],
            q1: q(0.25),
            median: q(0.5),
            q3: q(0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}
