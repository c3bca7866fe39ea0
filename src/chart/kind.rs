// src/chart/kind.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Radar,
    Bar,
    Line,
    Scatter,
    Area,
    Box,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Radar,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Area,
        ChartKind::Box,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Radar => "radar",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
            ChartKind::Box => "box",
        }
    }

    /// Dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Radar => "Radar Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Scatter => "Scatter Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Box => "Box Plot",
        }
    }
}

impl FromStr for ChartKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownChartType(s!(s)))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
