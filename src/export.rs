// src/export.rs
//
// Chart specs → text. JSON keeps the full structure for a renderer; CSV/TSV
// flattens to one row per plotted value:
//
//   category,chart,trace,metric,value,label
//
// `label` is the player name for box-plot points and empty otherwise.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::chart::{ChartSpec, Trace};
use crate::resolve::PlayerOption;

pub const HEADERS: [&str; 6] = ["category", "chart", "trace", "metric", "value", "label"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Json => None,
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("delimited export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

pub fn to_json(specs: &[ChartSpec]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(specs)?)
}

/// Write the long-form table to any writer.
pub fn write_delimited<W: Write>(w: W, specs: &[ChartSpec], delim: u8) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().delimiter(delim).from_writer(w);
    wtr.write_record(HEADERS)?;

    for spec in specs {
        let chart = spec.kind.as_str();
        for trace in &spec.traces {
            match trace {
                Trace::Series(t) => {
                    for (metric, value) in t.metrics.iter().zip(&t.values) {
                        wtr.write_record([
                            spec.category.as_str(), chart, t.name.as_str(), metric.as_str(),
                            value.to_string().as_str(), "",
                        ])?;
                    }
                }
                Trace::Distribution(t) => {
                    for (value, label) in t.values.iter().zip(&t.labels) {
                        wtr.write_record([
                            spec.category.as_str(), chart, t.name.as_str(), t.metric.as_str(),
                            value.to_string().as_str(), label.as_str(),
                        ])?;
                    }
                }
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_delimited(specs: &[ChartSpec], delim: u8) -> Result<String, ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    write_delimited(&mut buf, specs, delim)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Render in the requested format.
pub fn render(specs: &[ChartSpec], format: ExportFormat) -> Result<String, ExportError> {
    match format.delimiter() {
        None => to_json(specs),
        Some(delim) => to_delimited(specs, delim),
    }
}

/// Search results as `index,name,team` CSV, header first.
pub fn write_players<W: Write>(w: W, players: &[PlayerOption]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(w);
    if players.is_empty() {
        wtr.write_record(["index", "name", "team"])?;
    }
    for p in players {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}
