// src/categories.rs
//
// Category map: ordered label → ordered metric names. One chart is drawn per
// category, in map order. Static configuration, not derived from the data.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub metrics: Vec<String>,
}

impl Category {
    pub fn new(label: impl Into<String>, metrics: Vec<String>) -> Self {
        Self { label: label.into(), metrics }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    /// Every category needs at least one metric; labels must be unique.
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigError> {
        for (i, cat) in categories.iter().enumerate() {
            if cat.metrics.is_empty() {
                return Err(ConfigError::Categories(format!("category '{}' has no metrics", cat.label)));
            }
            if categories[..i].iter().any(|c| c.label == cat.label) {
                return Err(ConfigError::Categories(format!("duplicate category '{}'", cat.label)));
            }
        }
        Ok(Self { categories })
    }

    /// The six stock categories.
    pub fn reference() -> Self {
        Self {
            categories: vec![
                Category::new("Performance Metrics",
                    metrics!["total_points", "goals_scored", "assists", "clean_sheets"]),
                Category::new("Minutes Played",
                    metrics!["minutes"]),
                Category::new("Cost and Value Metrics",
                    metrics!["now_cost", "value_form", "value_season"]),
                Category::new("Rankings and Indices",
                    metrics!["ict_index", "form", "threat", "influence", "creativity"]),
                Category::new("Event Specific Data",
                    metrics!["transfers_in_event", "transfers_out_event", "event_points"]),
                Category::new("Penalties and Cards",
                    metrics!["penalties_saved", "penalties_missed", "yellow_cards", "red_cards"]),
            ],
        }
    }

    /// Parse a JSON array of `{ "label": ..., "metrics": [...] }`.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let categories: Vec<Category> = serde_json::from_str(text)
            .map_err(|e| ConfigError::Categories(e.to_string()))?;
        Self::new(categories)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> { self.categories.iter() }
    pub fn len(&self) -> usize { self.categories.len() }
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    pub fn get(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// Every metric referenced by any category, first-occurrence order, no repeats.
    pub fn required_metrics(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for m in self.categories.iter().flat_map(|c| c.metrics.iter()) {
            if !out.contains(&m.as_str()) {
                out.push(m);
            }
        }
        out
    }
}

impl Default for CategoryMap {
    fn default() -> Self { Self::reference() }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;
    fn into_iter(self) -> Self::IntoIter { self.categories.iter() }
}
