// src/chart/builder.rs
//
// Category loop: for each category, one trace per selected player and per
// selected team, shaped by the chart kind. Which entity gets what is fixed
// by the dispatch table in `rule()`:
//
//   kind                      player            team
//   radar                     scaled values     scaled mean
//   bar/line/scatter/area     raw values        raw mean
//   box                       (no trace)        scaled distribution per metric
//
// Only radar scales player traces. Teams are scaled for radar and box only.

use log::debug;

use super::kind::ChartKind;
use super::trace::{
    team_color, ChartSpec, DistributionTrace, EntityKind, Scaling, SeriesTrace, Trace,
};
use crate::categories::{Category, CategoryMap};
use crate::config::consts::{BOX_JITTER, BOX_MARKER_SIZE, BOX_TITLE_PREFIX, TEAM_MARKER_SIZE};
use crate::data::{Selection, Slotted, TeamGroup};
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::store::{Dataset, MetricCol, PlayerRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerRule {
    Skip,
    Values(Scaling),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TeamRule {
    Mean(Scaling),
    Distribution,
}

#[derive(Clone, Copy, Debug)]
struct Rule {
    player: PlayerRule,
    team: TeamRule,
}

const fn rule(kind: ChartKind) -> Rule {
    match kind {
        ChartKind::Radar => Rule {
            player: PlayerRule::Values(Scaling::Normalized),
            team: TeamRule::Mean(Scaling::Normalized),
        },
        ChartKind::Bar | ChartKind::Line | ChartKind::Scatter | ChartKind::Area => Rule {
            player: PlayerRule::Values(Scaling::Raw),
            team: TeamRule::Mean(Scaling::Raw),
        },
        ChartKind::Box => Rule {
            player: PlayerRule::Skip,
            team: TeamRule::Distribution,
        },
    }
}

/// Box charts that actually hold a team distribution get the
/// "Normalized Box Plot of" prefix; everything else is the bare label.
fn title_for(kind: ChartKind, category: &str, traces: &[Trace]) -> String {
    match kind {
        ChartKind::Box if !traces.is_empty() => format!("{BOX_TITLE_PREFIX}{category}"),
        _ => s!(category),
    }
}

/// Metric names of one category with their dataset columns.
struct Metrics<'c> {
    names: &'c [String],
    cols: Vec<MetricCol>,
}

pub struct ChartBuilder<'a> {
    categories: &'a CategoryMap,
    dataset: &'a Dataset,
    normalizer: &'a Normalizer,
}

impl<'a> ChartBuilder<'a> {
    pub fn new(categories: &'a CategoryMap, dataset: &'a Dataset, normalizer: &'a Normalizer) -> Self {
        Self { categories, dataset, normalizer }
    }

    /// One spec per category, category-map order. Any error aborts the
    /// whole request.
    pub fn build(&self, selection: &Selection<'_>, kind: ChartKind) -> Result<Vec<ChartSpec>> {
        let rule = rule(kind);
        let mut specs = Vec::with_capacity(self.categories.len());

        for category in self.categories {
            let metrics = self.metrics(category)?;
            let mut traces = Vec::new();

            for player in selection.players() {
                if let Some(trace) = self.player_trace(rule.player, &metrics, player)? {
                    traces.push(trace);
                }
            }
            for team in selection.teams() {
                traces.extend(self.team_traces(rule.team, kind, &metrics, team)?);
            }

            specs.push(ChartSpec {
                category: category.label.clone(),
                kind,
                title: title_for(kind, &category.label, &traces),
                metrics: category.metrics.clone(),
                traces,
            });
        }

        debug!(
            "Build: kind={}, players={}, teams={}, charts={}, traces={}",
            kind,
            selection.players().len(),
            selection.teams().len(),
            specs.len(),
            specs.iter().map(|s| s.traces.len()).sum::<usize>()
        );
        Ok(specs)
    }

    fn metrics<'c>(&self, category: &'c Category) -> Result<Metrics<'c>> {
        let cols = category
            .metrics
            .iter()
            .map(|m| self.dataset.metric_col(m))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Metrics { names: &category.metrics, cols })
    }

    fn player_trace(
        &self,
        rule: PlayerRule,
        metrics: &Metrics<'_>,
        player: &Slotted<&PlayerRecord>,
    ) -> Result<Option<Trace>> {
        let scaling = match rule {
            PlayerRule::Skip => return Ok(None),
            PlayerRule::Values(scaling) => scaling,
        };

        let mut values = Vec::with_capacity(metrics.cols.len());
        for &col in &metrics.cols {
            let v = player.entity.value(col);
            values.push(match scaling {
                Scaling::Normalized => self.normalizer.scale_col(col, v)?,
                Scaling::Raw => v,
            });
        }

        Ok(Some(Trace::Series(SeriesTrace {
            name: player.entity.name.clone(),
            entity: EntityKind::Player,
            slot: player.slot,
            color: None,
            scaling,
            metrics: metrics.names.to_vec(),
            values,
            marker_size: None,
        })))
    }

    fn team_traces(
        &self,
        rule: TeamRule,
        kind: ChartKind,
        metrics: &Metrics<'_>,
        team: &Slotted<TeamGroup<'_>>,
    ) -> Result<Vec<Trace>> {
        let group = &team.entity;
        let color = team_color(team.slot);

        match rule {
            TeamRule::Mean(scaling) => {
                let mut values = Vec::with_capacity(metrics.cols.len());
                for &col in &metrics.cols {
                    let mean = group.mean(col);
                    values.push(match scaling {
                        Scaling::Normalized => self.normalizer.scale_col(col, mean)?,
                        Scaling::Raw => mean,
                    });
                }

                Ok(vec![Trace::Series(SeriesTrace {
                    name: s!(group.name()),
                    entity: EntityKind::Team,
                    slot: team.slot,
                    color: Some(color),
                    scaling,
                    metrics: metrics.names.to_vec(),
                    values,
                    marker_size: (kind == ChartKind::Scatter).then_some(TEAM_MARKER_SIZE),
                })])
            }
            TeamRule::Distribution => {
                let labels = group.player_names();
                let mut traces = Vec::with_capacity(metrics.cols.len());

                for (name, &col) in metrics.names.iter().zip(&metrics.cols) {
                    let values = group
                        .values(col)
                        .into_iter()
                        .map(|v| self.normalizer.scale_col(col, v))
                        .collect::<Result<Vec<_>, _>>()?;

                    traces.push(Trace::Distribution(DistributionTrace {
                        name: format!("{} - {}", group.name(), name),
                        team: s!(group.name()),
                        metric: name.clone(),
                        slot: team.slot,
                        color,
                        values,
                        labels: labels.clone(),
                        marker_size: BOX_MARKER_SIZE,
                        jitter: BOX_JITTER,
                    }));
                }
                Ok(traces)
            }
        }
    }
}
