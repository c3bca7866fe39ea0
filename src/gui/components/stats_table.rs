// src/gui/components/stats_table.rs
//
// Raw metric values for the last comparison: one row per metric, one column
// per compared player and per team (mean).

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::data::TeamGroup;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let ds = app.engine.dataset();

    let players: Vec<_> = app.compared.players.iter().filter_map(|&ix| ds.record(ix)).collect();
    let teams: Vec<_> = app.compared.teams.iter().filter_map(|t| TeamGroup::from_raw(ds, t)).collect();

    if players.is_empty() && teams.is_empty() {
        ui.label("Nothing compared.");
        return;
    }

    let metrics = ds.metric_names();
    let cols = players.len() + teams.len();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().resizable(true).at_least(140.0))
        .columns(Column::auto().at_least(90.0), cols)
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Metric"); });
            for p in &players {
                header.col(|ui| { ui.strong(&p.name); });
            }
            for t in &teams {
                header.col(|ui| { ui.strong(format!("{} (mean)", t.name())); });
            }
        })
        .body(|body| {
            body.rows(18.0, metrics.len(), |mut row| {
                let name = &metrics[row.index()];
                // Names come from the dataset, the lookup always succeeds.
                let Ok(col) = ds.metric_col(name) else { return };

                row.col(|ui| { ui.label(name); });
                for p in &players {
                    row.col(|ui| { ui.monospace(fmt_value(p.value(col))); });
                }
                for t in &teams {
                    row.col(|ui| { ui.monospace(fmt_value(t.mean(col))); });
                }
            });
        });
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.2}") }
}
