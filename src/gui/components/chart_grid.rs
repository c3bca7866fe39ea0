// src/gui/components/chart_grid.rs
//
// Central panel: the generated charts, two per row, then the raw values of
// whatever was compared. Purely a view over app.specs.

use eframe::egui;

use crate::config::consts::CHART_HEIGHT;
use crate::gui::{app::App, plot};

use super::stats_table;

const PER_ROW: usize = 2;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.generated {
        ui.centered_and_justified(|ui| {
            ui.label("Pick players and/or teams, then press Generate Analysis.");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("chart_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let gap = ui.spacing().item_spacing.x;
            let width = ((ui.available_width() - gap * (PER_ROW as f32 - 1.0)) / PER_ROW as f32).max(200.0);

            for row in app.specs.chunks(PER_ROW) {
                ui.horizontal_top(|ui| {
                    for spec in row {
                        ui.allocate_ui(egui::vec2(width, CHART_HEIGHT + 40.0), |ui| {
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                ui.strong(&spec.title);
                                plot::draw(ui, spec, CHART_HEIGHT);
                            });
                        });
                    }
                });
                ui.add_space(8.0);
            }

            ui.separator();
            egui::CollapsingHeader::new("Compared values (raw)")
                .default_open(false)
                .show(ui, |ui| stats_table::draw(ui, app));
        });
}
