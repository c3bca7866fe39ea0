// src/gui/components/selection_panel.rs
//
// Left panel: search boxes + dropdowns for players and teams, chart type,
// and the Generate / Copy actions. Searching only touches its own slot.

use eframe::egui;

use crate::chart::ChartKind;
use crate::config::state::SearchSlot;
use crate::gui::{actions, app::App};

const ORDINALS: [&str; 4] = ["first", "second", "third", "fourth"];

fn hint(what: &str, slot: usize) -> String {
    let nth = ORDINALS.get(slot).copied().unwrap_or("another");
    if slot == 0 {
        format!("Enter {nth} {what} name...")
    } else {
        format!("Enter {nth} {what} name (optional)...")
    }
}

/// Text box + submit button. True when the user asked to search.
fn search_row(ui: &mut egui::Ui, query: &mut String, hint_text: String, button: String) -> bool {
    let mut submit = false;
    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(query)
                .hint_text(hint_text)
                .desired_width(170.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        submit = ui.button(button).clicked() || enter;
    });
    submit
}

fn dropdown<T>(
    ui: &mut egui::Ui,
    id: String,
    slot: &mut SearchSlot<T>,
    placeholder: String,
    label: impl Fn(&T) -> String,
) {
    let selected_text = slot.chosen().map(&label).unwrap_or(placeholder);

    egui::ComboBox::from_id_salt(id)
        .width(270.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut slot.chosen, None, "(none)");
            for (i, opt) in slot.options.iter().enumerate() {
                ui.selectable_value(&mut slot.chosen, Some(i), label(opt));
            }
        });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Players");
    for slot in 0..app.state.gui.players.len() {
        let n = slot + 1;
        let submit = search_row(
            ui,
            &mut app.state.gui.players[slot].query,
            hint("player", slot),
            format!("Submit Player {n}"),
        );
        if submit {
            actions::search_players(app, slot);
        }
        let nth = ORDINALS.get(slot).copied().unwrap_or("another");
        dropdown(
            ui,
            format!("player_select_{slot}"),
            &mut app.state.gui.players[slot],
            format!("Select {nth} player"),
            |p| p.display(),
        );
        ui.add_space(6.0);
    }

    ui.separator();

    ui.heading("Teams");
    for slot in 0..app.state.gui.teams.len() {
        let n = slot + 1;
        let submit = search_row(
            ui,
            &mut app.state.gui.teams[slot].query,
            hint("team", slot),
            format!("Submit Team {n}"),
        );
        if submit {
            actions::search_teams(app, slot);
        }
        let nth = ORDINALS.get(slot).copied().unwrap_or("another");
        dropdown(
            ui,
            format!("team_select_{slot}"),
            &mut app.state.gui.teams[slot],
            format!("Select {nth} team"),
            |t| t.clone(),
        );
        ui.add_space(6.0);
    }

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Chart:");
        let chart = &mut app.state.gui.chart;
        egui::ComboBox::from_id_salt("chart_type_select")
            .selected_text(chart.label())
            .show_ui(ui, |ui| {
                for kind in ChartKind::ALL {
                    ui.selectable_value(chart, kind, kind.label());
                }
            });
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Generate Analysis").clicked() {
            actions::generate(app);
        }
        if ui.button("Copy").on_hover_text("Copy chart values as TSV").clicked() {
            actions::copy(app, ui.ctx());
        }
    });

    ui.separator();
    ui.label(format!("Status: {}", app.status));
}
