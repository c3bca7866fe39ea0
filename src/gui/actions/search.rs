// src/gui/actions/search.rs
//
// Submit buttons: refill one slot's dropdown. Other slots keep their options.

use log::debug;

use crate::gui::app::App;

pub fn search_players(app: &mut App, slot: usize) {
    let Some(s) = app.state.gui.players.get(slot) else { return };
    let found = app.engine.find_players(&s.query);
    let n = found.len();

    app.state.gui.players[slot].set_options(found);
    debug!("UI: Player slot {} → {} option(s)", slot + 1, n);
    app.status(format!("Player {}: {} match(es)", slot + 1, n));
}

pub fn search_teams(app: &mut App, slot: usize) {
    let Some(s) = app.state.gui.teams.get(slot) else { return };
    let found = app.engine.find_teams(&s.query);
    let n = found.len();

    app.state.gui.teams[slot].set_options(found);
    debug!("UI: Team slot {} → {} option(s)", slot + 1, n);
    app.status(format!("Team {}: {} match(es)", slot + 1, n));
}
