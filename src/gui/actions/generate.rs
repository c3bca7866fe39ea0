// src/gui/actions/generate.rs
use log::{error, info};

use crate::engine::CompareRequest;
use crate::gui::app::{App, Compared};

/// "Generate Analysis": rebuild every chart from the current dropdown choices.
/// A failed request clears the charts rather than leaving stale ones up.
pub fn generate(app: &mut App) {
    let gui = &app.state.gui;
    let req = CompareRequest {
        players: gui.chosen_players(),
        teams: gui.chosen_teams(),
        chart: s!(gui.chart.as_str()),
    };

    app.generated = true;
    match app.engine.compare(&req) {
        Ok(specs) => {
            let traces: usize = specs.iter().map(|s| s.traces.len()).sum();
            info!(
                "Generate: chart={}, players={:?}, teams={:?} → {} chart(s), {} trace(s)",
                req.chart, req.players, req.teams, specs.len(), traces
            );
            app.status(format!("Generated {} chart(s), {} trace(s)", specs.len(), traces));
            app.specs = specs;
            app.compared = Compared { players: req.players, teams: req.teams };
        }
        Err(e) => {
            error!("Generate: {e}");
            app.specs.clear();
            app.compared = Compared::default();
            app.status(format!("Error: {e}"));
        }
    }
}
