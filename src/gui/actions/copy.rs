// src/gui/actions/copy.rs
use eframe::egui;
use log::{debug, error, info};

use crate::{export, gui::app::App};

/// Copy the current charts' values to the clipboard as TSV.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.specs.iter().all(|s| s.traces.is_empty()) {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    match export::to_delimited(&app.specs, b'\t') {
        Ok(txt) => {
            info!("Copy: charts={}, bytes={}", app.specs.len(), txt.len());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: {e}");
            app.status(format!("Copy failed: {e}"));
        }
    }
}
