// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use log::info;

use crate::{
    chart::ChartSpec,
    config::state::AppState,
    engine::Engine,
};

use super::components::{chart_grid, selection_panel};

pub fn run(options: eframe::NativeOptions, engine: Engine, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "FPL Compare",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(engine, state)))),
    )?;
    Ok(())
}

/// What the last successful "Generate Analysis" compared.
#[derive(Clone, Debug, Default)]
pub struct Compared {
    pub players: Vec<usize>,
    pub teams: Vec<String>,
}

pub struct App {
    // read-only for the whole session
    pub engine: Engine,

    // single source of truth (UI thread only)
    pub state: AppState,

    // output of the last Generate; empty until the first click
    pub specs: Vec<ChartSpec>,
    pub compared: Compared,
    pub generated: bool,

    pub status: String,
}

impl App {
    pub fn new(engine: Engine, state: AppState) -> Self {
        let ds = engine.dataset();
        info!("Init: players={}, teams={}, chart={}", ds.len(), ds.teams().len(), state.gui.chart);

        Self {
            status: format!("Loaded {} players", ds.len()),
            engine,
            state,
            specs: Vec::new(),
            compared: Compared::default(),
            generated: false,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("selection")
            .resizable(false)
            .min_width(300.0)
            .show(ctx, |ui| {
                selection_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            chart_grid::draw(ui, self);
        });
    }
}
