// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use clap::Parser;
use eframe::egui::{IconData, ViewportBuilder};
use log::{error, LevelFilter};

use fpl_compare::chart::ChartKind;
use fpl_compare::config::consts::DEFAULT_DATASET;
use fpl_compare::config::options::AppOptions;
use fpl_compare::config::state::AppState;
use fpl_compare::normalize::DegeneratePolicy;
use fpl_compare::{gui, Engine};

#[derive(Debug, Parser)]
#[command(author, version, about = "FPL player and team comparison")]
struct Args {
    /// Player dataset (CSV with header row)
    #[arg(long, default_value = DEFAULT_DATASET)]
    data: PathBuf,

    /// Category map as JSON; built-in categories when omitted
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Initial chart type
    #[arg(long, default_value = "radar")]
    chart: ChartKind,

    /// zero | reject
    #[arg(long, default_value = "zero")]
    degenerate: DegeneratePolicy,
}

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/app_icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    fpl_compare::log::init(LevelFilter::Info);
    let args = Args::parse();

    let mut options = AppOptions::default().with_dataset(args.data);
    options.data.categories = args.categories;
    options.compare.chart = args.chart;
    options.compare.degenerate = args.degenerate;

    let engine = match Engine::load(&options) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Startup: {e}");
            eprintln!("Failed to load {}: {}", options.data.dataset.display(), e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(options);
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w, state.gui.window_h]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let native = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(native, engine, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
