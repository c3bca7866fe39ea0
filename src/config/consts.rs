// src/config/consts.rs

// Dataset
pub const DEFAULT_DATASET: &str = "players.csv";
pub const NAME_COL: &str = "name";
pub const TEAM_COL: &str = "team";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Charts
pub const BOX_TITLE_PREFIX: &str = "Normalized Box Plot of ";
pub const TEAM_MARKER_SIZE: f32 = 10.0;
pub const BOX_MARKER_SIZE: f32 = 5.0;
pub const BOX_JITTER: f32 = 0.5;

// GUI
pub const COMPARE_SLOTS: usize = 2; // search slots per entity kind
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 860.0;
pub const CHART_HEIGHT: f32 = 320.0;

use crate::chart::SlotColor;

/// Team traces are colored by selection slot; slot 0 is always the first team.
pub const TEAM_PALETTE: &[SlotColor] = &[
    SlotColor { name: "blue", rgb: [0, 0, 255] },
    SlotColor { name: "green", rgb: [0, 128, 0] },
];
