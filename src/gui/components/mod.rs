// src/gui/components/mod.rs
pub mod chart_grid;
pub mod selection_panel;
pub mod stats_table;
