// src/chart/mod.rs
//! Chart specifications: what to draw, independent of how it gets drawn.
//!
//! One `ChartSpec` per category, each holding one trace per compared entity
//! (or one per team × metric for box plots). The GUI renders them with
//! egui_plot; the CLI serializes them.

pub mod builder;
pub mod kind;
pub mod trace;

pub use builder::ChartBuilder;
pub use kind::ChartKind;
pub use trace::{
    BoxSummary, ChartSpec, DistributionTrace, EntityKind, Scaling, SeriesTrace, SlotColor, Trace,
};
