// src/lib.rs

#[macro_use]
pub mod macros;

pub mod categories;
pub mod chart;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod export;
pub mod log;
pub mod normalize;
pub mod resolve;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::Engine;
pub use error::{ConfigError, DegenerateMetricError, Error, Result, ValidationError};
