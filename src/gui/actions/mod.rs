// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,generate,search_*}.

mod copy;     // src/gui/actions/copy.rs
mod generate; // src/gui/actions/generate.rs
mod search;   // src/gui/actions/search.rs

pub use copy::copy;
pub use generate::generate;
pub use search::{search_players, search_teams};
