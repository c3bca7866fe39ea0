// src/config/state.rs
use super::consts::{COMPARE_SLOTS, WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::chart::ChartKind;
use crate::resolve::PlayerOption;

/// One search box + its dropdown.
#[derive(Clone, Debug)]
pub struct SearchSlot<T> {
    pub query: String,
    pub options: Vec<T>,
    /// Index into `options`
    pub chosen: Option<usize>,
}

impl<T> Default for SearchSlot<T> {
    fn default() -> Self {
        Self { query: s!(), options: Vec::new(), chosen: None }
    }
}

impl<T> SearchSlot<T> {
    /// Replace the dropdown contents. A previous choice is dropped since
    /// its index no longer means anything.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.chosen = None;
    }

    pub fn chosen(&self) -> Option<&T> {
        self.chosen.and_then(|i| self.options.get(i))
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub players: Vec<SearchSlot<PlayerOption>>,
    pub teams: Vec<SearchSlot<String>>,
    pub chart: ChartKind,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            players: (0..COMPARE_SLOTS).map(|_| SearchSlot::default()).collect(),
            teams: (0..COMPARE_SLOTS).map(|_| SearchSlot::default()).collect(),
            chart: ChartKind::Radar,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

impl GuiState {
    /// Row indices of the chosen players, slot order.
    pub fn chosen_players(&self) -> Vec<usize> {
        self.players.iter().filter_map(|s| s.chosen().map(|p| p.index)).collect()
    }

    /// Names of the chosen teams, slot order.
    pub fn chosen_teams(&self) -> Vec<String> {
        self.teams.iter().filter_map(|s| s.chosen().cloned()).collect()
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState { chart: options.compare.chart, ..GuiState::default() };
        Self { options, gui }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}
