//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gfm_data::{CountryRecord, Location};

/// Shared state for the fruits dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Location picked in the radio group; drives the bar chart
    pub selected_location: Signal<Location>,
    /// Gapminder rows behind the scatter chart (empty until fetched)
    pub countries: Signal<Vec<CountryRecord>>,
    /// Whether the gapminder fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the gapminder fetch failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            selected_location: Signal::new(Location::default()),
            countries: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
