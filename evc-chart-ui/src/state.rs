//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use evc_db::models::{StateCount, StationRecord};
use evc_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Id of the clicked station, None until the first click
    pub selected_station: Signal<Option<String>>,
    /// Stations with coordinates, in load order
    pub stations: Signal<Vec<StationRecord>>,
    /// Station counts per state, largest first
    pub state_counts: Signal<Vec<StateCount>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_station: Signal::new(None),
            stations: Signal::new(Vec::new()),
            state_counts: Signal::new(Vec::new()),
        }
    }
}
