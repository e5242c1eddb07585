//! Actions: user intents, fetch results and housekeeping

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search bar text changed
    SearchQueryChange(String),

    /// Search for a city (Enter in the search bar, or the startup city)
    SearchSubmit(String),

    // ===== Weather category =====
    /// Result: current weather and forecast both loaded
    WeatherDidLoad(WeatherReport),

    /// Result: the search failed; carries the user-facing message
    WeatherDidError(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement in the search bar)
    Render,

    /// Exit the application
    Quit,
}
