//! Actions - user intents and async completions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{DayForecast, Outlook};

/// Application actions with automatic category inference.
///
/// Completion actions carry the `seq` of the fetch cycle that produced them
/// so the reducer can discard results from superseded cycles.
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Forecast category =====
    /// Intent: start a fetch cycle for both forecast resources
    ForecastFetch,

    // ===== Days category =====
    /// Result: 4-day records loaded
    DaysDidLoad { seq: u64, days: Vec<DayForecast> },

    /// Result: 4-day fetch failed
    DaysDidError { seq: u64, message: String },

    // ===== Outlook category =====
    /// Result: 24-hour outlook loaded
    OutlookDidLoad { seq: u64, outlook: Outlook },

    /// Result: outlook fetch failed
    OutlookDidError { seq: u64, message: String },

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}
