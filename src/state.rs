//! Application state - single source of truth

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// An inclusive low/high range as reported by the NEA feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    pub low: i32,
    pub high: i32,
}

impl Range {
    /// "24°C – 33°C" style formatting with an arbitrary unit suffix.
    pub fn format(&self, unit: &str) -> String {
        format!("{}{unit} – {}{unit}", self.low, self.high)
    }
}

/// Wind speed range and compass direction for one forecast day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Wind {
    pub speed: Range,
    pub direction: String,
}

/// One record of the NEA 4-day forecast.
///
/// Field names match the upstream JSON (`items[0].forecasts[..]`), so this
/// doubles as the wire model. `date` stays in the upstream `YYYY-MM-DD` form;
/// labels are derived at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DayForecast {
    pub date: String,
    /// Free-text condition description, e.g. "Thundery Showers"
    pub forecast: String,
    pub temperature: Range,
    pub relative_humidity: Range,
    pub wind: Wind,
}

impl DayForecast {
    /// Day heading: the first record is always "Today", the rest use the
    /// weekday name from the record's own date.
    pub fn day_label(&self, index: usize) -> String {
        if index == 0 {
            return "Today".into();
        }
        match self.parse_date() {
            Some(date) => date.format("%A").to_string(),
            None => self.date.clone(),
        }
    }

    /// Calendar date in "Aug 6, 2026" form.
    pub fn date_label(&self) -> String {
        match self.parse_date() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    fn parse_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// The `general` record of the NEA 24-hour forecast.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Outlook {
    pub forecast: String,
    pub temperature: Range,
}

/// Animation timing for the headline gradient seam.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// 4-day region lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Forecast", label = "Days", debug_fmt)]
    pub days: DataResource<Vec<DayForecast>>,

    /// 24-hour outlook region lifecycle
    #[debug(section = "Forecast", label = "Outlook", debug_fmt)]
    pub outlook: DataResource<Outlook>,

    /// Whether a refresh is in progress (keeps showing current data during fetch)
    #[debug(section = "Forecast", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Monotonic fetch-cycle sequence. Completions carrying an older value
    /// belong to a superseded cycle and are discarded by the reducer.
    #[debug(section = "Forecast", label = "Cycle")]
    pub fetch_seq: u64,

    // --- Animation internals (skipped) ---
    /// Animation frame counter (for the gradient seam)
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    pub fn loading_anim_active(&self) -> bool {
        self.days.is_loading()
            || self.outlook.is_loading()
            || self.is_refreshing
            || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            days: DataResource::Empty,
            outlook: DataResource::Empty,
            is_refreshing: false,
            fetch_seq: 0,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }
}
