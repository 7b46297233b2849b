//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use tui_dispatch::{DataResource, testing::*};
use shorecast::{
    components::{Component, ForecastDisplay, ForecastDisplayProps},
    state::{AppState, DayForecast, Outlook, Range, Wind},
};

fn day(date: &str, forecast: &str) -> DayForecast {
    DayForecast {
        date: date.into(),
        forecast: forecast.into(),
        temperature: Range { low: 24, high: 33 },
        relative_humidity: Range { low: 65, high: 95 },
        wind: Wind {
            speed: Range { low: 10, high: 20 },
            direction: "NE".into(),
        },
    }
}

fn four_days() -> Vec<DayForecast> {
    vec![
        day("2026-08-06", "Thundery Showers"),
        day("2026-08-07", "Passing Showers"),
        day("2026-08-08", "Partly Cloudy (Day)"),
        day("2026-08-09", "Fair (Day)"),
    ]
}

fn render_display(state: &AppState) -> String {
    let mut render = RenderHarness::new(100, 30);
    let mut component = ForecastDisplay;

    render.render_to_string_plain(|frame| {
        let props = ForecastDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        days: DataResource::Loading,
        outlook: DataResource::Loading,
        ..Default::default()
    };

    let output = render_display(&state);

    assert!(output.contains("Loading forecast"), "Should show placeholder");
    assert!(output.contains("Fetching outlook"), "Should show outlook placeholder");
}

#[test]
fn test_render_one_card_per_record_in_order() {
    let state = AppState {
        days: DataResource::Loaded(four_days()),
        ..Default::default()
    };

    let output = render_display(&state);

    // 2026-08-06 is a Thursday; the first record is labelled Today and the
    // rest carry their own weekday names, left to right
    for label in ["Today", "Friday", "Saturday", "Sunday"] {
        assert!(output.contains(label), "Missing day label {label}:\n{output}");
    }
    let positions: Vec<usize> = ["Today", "Friday", "Saturday", "Sunday"]
        .iter()
        .map(|label| output.find(label).unwrap())
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "Cards should render in received order"
    );
}

#[test]
fn test_render_card_fields() {
    let state = AppState {
        days: DataResource::Loaded(vec![day("2026-08-06", "Thundery Showers")]),
        ..Default::default()
    };

    let output = render_display(&state);

    assert!(output.contains("Aug 6, 2026"), "Calendar date shown");
    assert!(output.contains("Thundery Showers"), "Condition text shown");
    assert!(output.contains("24°C – 33°C"), "Temperature range shown");
    assert!(output.contains("RH 65% – 95%"), "Humidity range shown");
    assert!(output.contains("10 – 20 km/h NE"), "Wind range and direction shown");
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        days: DataResource::Failed("forecast service returned HTTP 500".into()),
        ..Default::default()
    };

    let output = render_display(&state);

    assert!(
        output.contains("Unable to load the forecast"),
        "Should show error heading"
    );
    assert!(
        output.contains("forecast service returned HTTP 500"),
        "Should show error message"
    );
    assert!(output.contains("retry"), "Should show retry hint");
    // No partial record markup alongside the error presentation
    assert!(!output.contains("°C –"), "No temperature ranges in error state");
    assert!(!output.contains("Today"), "No day cards in error state");
}

#[test]
fn test_retry_success_fully_replaces_error_markup() {
    let failed = AppState {
        days: DataResource::Failed("could not reach the forecast service".into()),
        ..Default::default()
    };
    let output = render_display(&failed);
    assert!(output.contains("Unable to load the forecast"));

    // After a successful retry the same region holds forecast markup only
    let recovered = AppState {
        days: DataResource::Loaded(four_days()),
        ..Default::default()
    };
    let output = render_display(&recovered);

    assert!(!output.contains("Unable to load the forecast"), "No residual error text");
    assert!(!output.contains("could not reach"), "No residual error detail");
    assert!(output.contains("Today"), "Forecast markup present");
}

#[test]
fn test_render_is_idempotent_for_same_state() {
    let state = AppState {
        days: DataResource::Loaded(four_days()),
        outlook: DataResource::Loaded(Outlook {
            forecast: "Partly Cloudy".into(),
            temperature: Range { low: 25, high: 33 },
        }),
        ..Default::default()
    };

    let first = render_display(&state);
    let second = render_display(&state);

    assert_eq!(first, second, "Same state must render byte-identically");
}

#[test]
fn test_render_outlook_header() {
    let state = AppState {
        outlook: DataResource::Loaded(Outlook {
            forecast: "Partly Cloudy".into(),
            temperature: Range { low: 25, high: 33 },
        }),
        ..Default::default()
    };

    let output = render_display(&state);

    assert!(output.contains("Partly Cloudy"), "Outlook condition shown");
    assert!(output.contains("next 24h"), "Outlook horizon shown");
    assert!(output.contains("25°C – 33°C"), "Outlook temperature range shown");
}

#[test]
fn test_render_outlook_error_keeps_retry_affordance() {
    let state = AppState {
        outlook: DataResource::Failed("forecast service returned HTTP 502".into()),
        ..Default::default()
    };

    let output = render_display(&state);

    assert!(output.contains("Outlook unavailable"), "Outlook error shown");
    assert!(output.contains("retry"), "Retry hint shown");
}

#[test]
fn test_render_initial_state() {
    let state = AppState::default();

    let output = render_display(&state);

    assert!(
        output.contains("Press r to fetch the forecast"),
        "Should show fetch prompt"
    );
}

#[test]
fn test_render_help_bar() {
    let state = AppState::default();

    let output = render_display(&state);

    // Should show keybinding hints ("r refresh" style)
    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
