//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Fetch cycle =====
        Action::ForecastFetch => {
            state.fetch_seq = state.fetch_seq.wrapping_add(1);
            if state.days.is_loaded() {
                // Keep the current cards on screen while the refresh runs
                state.is_refreshing = true;
            } else {
                state.days = DataResource::Loading;
            }
            if !state.outlook.is_loaded() {
                state.outlook = DataResource::Loading;
            }
            state.tick_count = 0;
            state.loading_anim_ticks_remaining = 0;
            DispatchResult::changed_with(Effect::FetchForecast {
                seq: state.fetch_seq,
            })
        }

        // ===== Completions =====
        // A completion from a superseded cycle must never overwrite the
        // display region; only the latest issued sequence applies.
        Action::DaysDidLoad { seq, days } => {
            if seq != state.fetch_seq {
                return DispatchResult::unchanged();
            }
            state.days = DataResource::Loaded(days);
            state.is_refreshing = false;
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::DaysDidError { seq, message } => {
            if seq != state.fetch_seq {
                return DispatchResult::unchanged();
            }
            state.days = DataResource::Failed(message);
            state.is_refreshing = false;
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::OutlookDidLoad { seq, outlook } => {
            if seq != state.fetch_seq {
                return DispatchResult::unchanged();
            }
            state.outlook = DataResource::Loaded(outlook);
            DispatchResult::changed()
        }

        Action::OutlookDidError { seq, message } => {
            if seq != state.fetch_seq {
                return DispatchResult::unchanged();
            }
            state.outlook = DataResource::Failed(message);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            let animating = state.loading_anim_active();
            if animating {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}
