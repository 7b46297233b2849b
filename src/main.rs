//! shorecast - Singapore shoreline forecast TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use shorecast::action::Action;
use shorecast::api;
use shorecast::components::{Component, ForecastDisplay, ForecastDisplayProps};
use shorecast::effect::Effect;
use shorecast::reducer::reducer;
use shorecast::state::{AppState, LOADING_ANIM_TICK_MS};

/// shorecast - NEA forecast TUI for planning shoreline cleanups
#[derive(Parser, Debug)]
#[command(name = "shorecast")]
#[command(about = "Singapore 4-day and 24-hour forecast in the terminal")]
struct Args {
    /// Refresh interval in seconds (minimum 1, default 2 hours)
    #[arg(long, short, default_value = "7200", value_parser = clap::value_parser!(u64).range(1..))]
    refresh_interval: u64,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ForecastComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ForecastContext {
    Main,
}

impl EventRoutingState<ForecastComponentId, ForecastContext> for AppState {
    fn focused(&self) -> Option<ForecastComponentId> {
        Some(ForecastComponentId::Display)
    }

    fn modal(&self) -> Option<ForecastComponentId> {
        None
    }

    fn binding_context(&self, _id: ForecastComponentId) -> ForecastContext {
        ForecastContext::Main
    }

    fn default_context(&self) -> ForecastContext {
        ForecastContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        refresh_interval,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        refresh_interval,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct ForecastUi {
    display: ForecastDisplay,
}

impl ForecastUi {
    fn new() -> Self {
        Self {
            display: ForecastDisplay,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ForecastComponentId>,
    ) {
        event_ctx.set_component_area(ForecastComponentId::Display, area);

        let props = ForecastDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = ForecastDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    refresh_interval: u64,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ForecastUi::new()));
    let mut bus: EventBus<AppState, Action, ForecastComponentId, ForecastContext> = EventBus::new();
    let keybindings: Keybindings<ForecastContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(ForecastComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::ForecastFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );

                runtime.subscriptions().interval(
                    "refresh",
                    Duration::from_secs(refresh_interval),
                    || Action::ForecastFetch,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks. Both fetches run under stable task keys,
/// so a newer cycle re-spawning a key supersedes the previous task; the
/// reducer additionally discards completions whose `seq` is stale.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchForecast { seq } => {
            ctx.tasks().spawn("four_day", async move {
                match api::fetch_four_day().await {
                    Ok(days) => Action::DaysDidLoad { seq, days },
                    Err(e) => Action::DaysDidError {
                        seq,
                        message: e.to_string(),
                    },
                }
            });
            ctx.tasks().spawn("outlook", async move {
                match api::fetch_outlook().await {
                    Ok(outlook) => Action::OutlookDidLoad { seq, outlook },
                    Err(e) => Action::OutlookDidError {
                        seq,
                        message: e.to_string(),
                    },
                }
            });
        }
    }
}
