use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, DayCards, DayCardsProps, OutlookHeader, OutlookHeaderProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for ForecastDisplay - read-only view of state
pub struct ForecastDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The top-level forecast display component
#[derive(Default)]
pub struct ForecastDisplay;

impl Component<Action> for ForecastDisplay {
    type Props<'a> = ForecastDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::ForecastFetch),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(8), // Headline + 24h outlook
            Constraint::Min(1),    // 4-day card row
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut header = OutlookHeader;
        header.render(
            frame,
            chunks[0],
            OutlookHeaderProps {
                outlook: &props.state.outlook,
                is_animating: props.state.loading_anim_active(),
                tick_count: props.state.tick_count,
            },
        );

        let mut cards = DayCards;
        cards.render(frame, chunks[1], DayCardsProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
