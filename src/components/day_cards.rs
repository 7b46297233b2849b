use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use tui_dispatch::DataResource;

use super::Component;
use crate::action::Action;
use crate::sky::Sky;
use crate::state::{AppState, DayForecast};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// The 4-day card row. Owns its display region exclusively: every frame the
/// region is redrawn from the current resource state, whole record set or
/// nothing.
pub struct DayCards;

pub struct DayCardsProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for DayCards {
    type Props<'a> = DayCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.state.days {
            DataResource::Loaded(days) => render_cards(frame, area, days),
            DataResource::Failed(error) => render_error(frame, area, error),
            DataResource::Loading => render_hint(frame, area, "Loading forecast..."),
            DataResource::Empty => render_hint(frame, area, "Press r to fetch the forecast"),
        }
    }
}

fn render_cards(frame: &mut Frame, area: Rect, days: &[DayForecast]) {
    if days.is_empty() {
        return;
    }
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, days.len() as u32); days.len()])
        .split(area);

    for (index, (day, column)) in days.iter().zip(columns.iter()).enumerate() {
        render_card(frame, *column, day, index);
    }
}

fn render_card(frame: &mut Frame, area: Rect, day: &DayForecast, index: usize) {
    let sky = Sky::classify(&day.forecast);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(sky.accent()))
        .title(Line::from(day.day_label(index).bold()).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            day.date_label(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        Line::default(),
        Line::from(vec![
            Span::raw(sky.glyph()),
            Span::raw(" "),
            Span::styled(day.forecast.clone(), Style::default().fg(sky.accent())),
        ])
        .centered(),
        Line::default(),
        Line::from(day.temperature.format("°C")).centered(),
        Line::from(Span::styled(
            format!(
                "RH {}% – {}%",
                day.relative_humidity.low, day.relative_humidity.high
            ),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::from(Span::styled(
            format!(
                "{} – {} km/h {}",
                day.wind.speed.low, day.wind.speed.high, day.wind.direction
            ),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_hint(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let hint = Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // heading
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Unable to load the forecast",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}
