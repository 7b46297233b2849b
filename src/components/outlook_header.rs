use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::Component;
use crate::action::Action;
use crate::sky::Sky;
use crate::state::{LOADING_ANIM_CYCLE_TICKS, Outlook};

pub struct OutlookHeader;

pub struct OutlookHeaderProps<'a> {
    pub outlook: &'a DataResource<Outlook>,
    pub is_animating: bool,
    pub tick_count: u32,
}

const HEADLINE: &str = "Singapore";

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

fn gradient_endpoints(outlook: &DataResource<Outlook>) -> (ArtColor, ArtColor) {
    match outlook.data() {
        Some(outlook) => {
            let (a, b) = Sky::classify(&outlook.forecast).gradient();
            (ArtColor::rgb(a.0, a.1, a.2), ArtColor::rgb(b.0, b.1, b.2))
        }
        // No data yet: neutral gray
        None => (ArtColor::rgb(180, 180, 180), ArtColor::rgb(220, 220, 220)),
    }
}

/// Static two-color fill when idle; while a fetch is outstanding a bright
/// seam sweeps across the headline, one pass per animation cycle.
fn headline_fill(colors: (ArtColor, ArtColor), phase: Option<f32>) -> Fill {
    let (start, end) = colors;
    match phase {
        None => Fill::Linear(LinearGradient::horizontal(start, end)),
        Some(phase) => {
            let seam = start.interpolate(ArtColor::rgb(255, 255, 255), 0.6);
            let pos = phase.rem_euclid(1.0).clamp(0.02, 0.98);
            let stops = vec![
                ColorStop::new(0.0, start),
                ColorStop::new(pos, seam),
                ColorStop::new(1.0, end),
            ];
            Fill::Linear(LinearGradient::new(0.0, stops))
        }
    }
}

fn animated_phase(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

fn outlook_line(outlook: &DataResource<Outlook>) -> Line<'static> {
    match outlook {
        DataResource::Loaded(outlook) => {
            let sky = Sky::classify(&outlook.forecast);
            Line::from(vec![
                Span::raw(sky.glyph()),
                Span::raw(" "),
                Span::styled(outlook.forecast.clone(), Style::default().fg(sky.accent())),
                Span::styled(" · next 24h · ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    outlook.temperature.format("°C"),
                    Style::default().fg(Color::Gray),
                ),
            ])
        }
        DataResource::Failed(_) => Line::from(vec![
            Span::styled("Outlook unavailable", Style::default().fg(Color::Red)),
            Span::styled(" – press ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ]),
        DataResource::Loading => Line::from(Span::styled(
            "Fetching outlook...",
            Style::default().fg(Color::DarkGray),
        )),
        DataResource::Empty => Line::from(Span::styled(
            "No outlook yet",
            Style::default().fg(Color::DarkGray),
        )),
    }
}

impl Component<Action> for OutlookHeader {
    type Props<'a> = OutlookHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet headline — artbox picks the best font
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Outlook line
        ])
        .split(area);

        let colors = gradient_endpoints(props.outlook);
        let phase = props
            .is_animating
            .then(|| animated_phase(props.tick_count));
        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(headline_fill(colors, phase));

        frame.render_widget(ArtBox::new(&renderer, HEADLINE), chunks[0]);
        frame.render_widget(Paragraph::new(outlook_line(props.outlook).centered()), chunks[2]);
    }
}
