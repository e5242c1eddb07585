use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

/// City name in FIGlet, colored by how warm it is there
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub title: &'a str,
    /// "City, CC" under the title
    pub subtitle: Option<&'a str>,
    /// Rounded °C; `None` while nothing is loaded
    pub temperature: Option<i32>,
}

/// Rows below the FIGlet title: one blank, one subtitle
pub const HEADER_OVERHEAD: u16 = 2;

/// Tallest FIGlet font in the stack (terminus)
pub const HEADER_MAX_HEIGHT: u16 = 6 + HEADER_OVERHEAD;

type Rgb = [u8; 3];

/// Left-to-right title colors per band, keyed by the band's exclusive
/// upper bound in °C
const TEMPERATURE_BANDS: [(i32, Rgb, Rgb); 4] = [
    (0, [135, 190, 255], [215, 235, 255]),
    (15, [90, 165, 240], [140, 215, 195]),
    (25, [105, 195, 140], [245, 210, 105]),
    (35, [250, 170, 75], [245, 115, 75]),
];
const SCORCHING: (Rgb, Rgb) = ([245, 95, 70], [210, 45, 60]);
const NO_READING: (Rgb, Rgb) = ([170, 170, 170], [215, 215, 215]);

fn title_palette(temperature: Option<i32>) -> (Rgb, Rgb) {
    let Some(celsius) = temperature else {
        return NO_READING;
    };
    TEMPERATURE_BANDS
        .iter()
        .find(|(upper, _, _)| celsius < *upper)
        .map(|&(_, from, to)| (from, to))
        .unwrap_or(SCORCHING)
}

fn title_fill(temperature: Option<i32>) -> Fill {
    let ([r0, g0, b0], [r1, g1, b1]) = title_palette(temperature);
    let stops = vec![
        ColorStop::new(0.0, ArtColor::rgb(r0, g0, b0)),
        ColorStop::new(1.0, ArtColor::rgb(r1, g1, b1)),
    ];
    Fill::Linear(LinearGradient::new(0.0, stops))
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [title_area, _, subtitle_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(title_fill(props.temperature));
        frame.render_widget(ArtBox::new(&renderer, props.title), title_area);

        if let Some(subtitle) = props.subtitle {
            let line = Line::styled(subtitle, Style::default().fg(Color::Gray)).centered();
            frame.render_widget(Paragraph::new(line), subtitle_area);
        }
    }
}
