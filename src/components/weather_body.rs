use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::forecast_cards::CARD_HEIGHT;
use super::location_header::HEADER_MAX_HEIGHT;
use super::{Component, ForecastCards, ForecastCardsProps, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::icons::WeatherCondition;
use crate::state::{AppState, WeatherReport, format_temperature};

/// Current conditions and the forecast row, or the loading header
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.state.report {
            DataResource::Loaded(report) => render_ready(frame, area, props.state, report),
            DataResource::Loading => render_loading(frame, area, props.state),
            // Display stays hidden; the error line carries any message
            DataResource::Empty | DataResource::Failed(_) => {}
        }
    }
}

fn make_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(HEADER_MAX_HEIGHT), // City
        Constraint::Length(1),              // blank
        Constraint::Length(1),              // icon + temperature
        Constraint::Length(1),              // description
        Constraint::Length(1),              // wind / humidity
        Constraint::Length(1),              // blank
        Constraint::Length(CARD_HEIGHT),    // forecast
    ])
    .flex(Flex::Center)
    .split(area)
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, report: &WeatherReport) {
    let chunks = make_layout(area);
    let current = &report.current;
    let title = current.title();

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            title: &current.city,
            subtitle: Some(title.as_str()),
            temperature: Some(current.temperature),
        },
    );

    let temperature = Line::from(vec![
        Span::raw(WeatherCondition::emoji_for(&current.icon)),
        Span::raw("  "),
        Span::styled(
            format_temperature(current.temperature),
            Style::default().fg(Color::White).bold(),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(temperature), chunks[2]);

    let description = Line::from(vec![Span::styled(
        current.description.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(description), chunks[3]);

    let details = Line::from(vec![
        Span::styled("Wind: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{} m/s", current.wind_speed)),
        Span::raw("   "),
        Span::styled("Humidity: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}%", current.humidity)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(details), chunks[4]);

    let mut cards = ForecastCards;
    cards.render(
        frame,
        chunks[6],
        ForecastCardsProps {
            days: &report.forecast,
        },
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = make_layout(area);

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            title: &state.city,
            subtitle: None,
            temperature: None,
        },
    );

    let msg = Line::from(vec![Span::styled(
        "Loading...",
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[3]);
}
