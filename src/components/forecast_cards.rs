use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::icons::WeatherCondition;
use crate::state::DailyForecastView;

/// Border + weekday + icon + range + border
pub const CARD_HEIGHT: u16 = 5;
const CARD_WIDTH: u16 = 18;

/// A row of day cards
pub struct ForecastCards;

pub struct ForecastCardsProps<'a> {
    pub days: &'a [DailyForecastView],
}

impl Component<Action> for ForecastCards {
    type Props<'a> = ForecastCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.days.is_empty() {
            return;
        }

        let columns = Layout::horizontal(
            props
                .days
                .iter()
                .map(|_| Constraint::Max(CARD_WIDTH)),
        )
        .flex(Flex::SpaceAround)
        .split(area);

        for (day, column) in props.days.iter().zip(columns.iter()) {
            render_card(frame, *column, day);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, day: &DailyForecastView) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(day.weekday.clone(), Style::default().bold())).centered(),
        Line::from(WeatherCondition::emoji_for(&day.icon)).centered(),
        Line::from(Span::styled(
            day.temperature_range(),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
