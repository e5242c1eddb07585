use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, SearchBar, SearchBarProps, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: search bar, weather, error line and key hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c = key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    query: &props.state.query,
                    is_focused: true,
                    on_query_change: Action::SearchQueryChange,
                    on_query_submit: Action::SearchSubmit,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Weather
            Constraint::Length(2), // Error line
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                query: &props.state.query,
                is_focused: props.is_focused,
                on_query_change: Action::SearchQueryChange,
                on_query_submit: Action::SearchSubmit,
            },
        );

        let mut body = WeatherBody;
        body.render(frame, chunks[1], WeatherBodyProps { state: props.state });

        if let Some(message) = props.state.error_message() {
            let line = Line::from(vec![
                Span::raw(ERROR_ICON),
                Span::raw(" "),
                Span::styled(message.to_string(), Style::default().fg(Color::Rgb(200, 100, 100))),
            ]);
            frame.render_widget(
                Paragraph::new(line).wrap(Wrap { trim: true }),
                chunks[2],
            );
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherReport;
    use crossterm::event::KeyEvent;
    use tui_dispatch::DataResource;
    use tui_dispatch::testing::*;

    fn press(code: KeyCode) -> EventKind {
        EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_submits_query() {
        let mut component = WeatherDisplay::new();
        let state = AppState {
            query: "Guadalajara".into(),
            ..Default::default()
        };
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&press(KeyCode::Enter), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::SearchSubmit("Guadalajara".into()));
    }

    #[test]
    fn test_escape_quits() {
        let mut component = WeatherDisplay::new();
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&press(KeyCode::Esc), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut component = WeatherDisplay::new();
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };
        let event = EventKind::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        let actions: Vec<_> = component.handle_event(&event, props).into_iter().collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = WeatherDisplay::new();
        let state = AppState::default();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&press(KeyCode::Enter), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_hides_weather_on_failure() {
        let mut render = RenderHarness::new(80, 24);
        let mut component = WeatherDisplay::new();

        let state = AppState {
            report: DataResource::Failed("Error: boom".into()),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Error: boom"));
        assert!(!output.contains("Humidity"));
    }

    #[test]
    fn test_render_loaded_report() {
        let mut render = RenderHarness::new(80, 30);
        let mut component = WeatherDisplay::new();

        let mut report = WeatherReport::default();
        report.current.city = "Puebla".into();
        report.current.country = "MX".into();
        report.current.description = "Cielo claro".into();
        let state = AppState {
            report: DataResource::Loaded(report),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Cielo claro"));
        assert!(output.contains("Humidity"));
    }
}
