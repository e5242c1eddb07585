//! Store, effect and render flows with EffectStoreTestHarness
//!
//! The async half of a search is simulated with `complete_action`, the way
//! the effect handler's task would report back.

use ratatui::{Frame, layout::Rect};
use tui_dispatch::DataResource;
use tui_dispatch::testing::*;
use clima::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    error::WeatherError,
    reducer::reducer,
    state::{AppState, CurrentWeatherView, DailyForecastView, WeatherReport},
};

fn mock_report() -> WeatherReport {
    WeatherReport {
        current: CurrentWeatherView {
            city: "Ciudad de México".into(),
            country: "MX".into(),
            temperature: 21,
            description: "Nubes dispersas".into(),
            icon: "03d".into(),
            icon_url: "https://openweathermap.org/img/wn/03d@2x.png".into(),
            wind_speed: 3.6,
            humidity: 40,
        },
        forecast: vec![DailyForecastView {
            date: "2024-01-16".into(),
            weekday: "Martes".into(),
            max: 25,
            min: 18,
            icon: "01d".into(),
            icon_url: "https://openweathermap.org/img/wn/01d.png".into(),
        }],
    }
}

fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut component = WeatherDisplay::new();
    let props = WeatherDisplayProps {
        state,
        is_focused: true,
    };
    component.render(frame, area, props);
}

// ============================================================================
// Search flow
// ============================================================================

#[test]
fn test_successful_search_reveals_display() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Ciudad de México".into()));
    harness.assert_state(|s| s.report.is_loading());
    harness.assert_state(|s| !s.display_visible());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::FetchWeather { .. }));

    harness.complete_action(Action::WeatherDidLoad(mock_report()));
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");
    harness.assert_state(|s| s.display_visible());
    harness.assert_state(|s| s.error_message().is_none());
}

#[test]
fn test_city_not_found_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Atlantis".into()));
    let message = WeatherError::CityNotFound("city not found".into()).user_message();
    harness.complete_action(Action::WeatherDidError(message));
    harness.process_emitted();

    harness.assert_state(|s| !s.display_visible());
    harness.assert_state(|s| {
        s.error_message()
            .is_some_and(|m| m.contains("city not found"))
    });
}

#[test]
fn test_missing_key_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::new("Querétaro", false), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Querétaro".into()));

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_none_match(|e| matches!(e, Effect::FetchWeather { .. }));
    harness.assert_state(|s| s.error_message().is_none());
    harness.assert_state(|s| !s.display_visible());
}

#[test]
fn test_new_search_hides_previous_report() {
    let state = AppState {
        report: DataResource::Loaded(mock_report()),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    harness.dispatch_collect(Action::SearchSubmit("Mazatlán".into()));

    harness.assert_state(|s| !s.display_visible());
    let output = harness.render_plain(80, 30, draw);
    assert!(!output.contains("Humidity"), "old report still shown:\n{}", output);
}

#[test]
fn test_overlapping_searches_last_response_wins() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Ciudad de México".into()));
    harness.dispatch_collect(Action::SearchSubmit("Monterrey".into()));
    let effects = harness.drain_effects();
    effects.effects_count(2);

    let mut monterrey = mock_report();
    monterrey.current.city = "Monterrey".into();
    harness.complete_action(Action::WeatherDidLoad(monterrey));
    harness.complete_action(Action::WeatherDidLoad(mock_report()));
    harness.process_emitted();

    harness.assert_state(|s| {
        s.report
            .data()
            .is_some_and(|r| r.current.city == "Ciudad de México")
    });
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_loaded_report() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.complete_action(Action::WeatherDidLoad(mock_report()));
    harness.process_emitted();

    let output = harness.render_plain(80, 30, draw);

    assert!(output.contains("Ciudad de México, MX"), "header:\n{}", output);
    assert!(output.contains("21°C"), "temperature:\n{}", output);
    assert!(output.contains("Nubes dispersas"), "description:\n{}", output);
    assert!(output.contains("3.6 m/s"), "wind:\n{}", output);
    assert!(output.contains("40%"), "humidity:\n{}", output);
    assert!(output.contains("Martes"), "weekday:\n{}", output);
    assert!(output.contains("25°C / 18°C"), "range:\n{}", output);
}

#[test]
fn test_render_loading_shows_searched_city() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SearchSubmit("Tampico".into()));

    let output = harness.render_plain(80, 30, draw);

    assert!(output.contains("Loading..."), "loading hint:\n{}", output);
    assert!(!output.contains("Humidity"));
}

#[test]
fn test_render_empty_input_prompt() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SearchSubmit(String::new()));

    let output = harness.render_plain(80, 30, draw);

    assert!(output.contains("Please enter a city name."), "prompt:\n{}", output);
}
