//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::error::WeatherError;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(city) => {
            let city = city.trim();
            if city.is_empty() {
                state.input_error = Some(WeatherError::EmptyInput.user_message());
                return DispatchResult::changed();
            }

            let city = city.to_string();
            state.city = city.clone();
            state.input_error = None;

            if !state.has_api_key {
                state.report = DataResource::Empty;
                return DispatchResult::changed_with(Effect::WarnMissingCredential { city });
            }

            state.report = DataResource::Loading;
            state.search_count = state.search_count.wrapping_add(1);
            DispatchResult::changed_with(Effect::FetchWeather {
                city,
                search_id: state.search_count,
            })
        }

        // ===== Weather actions =====
        // Results are applied in arrival order: the last one to land wins.
        Action::WeatherDidLoad(report) => {
            state.report = DataResource::Loaded(report);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.report = DataResource::Failed(message);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}
