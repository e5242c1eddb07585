//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::config::DEFAULT_CITY;

/// Display fields for the current conditions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeatherView {
    pub city: String,
    pub country: String,
    /// Rounded °C
    pub temperature: i32,
    /// Already capitalized
    pub description: String,
    pub icon: String,
    pub icon_url: String,
    /// m/s as reported upstream
    pub wind_speed: f64,
    /// Percent
    pub humidity: u8,
}

impl CurrentWeatherView {
    pub fn title(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// One aggregated calendar day of the forecast
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyForecastView {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Localized and capitalized
    pub weekday: String,
    pub max: i32,
    pub min: i32,
    /// Icon of the first entry seen for the day
    pub icon: String,
    pub icon_url: String,
}

impl DailyForecastView {
    pub fn temperature_range(&self) -> String {
        format!("{}°C / {}°C", self.max, self.min)
    }
}

/// Everything one successful search produces
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub current: CurrentWeatherView,
    pub forecast: Vec<DailyForecastView>,
}

pub fn format_temperature(celsius: i32) -> String {
    format!("{celsius}°C")
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City most recently submitted
    #[debug(section = "Search", label = "City")]
    pub city: String,

    /// Text currently in the search bar
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Validation message for the search bar
    #[debug(section = "Search", label = "Input error", debug_fmt)]
    pub input_error: Option<String>,

    /// Report lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub report: DataResource<WeatherReport>,

    /// Whether an API key was configured at startup
    #[debug(section = "Weather", label = "API key")]
    pub has_api_key: bool,

    /// Number of searches dispatched, used to key fetch tasks
    #[debug(section = "Weather", label = "Searches")]
    pub search_count: u64,
}

impl AppState {
    pub fn new(city: impl Into<String>, has_api_key: bool) -> Self {
        Self {
            city: city.into(),
            query: String::new(),
            input_error: None,
            report: DataResource::Empty,
            has_api_key,
            search_count: 0,
        }
    }

    /// The weather display is only revealed once both requests succeeded
    pub fn display_visible(&self) -> bool {
        self.report.is_loaded()
    }

    /// Content of the error line
    pub fn error_message(&self) -> Option<&str> {
        self.input_error.as_deref().or_else(|| self.report.error())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY, true)
    }
}
