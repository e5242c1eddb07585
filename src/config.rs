//! Startup configuration for the OpenWeatherMap client

use std::path::PathBuf;

use clap::Args;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
pub const DEFAULT_CITY: &str = "Ciudad de México";

/// Value shipped in templates in place of a real key
const PLACEHOLDER_API_KEY: &str = "TU_API_KEY";

/// OpenWeatherMap connection options
#[derive(Args, Debug, Clone)]
pub struct WeatherArgs {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the data API
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Base URL for weather icon images
    #[arg(long, default_value = DEFAULT_ICON_BASE_URL)]
    pub icon_base_url: String,

    /// Country code appended to every city query
    #[arg(long, default_value = "MX")]
    pub country: String,

    /// Language for descriptions and weekday names
    #[arg(long, default_value = "es")]
    pub lang: String,
}

/// Resolved client configuration, fixed for the lifetime of the app
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub icon_base_url: String,
    pub country: String,
    pub lang: String,
}

impl WeatherConfig {
    /// True when an API key other than the template placeholder is set
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .map(str::trim)
            .is_some_and(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            country: "MX".to_string(),
            lang: "es".to_string(),
        }
    }
}

impl From<WeatherArgs> for WeatherConfig {
    fn from(args: WeatherArgs) -> Self {
        Self {
            api_key: args.api_key,
            base_url: args.base_url,
            icon_base_url: args.icon_base_url,
            country: args.country,
            lang: args.lang,
        }
    }
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("clima.log")
}
