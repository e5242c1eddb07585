//! OpenWeatherMap API client

use chrono::NaiveDateTime;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::forecast::{self, ForecastEntry, round_half_up};
use crate::icons::{IconSize, icon_url};
use crate::state::{CurrentWeatherView, WeatherReport};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    sys: SysInfo,
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct SysInfo {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Condition {
    #[serde(default)]
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt_txt: String,
    main: MainReadings,
    weather: Vec<Condition>,
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Client
// ============================================================================

/// Client for the `/weather` and `/forecast` endpoints
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Current weather, then forecast; stops at the first failure
    #[instrument(skip(self), fields(country = %self.config.country))]
    pub async fn fetch_report(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let current = self.fetch_current(city).await?;
        let entries = self.fetch_forecast(city).await?;
        let forecast =
            forecast::upcoming_days(&entries, &self.config.lang, &self.config.icon_base_url);
        Ok(WeatherReport { current, forecast })
    }

    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeatherView, WeatherError> {
        let response = self.get("weather", city).await?;
        if !response.status().is_success() {
            return Err(WeatherError::CityNotFound(upstream_message(response).await));
        }

        let data: CurrentResponse = response.json().await?;
        let condition = data
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("missing weather conditions".into()))?;

        Ok(CurrentWeatherView {
            city: data.name,
            country: data.sys.country,
            temperature: round_half_up(data.main.temp),
            description: forecast::capitalize(&condition.description),
            icon_url: icon_url(&self.config.icon_base_url, &condition.icon, IconSize::Large),
            icon: condition.icon,
            wind_speed: data.wind.speed,
            humidity: data.main.humidity,
        })
    }

    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let response = self.get("forecast", city).await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "forecast request rejected");
            return Err(WeatherError::ForecastUnavailable);
        }

        let data: ForecastResponse = response.json().await?;
        data.list.into_iter().map(entry_from_item).collect()
    }

    async fn get(&self, path: &str, city: &str) -> Result<Response, WeatherError> {
        let url = self.config.endpoint(path);
        debug!(%url, city, "requesting");

        let query = format!("{},{}", city, self.config.country);
        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("lang", self.config.lang.as_str()),
                ("units", "metric"),
                ("appid", api_key),
            ])
            .send()
            .await?;
        Ok(response)
    }
}

fn entry_from_item(item: ForecastItem) -> Result<ForecastEntry, WeatherError> {
    let timestamp = NaiveDateTime::parse_from_str(&item.dt_txt, DT_TXT_FORMAT)
        .map_err(|e| WeatherError::Parse(format!("bad dt_txt '{}': {}", item.dt_txt, e)))?;
    let icon = item
        .weather
        .into_iter()
        .next()
        .map(|condition| condition.icon)
        .unwrap_or_default();
    Ok(ForecastEntry {
        timestamp,
        temperature: item.main.temp,
        icon,
    })
}

/// Pull `message` out of an error body, falling back to the status reason
async fn upstream_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_lowercase(),
    }
}
