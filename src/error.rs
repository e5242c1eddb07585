//! Error taxonomy for a search

/// Prompt shown when the search bar is submitted empty
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name.";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
    #[error("City not found or error: {0}")]
    CityNotFound(String),
    #[error("Could not fetch the extended forecast")]
    ForecastUnavailable,
    #[error("OpenWeatherMap API key is not configured")]
    MissingCredential,
    #[error("{0}")]
    Request(String),
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Text for the error line.
    ///
    /// Fetch failures share one sentence that points the user at the two
    /// things they control: the city name and the API key.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            other => format!("Error: {other}. Please verify the city name and API key."),
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    // The request URL carries `appid`, so it never reaches the message.
    fn from(error: reqwest::Error) -> Self {
        let error = error.without_url();
        if error.is_decode() {
            WeatherError::Parse(error.to_string())
        } else {
            WeatherError::Request(error.to_string())
        }
    }
}
