//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the current-weather + forecast sequence for a city.
    /// `search_id` is unique per search so overlapping fetches never cancel
    /// each other.
    FetchWeather { city: String, search_id: u64 },
    /// A search was requested without an API key
    WarnMissingCredential { city: String },
}
