//! Daily aggregation of the 3-hour forecast
//!
//! Upstream sends a flat, chronologically ordered list of 3-hour points
//! covering roughly five days. Points are bucketed by calendar date in the
//! order the dates first appear; each bucket keeps every temperature and the
//! icon of its first point. The first bucket is today, which the current
//! conditions already cover, so the display takes the four that follow.

use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::icons::{IconSize, icon_url};
use crate::state::DailyForecastView;

/// Number of days shown after today
pub const FORECAST_DAYS: usize = 4;

/// One 3-hour forecast point
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub icon: String,
}

/// All forecast points sharing a calendar date
#[derive(Clone, Debug, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub temperatures: Vec<f64>,
    pub icon: String,
}

impl DayBucket {
    pub fn max(&self) -> i32 {
        round_half_up(self.temperatures.iter().copied().fold(f64::MIN, f64::max))
    }

    pub fn min(&self) -> i32 {
        round_half_up(self.temperatures.iter().copied().fold(f64::MAX, f64::min))
    }
}

/// Round to the nearest integer, halves toward positive infinity
pub fn round_half_up(value: f64) -> i32 {
    // `value + 0.5` can itself round up to the next integer, so compare the
    // fractional part instead.
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Bucket entries by date, keeping first-seen date order
pub fn group_by_day(entries: &[ForecastEntry]) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    for entry in entries {
        let date = entry.timestamp.date();
        match buckets.iter_mut().find(|bucket| bucket.date == date) {
            Some(bucket) => bucket.temperatures.push(entry.temperature),
            None => buckets.push(DayBucket {
                date,
                temperatures: vec![entry.temperature],
                icon: entry.icon.clone(),
            }),
        }
    }
    buckets
}

/// The days to display: skip the first date, take the next four
pub fn upcoming_days(
    entries: &[ForecastEntry],
    lang: &str,
    icon_base_url: &str,
) -> Vec<DailyForecastView> {
    let locale = locale_for(lang);
    group_by_day(entries)
        .into_iter()
        .skip(1)
        .take(FORECAST_DAYS)
        .map(|bucket| DailyForecastView {
            date: bucket.date.format("%Y-%m-%d").to_string(),
            weekday: weekday_name(bucket.date, locale),
            max: bucket.max(),
            min: bucket.min(),
            icon_url: icon_url(icon_base_url, &bucket.icon, IconSize::Normal),
            icon: bucket.icon,
        })
        .collect()
}

/// Full weekday name in the given locale, first letter upper-cased
pub fn weekday_name(date: NaiveDate, locale: Locale) -> String {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    capitalize(&midnight.format_localized("%A", locale).to_string())
}

/// Map an API language code onto a formatting locale
pub fn locale_for(lang: &str) -> Locale {
    match lang {
        "es" => Locale::es_MX,
        "en" => Locale::en_US,
        "fr" => Locale::fr_FR,
        "de" => Locale::de_DE,
        "it" => Locale::it_IT,
        "pt" | "pt_br" => Locale::pt_BR,
        _ => Locale::POSIX,
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
