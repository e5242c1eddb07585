//! OpenWeatherMap icon codes
//!
//! Icon codes look like `01d` / `10n`: two digits for the condition and a
//! day/night suffix. The terminal shows a glyph per condition; the image URL
//! is kept alongside for anything that can display it.

/// Weather condition category for glyph selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherCondition {
    pub fn from_icon(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::PartlyCloudy,
            Some("03" | "04") => WeatherCondition::Cloudy,
            Some("09") => WeatherCondition::Drizzle,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }

    /// Night variants of clear sky get a moon
    pub fn emoji_for(code: &str) -> &'static str {
        let condition = Self::from_icon(code);
        if condition == WeatherCondition::ClearSky && code.ends_with('n') {
            "\u{1f319}"
        } else {
            condition.emoji()
        }
    }
}

/// Image size variant served by the icon CDN
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSize {
    Normal,
    Large,
}

pub fn icon_url(base: &str, code: &str, size: IconSize) -> String {
    let base = base.trim_end_matches('/');
    match size {
        IconSize::Normal => format!("{base}/{code}.png"),
        IconSize::Large => format!("{base}/{code}@2x.png"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_icon() {
        assert_eq!(WeatherCondition::from_icon("01d"), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_icon("02n"), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_icon("04d"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_icon("10d"), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_icon("50n"), WeatherCondition::Mist);
        assert_eq!(WeatherCondition::from_icon(""), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_icon("99x"), WeatherCondition::Unknown);
    }

    #[test]
    fn test_night_clear_sky_uses_moon() {
        assert_eq!(WeatherCondition::emoji_for("01n"), "\u{1f319}");
        assert_eq!(WeatherCondition::emoji_for("01d"), "\u{2600}\u{fe0f}");
    }

    #[test]
    fn test_icon_url() {
        let base = "http://openweathermap.org/img/wn/";
        assert_eq!(
            icon_url(base, "10d", IconSize::Large),
            "http://openweathermap.org/img/wn/10d@2x.png"
        );
        assert_eq!(
            icon_url(base, "10d", IconSize::Normal),
            "http://openweathermap.org/img/wn/10d.png"
        );
    }
}
