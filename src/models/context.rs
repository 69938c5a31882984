use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::AppError;

/// A "City, State" place as typed into the context panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub city: String,
    pub state: String,
}

impl Place {
    /// Keyword form used by the news and video searches.
    pub fn keywords(&self) -> String {
        format!("{} {} weather", self.city, self.state)
    }

    /// Query form used by the weather lookup.
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.state)
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

impl std::str::FromStr for Place {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (city, state) = s.split_once(',').ok_or_else(|| {
            AppError::Validation("Enter a place in the format \"City, State\".".to_string())
        })?;

        let city = city.trim();
        let state = state.trim();
        if city.is_empty() || state.is_empty() {
            return Err(AppError::Validation(
                "Enter a place in the format \"City, State\".".to_string(),
            ));
        }

        Ok(Self {
            city: city.to_string(),
            state: state.to_string(),
        })
    }
}

/// Geographic coordinates, produced by the weather stage and consumed
/// by the air quality stage.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Air quality index bands used by the pollution API (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    Unknown,
}

impl AqiLevel {
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => AqiLevel::Good,
            2 => AqiLevel::Fair,
            3 => AqiLevel::Moderate,
            4 => AqiLevel::Poor,
            5 => AqiLevel::VeryPoor,
            _ => AqiLevel::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Fair => "Fair",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::Poor => "Poor",
            AqiLevel::VeryPoor => "Very Poor",
            AqiLevel::Unknown => "Unknown",
        }
    }

    /// CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            AqiLevel::Good => "aqi-good",
            AqiLevel::Fair => "aqi-fair",
            AqiLevel::Moderate => "aqi-moderate",
            AqiLevel::Poor => "aqi-poor",
            AqiLevel::VeryPoor => "aqi-very-poor",
            AqiLevel::Unknown => "aqi-unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AqiReading {
    pub index: u8,
}

impl AqiReading {
    pub fn level(&self) -> AqiLevel {
        AqiLevel::from_index(self.index)
    }
}

/// Current conditions shaped from the weather API response.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub coord: Coord,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed_kph: f64,
    pub wind_deg: u32,
    pub visibility_m: u32,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Headline {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoLink {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

/// What the context panel displays. `Default` is the all-placeholder
/// state shown before any search and after a rejected one.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContextData {
    pub weather: Option<WeatherSnapshot>,
    pub air_quality: Option<AqiReading>,
    pub headlines: Vec<Headline>,
    pub videos: Vec<VideoLink>,
}

/// How stage failures affect already-fetched stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContextPolicy {
    /// Render the stages that succeeded; failed ones fall back to
    /// placeholders.
    #[default]
    ShowPartial,
    /// Any stage failure discards every stage's data.
    AllOrNothing,
}

/// Raw per-stage outcome of one context pipeline run. The weather
/// stage feeds the others, so when it fails nothing else is attempted
/// and the report holds only that failure.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContextReport {
    pub weather: Option<WeatherSnapshot>,
    pub air_quality: Option<AqiReading>,
    pub headlines: Vec<Headline>,
    pub videos: Vec<VideoLink>,
    pub failures: Vec<String>,
}

impl ContextReport {
    pub fn any_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Projects the report into display data under the given policy.
    pub fn into_data(self, policy: ContextPolicy) -> ContextData {
        if policy == ContextPolicy::AllOrNothing && self.any_failed() {
            return ContextData::default();
        }
        ContextData {
            weather: self.weather,
            air_quality: self.air_quality,
            headlines: self.headlines,
            videos: self.videos,
        }
    }
}
