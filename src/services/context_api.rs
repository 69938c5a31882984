use chrono::DateTime;
use serde::Deserialize;

use crate::config::Config;
use crate::models::{
    context::{
        AqiReading, ContextReport, Coord, Headline, Place, VideoLink, WeatherSnapshot,
    },
    error::AppError,
};
use crate::services::http::{classify_error, error_for_status};

const WEATHER_BASE: &str = "https://api.openweathermap.org/data/2.5";
const NEWS_BASE: &str = "https://newsapi.org/v2";
const YOUTUBE_BASE: &str = "https://www.googleapis.com/youtube/v3";
const GEOCODE_BASE: &str = "https://api.opencagedata.com/geocode/v1";

const THUMBNAIL_PLACEHOLDER: &str = "https://via.placeholder.com/300x200";

// WEATHER RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct WeatherResponse {
    coord: Coord,
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
    #[serde(default)]
    visibility: u32,
    sys: SunTimes,
}

#[derive(Deserialize, Debug)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u32,
    pressure: u32,
}

#[derive(Deserialize, Debug)]
struct Condition {
    description: String,
}

#[derive(Deserialize, Debug)]
struct Wind {
    speed: f64,
    #[serde(default)]
    deg: u32,
}

#[derive(Deserialize, Debug)]
struct SunTimes {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

impl From<WeatherResponse> for WeatherSnapshot {
    fn from(r: WeatherResponse) -> Self {
        Self {
            coord: r.coord,
            temperature: r.main.temp,
            feels_like: r.main.feels_like,
            humidity: r.main.humidity,
            pressure: r.main.pressure,
            // The API reports m/s
            wind_speed_kph: r.wind.speed * 3.6,
            wind_deg: r.wind.deg,
            visibility_m: r.visibility,
            sunrise: r.sys.sunrise.and_then(|s| DateTime::from_timestamp(s, 0)),
            sunset: r.sys.sunset.and_then(|s| DateTime::from_timestamp(s, 0)),
            description: r
                .weather
                .into_iter()
                .next()
                .map(|c| c.description)
                .unwrap_or_default(),
        }
    }
}

// AIR POLLUTION RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct AirPollutionResponse {
    list: Vec<AqiEntry>,
}

#[derive(Deserialize, Debug)]
struct AqiEntry {
    main: AqiMain,
}

#[derive(Deserialize, Debug)]
struct AqiMain {
    aqi: u8,
}

// NEWS RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct NewsResponse {
    articles: Vec<Article>,
}

#[derive(Deserialize, Debug)]
struct Article {
    title: String,
    url: String,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
}

// VIDEO SEARCH RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct VideoSearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Deserialize, Debug)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Deserialize, Debug)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Snippet {
    title: String,
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Debug)]
struct Thumbnails {
    high: Thumbnail,
}

#[derive(Deserialize, Debug)]
struct Thumbnail {
    url: String,
}

// GEOCODING RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize, Debug)]
struct GeocodeResult {
    components: GeocodeComponents,
}

#[derive(Deserialize, Debug)]
struct GeocodeComponents {
    county: Option<String>,
    state: Option<String>,
}

/// Client for the third-party context APIs: weather, air pollution,
/// news, video search and reverse geocoding.
pub struct ContextClient {
    http: reqwest::Client,
    weather_base: String,
    news_base: String,
    youtube_base: String,
    geocode_base: String,
}

impl ContextClient {
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            weather_base: WEATHER_BASE.to_string(),
            news_base: NEWS_BASE.to_string(),
            youtube_base: YOUTUBE_BASE.to_string(),
            geocode_base: GEOCODE_BASE.to_string(),
        })
    }

    /// Runs the full context pipeline for a place.
    ///
    /// The weather stage runs first because the air quality lookup
    /// needs its coordinates; when it fails, the remaining stages are
    /// not attempted. Every other stage reports its own failure
    /// independently, leaving the policy decision to the caller.
    pub async fn load_context(&self, place: &Place) -> ContextReport {
        let mut report = ContextReport::default();

        let weather = match self.fetch_weather(place).await {
            Ok(weather) => weather,
            Err(e) => {
                report.failures.push(format!("weather: {e}"));
                return report;
            }
        };
        let coord = weather.coord;
        report.weather = Some(weather);

        match self.fetch_air_quality(coord).await {
            Ok(reading) => report.air_quality = Some(reading),
            Err(e) => report.failures.push(format!("air quality: {e}")),
        }

        let keywords = place.keywords();
        match self.fetch_news(&keywords).await {
            Ok(headlines) => report.headlines = headlines,
            Err(e) => report.failures.push(format!("news: {e}")),
        }

        match self.fetch_videos(&keywords).await {
            Ok(videos) => report.videos = videos,
            Err(e) => report.failures.push(format!("videos: {e}")),
        }

        report
    }

    pub async fn fetch_weather(&self, place: &Place) -> Result<WeatherSnapshot, AppError> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.weather_base,
            place.query(),
            Config::OPENWEATHER_API_KEY
        );
        let response: WeatherResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    pub async fn fetch_air_quality(&self, coord: Coord) -> Result<AqiReading, AppError> {
        let url = format!(
            "{}/air_pollution?lat={}&lon={}&appid={}",
            self.weather_base,
            coord.lat,
            coord.lon,
            Config::OPENWEATHER_API_KEY
        );
        let response: AirPollutionResponse = self.get_json(&url).await?;
        let entry = response
            .list
            .into_iter()
            .next()
            .ok_or_else(|| AppError::DataError("Air pollution response was empty".to_string()))?;
        Ok(AqiReading {
            index: entry.main.aqi,
        })
    }

    pub async fn fetch_news(&self, keywords: &str) -> Result<Vec<Headline>, AppError> {
        let url = format!(
            "{}/everything?q={}&apiKey={}",
            self.news_base,
            keywords,
            Config::NEWS_API_KEY
        );
        let response: NewsResponse = self.get_json(&url).await?;
        Ok(response
            .articles
            .into_iter()
            .take(Config::CONTEXT_LINK_LIMIT)
            .map(|article| Headline {
                title: article.title,
                url: article.url,
                thumbnail: article
                    .url_to_image
                    .unwrap_or_else(|| THUMBNAIL_PLACEHOLDER.to_string()),
            })
            .collect())
    }

    pub async fn fetch_videos(&self, keywords: &str) -> Result<Vec<VideoLink>, AppError> {
        let url = format!(
            "{}/search?part=snippet&q={}&key={}",
            self.youtube_base,
            keywords,
            Config::YOUTUBE_API_KEY
        );
        let response: VideoSearchResponse = self.get_json(&url).await?;
        Ok(response
            .items
            .into_iter()
            // Search results can include channels/playlists with no video id
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoLink {
                    title: item.snippet.title,
                    url: format!("https://www.youtube.com/embed/{video_id}"),
                    thumbnail: item.snippet.thumbnails.high.url,
                })
            })
            .take(Config::CONTEXT_LINK_LIMIT)
            .collect())
    }

    /// Resolves coordinates into a "City, State" place.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Place, AppError> {
        let url = format!(
            "{}/json?q={lat}+{lon}&key={}",
            self.geocode_base,
            Config::GEOCODING_API_KEY
        );
        let response: GeocodeResponse = self.get_json(&url).await?;
        let components = response
            .results
            .into_iter()
            .next()
            .map(|r| r.components)
            .ok_or_else(|| AppError::DataError("Geocoding response was empty".to_string()))?;

        match (components.county, components.state) {
            (Some(county), Some(state)) => Ok(Place {
                city: county,
                state,
            }),
            _ => Err(AppError::DataError(
                "Unable to determine city and state from coordinates".to_string(),
            )),
        }
    }

    /// Executes a single unauthenticated GET and decodes the body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_response_shaping() {
        let json = r#"{
            "coord": {"lat": 30.27, "lon": -97.74},
            "main": {"temp": 21.5, "feels_like": 22.1, "humidity": 40, "pressure": 1013},
            "weather": [{"description": "clear sky"}],
            "wind": {"speed": 3.5, "deg": 180},
            "visibility": 10000,
            "sys": {"sunrise": 1705752000, "sunset": 1705791600}
        }"#;

        let response: WeatherResponse = serde_json::from_str(json).unwrap();
        let snapshot: WeatherSnapshot = response.into();

        assert_eq!(snapshot.temperature, 21.5);
        assert_eq!(snapshot.humidity, 40);
        assert!((snapshot.wind_speed_kph - 12.6).abs() < 1e-9);
        assert_eq!(snapshot.visibility_m, 10000);
        assert_eq!(snapshot.description, "clear sky");
        assert!(snapshot.sunrise.is_some());
    }

    #[test]
    fn test_weather_response_without_optional_fields() {
        let json = r#"{
            "coord": {"lat": 30.0, "lon": -97.0},
            "main": {"temp": 10.0, "feels_like": 9.0, "humidity": 80, "pressure": 1000},
            "weather": [],
            "wind": {"speed": 0.0},
            "sys": {}
        }"#;

        let response: WeatherResponse = serde_json::from_str(json).unwrap();
        let snapshot: WeatherSnapshot = response.into();
        assert_eq!(snapshot.description, "");
        assert_eq!(snapshot.wind_deg, 0);
        assert_eq!(snapshot.visibility_m, 0);
        assert!(snapshot.sunrise.is_none());
    }

    #[test]
    fn test_air_pollution_parsing() {
        let json = r#"{"list":[{"main":{"aqi":3}}]}"#;
        let response: AirPollutionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.list[0].main.aqi, 3);
    }

    #[test]
    fn test_news_parsing_with_missing_thumbnail() {
        let json = r#"{"articles":[
            {"title":"Storm inbound","url":"https://n.example/1","urlToImage":null},
            {"title":"Heat wave","url":"https://n.example/2","urlToImage":"https://n.example/2.jpg"}
        ]}"#;
        let response: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.articles.len(), 2);
        assert!(response.articles[0].url_to_image.is_none());
    }

    #[test]
    fn test_video_search_skips_non_video_items() {
        let json = r#"{"items":[
            {"id":{"kind":"youtube#channel"},
             "snippet":{"title":"A channel","thumbnails":{"high":{"url":"https://y.example/c.jpg"}}}},
            {"id":{"videoId":"abc123"},
             "snippet":{"title":"A video","thumbnails":{"high":{"url":"https://y.example/v.jpg"}}}}
        ]}"#;
        let response: VideoSearchResponse = serde_json::from_str(json).unwrap();

        let videos: Vec<VideoLink> = response
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoLink {
                    title: item.snippet.title,
                    url: format!("https://www.youtube.com/embed/{video_id}"),
                    thumbnail: item.snippet.thumbnails.high.url,
                })
            })
            .collect();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_geocode_parsing() {
        let json = r#"{"results":[{"components":{"county":"Travis County","state":"Texas"}}]}"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        let components = &response.results[0].components;
        assert_eq!(components.county.as_deref(), Some("Travis County"));
        assert_eq!(components.state.as_deref(), Some("Texas"));
    }
}
