//! Live current-weather client for the OpenWeatherMap API.
//!
//! Serves the startup snapshot and the `weather` subcommand. The agent's
//! weather tool does not use this client; see [`super::report`].

use crate::config::{Units, WeatherSettings};
use crate::error::{Result, VaerError};
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for the OpenWeatherMap current-weather endpoint.
pub struct WeatherClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    units: Units,
    lang: String,
}

impl WeatherClient {
    /// Create a new client with an explicit API key.
    pub fn new(api_key: String, settings: &WeatherSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            api_key,
            units: settings.units,
            lang: settings.lang.clone(),
        })
    }

    /// Fetch the current weather for a city by name.
    ///
    /// Accepts the API's city query format, e.g. "London" or "Phoenix,AZ".
    pub async fn current_by_name(&self, city: &str) -> Result<CurrentWeather> {
        if city.trim().is_empty() {
            return Err(VaerError::InvalidInput("city name is empty".to_string()));
        }

        let url = format!("{}/data/2.5/weather", self.api_base);
        debug!("Fetching current weather for {}", city);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_query()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(VaerError::Weather(message));
        }

        let mut current: CurrentWeather = response.json().await?;
        current.units = self.units;
        Ok(current)
    }
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// Current weather observation for a city.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// City name as resolved by the API.
    pub name: String,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: Thermals,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: Locale,
    /// Observation time, unix seconds UTC.
    pub dt: i64,
    #[serde(skip)]
    units: Units,
}

/// Weather condition descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

/// Temperature and humidity block.
#[derive(Debug, Clone, Deserialize)]
pub struct Thermals {
    pub temp: f64,
    #[serde(default)]
    pub humidity: u8,
}

/// Wind block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

/// Country metadata block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Locale {
    #[serde(default)]
    pub country: Option<String>,
}

impl CurrentWeather {
    /// Condition description, if the API returned one.
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }
}

impl std::fmt::Display for CurrentWeather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let place = match self.sys.country.as_deref() {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        };

        let condition = self.description().unwrap_or("unknown conditions");

        write!(
            f,
            "{}: {}, {:.1}{} (humidity {}%, wind {:.1} {})",
            place,
            condition,
            self.main.temp,
            self.units.temperature_symbol(),
            self.main.humidity,
            self.wind.speed,
            self.units.wind_symbol()
        )?;

        if let Some(observed) = DateTime::from_timestamp(self.dt, 0) {
            write!(f, ", observed {} UTC", observed.format("%Y-%m-%d %H:%M"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "coord": {"lon": -112.07, "lat": 33.45},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 310.9, "feels_like": 308.9, "pressure": 1011, "humidity": 18},
        "wind": {"speed": 3.6, "deg": 250},
        "dt": 1754400000,
        "sys": {"country": "US", "sunrise": 1754396000, "sunset": 1754445000},
        "timezone": -25200,
        "name": "Phoenix",
        "cod": 200
    }"#;

    #[test]
    fn test_deserialize_current_weather() {
        let current: CurrentWeather = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(current.name, "Phoenix");
        assert_eq!(current.sys.country.as_deref(), Some("US"));
        assert_eq!(current.main.temp, 310.9);
        assert_eq!(current.main.humidity, 18);
        assert_eq!(current.wind.speed, 3.6);
        assert_eq!(current.weather[0].main, "Clear");
        assert_eq!(current.description(), Some("clear sky"));
    }

    #[test]
    fn test_deserialize_sparse_payload() {
        // Some stations omit wind and country blocks.
        let current: CurrentWeather = serde_json::from_str(
            r#"{"name": "Nowhere", "main": {"temp": 280.0}, "dt": 0}"#,
        )
        .unwrap();
        assert_eq!(current.wind.speed, 0.0);
        assert!(current.sys.country.is_none());
        assert!(current.description().is_none());
    }

    #[test]
    fn test_display_format() {
        let current: CurrentWeather = serde_json::from_str(SAMPLE).unwrap();
        let rendered = current.to_string();
        assert!(rendered.starts_with("Phoenix, US: clear sky, 310.9K"));
        assert!(rendered.contains("humidity 18%"));
        assert!(rendered.contains("wind 3.6 m/s"));
        assert!(rendered.contains("observed"));
    }

    #[test]
    fn test_api_error_message() {
        let err: ApiError =
            serde_json::from_str(r#"{"cod": "404", "message": "city not found"}"#).unwrap();
        assert_eq!(err.message.as_deref(), Some("city not found"));
    }
}
