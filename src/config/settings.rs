//! Configuration settings for Vaer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub llm: LlmSettings,
    pub weather: WeatherSettings,
    pub agent: AgentSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Language model client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Base URL of the OpenAI-compatible chat completions API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Model to use for agent reasoning.
    pub model: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum tool-calling iterations per agent run.
    pub max_tool_iterations: usize,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.x.ai/v1".to_string(),
            api_key_env: "XAI_API_KEY".to_string(),
            model: "grok-4-1-fast".to_string(),
            request_timeout_secs: 300,
            max_tool_iterations: 10,
        }
    }
}

/// Measurement units for live weather lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin (the API default).
    #[default]
    Standard,
    /// Celsius, wind in m/s.
    Metric,
    /// Fahrenheit, wind in mph.
    Imperial,
}

impl Units {
    /// Value for the API's `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature suffix for display.
    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Standard => "K",
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    /// Wind speed suffix for display.
    pub fn wind_symbol(&self) -> &'static str {
        match self {
            Units::Standard | Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl std::str::FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "kelvin" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(format!("Unknown units: {}", s)),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

/// Live weather API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    /// Base URL of the OpenWeatherMap API.
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Measurement units (standard, metric, imperial).
    pub units: Units,
    /// Response language code.
    pub lang: String,
    /// City queried for the startup weather snapshot.
    pub snapshot_city: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.openweathermap.org".to_string(),
            api_key_env: "OWM_API_KEY".to_string(),
            units: Units::Standard,
            lang: "en".to_string(),
            snapshot_city: "Phoenix,AZ".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Agent identity and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Agent name, used in logs and the chat prompt.
    pub name: String,
    /// Override for the built-in behavior instruction.
    pub instruction: Option<String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            name: "weather_sentiment_agent".to_string(),
            instruction: None,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::VaerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vaer")
            .join("config.toml")
    }
}

impl LlmSettings {
    /// Resolve the API key from the configured environment variable.
    pub fn resolve_api_key(&self) -> crate::error::Result<String> {
        resolve_key(&self.api_key_env)
    }
}

impl WeatherSettings {
    /// Resolve the API key from the configured environment variable.
    pub fn resolve_api_key(&self) -> crate::error::Result<String> {
        resolve_key(&self.api_key_env)
    }
}

fn resolve_key(var: &str) -> crate::error::Result<String> {
    match std::env::var(var) {
        Ok(key) if !key.is_empty() => Ok(key),
        Ok(_) => Err(crate::error::VaerError::Config(format!(
            "{} is empty. Set it with: export {}='...'",
            var, var
        ))),
        Err(_) => Err(crate::error::VaerError::Config(format!(
            "{} not set. Set it with: export {}='...'",
            var, var
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "grok-4-1-fast");
        assert_eq!(settings.llm.api_key_env, "XAI_API_KEY");
        assert_eq!(settings.weather.api_key_env, "OWM_API_KEY");
        assert_eq!(settings.weather.units, Units::Standard);
        assert_eq!(settings.weather.snapshot_city, "Phoenix,AZ");
        assert_eq!(settings.agent.name, "weather_sentiment_agent");
        assert!(settings.agent.instruction.is_none());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [llm]
            model = "grok-3"

            [weather]
            units = "metric"
            "#,
        )
        .unwrap();

        assert_eq!(settings.llm.model, "grok-3");
        assert_eq!(settings.llm.api_base, "https://api.x.ai/v1");
        assert_eq!(settings.weather.units, Units::Metric);
        assert_eq!(settings.weather.snapshot_city, "Phoenix,AZ");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.weather.snapshot_city = "Oslo".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.weather.snapshot_city, "Oslo");
    }

    #[test]
    fn test_units_parse() {
        use std::str::FromStr;
        assert_eq!(Units::from_str("metric").unwrap(), Units::Metric);
        assert_eq!(Units::from_str("Kelvin").unwrap(), Units::Standard);
        assert!(Units::from_str("fahrenheit").is_err());
    }

    #[test]
    fn test_resolve_missing_key() {
        let settings = LlmSettings {
            api_key_env: "VAER_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(settings.resolve_api_key().is_err());
    }
}
