//! Canned weather reports for the agent's weather tool.
//!
//! The agent's weather tool is intentionally a fixed two-city lookup rather
//! than a live API integration; the live client in [`super::client`] serves
//! the startup snapshot and the `weather` subcommand only.

use serde::{Deserialize, Serialize};

/// Outcome of a weather report lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherStatus {
    Success,
    Error,
}

/// Result of a weather report lookup.
///
/// `report` is present exactly when `status` is [`WeatherStatus::Success`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub status: WeatherStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl WeatherReport {
    fn success(report: &str) -> Self {
        Self {
            status: WeatherStatus::Success,
            report: Some(report.to_string()),
        }
    }

    fn error() -> Self {
        Self {
            status: WeatherStatus::Error,
            report: None,
        }
    }
}

const LONDON_REPORT: &str = "The current weather in London is cloudy with a \
    temperature of 18 degrees Celsius and a chance of rain.";

const PARIS_REPORT: &str =
    "The weather in Paris is sunny with a temperature of 25 degrees Celsius.";

/// Look up the canned weather report for a city.
///
/// Case-insensitive exact match; unknown cities return an error status with
/// no report text.
pub fn report_for(city: &str) -> WeatherReport {
    match city.to_lowercase().as_str() {
        "london" => WeatherReport::success(LONDON_REPORT),
        "paris" => WeatherReport::success(PARIS_REPORT),
        _ => WeatherReport::error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_london_report() {
        let result = report_for("London");
        assert_eq!(result.status, WeatherStatus::Success);
        assert_eq!(
            result.report.as_deref(),
            Some(
                "The current weather in London is cloudy with a temperature \
                 of 18 degrees Celsius and a chance of rain."
            )
        );
    }

    #[test]
    fn test_paris_report() {
        let result = report_for("paris");
        assert_eq!(result.status, WeatherStatus::Success);
        assert_eq!(
            result.report.as_deref(),
            Some("The weather in Paris is sunny with a temperature of 25 degrees Celsius.")
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(report_for("LONDON"), report_for("london"));
        assert_eq!(report_for("PaRiS").status, WeatherStatus::Success);
    }

    #[test]
    fn test_unknown_city() {
        let result = report_for("Berlin");
        assert_eq!(result.status, WeatherStatus::Error);
        assert!(result.report.is_none());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(report_for("london"), report_for("london"));
        assert_eq!(report_for("Berlin"), report_for("Berlin"));
    }

    #[test]
    fn test_report_omitted_on_error() {
        let json = serde_json::to_value(report_for("Berlin")).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json.get("report").is_none());

        let json = serde_json::to_value(report_for("london")).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json["report"].as_str().unwrap().contains("London"));
    }
}
