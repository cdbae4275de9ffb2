//! Weather command implementation - live current-weather lookup.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Settings, Units};
use crate::error::VaerError;
use crate::weather::WeatherClient;
use anyhow::Result;
use std::str::FromStr;

/// Run the weather command.
pub async fn run_weather(city: &str, units: Option<String>, mut settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Weather, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vaer doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    if let Some(units) = units {
        settings.weather.units = Units::from_str(&units).map_err(VaerError::InvalidInput)?;
    }

    let api_key = settings.weather.resolve_api_key()?;
    let client = WeatherClient::new(api_key, &settings.weather)?;

    let spinner = Output::spinner(&format!("Looking up weather for {}...", city));

    match client.current_by_name(city).await {
        Ok(current) => {
            spinner.finish_and_clear();
            println!("{}", current);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Lookup failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
