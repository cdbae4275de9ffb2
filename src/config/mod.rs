//! Configuration module for Vaer.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    AgentSettings, GeneralSettings, LlmSettings, Settings, Units, WeatherSettings,
};
