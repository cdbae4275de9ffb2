//! Language model client construction.
//!
//! Builds an async-openai client against the configured OpenAI-compatible
//! endpoint (the xAI API by default). The API key is passed in explicitly;
//! nothing here reads the process environment.

use crate::config::LlmSettings;
use crate::error::Result;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a chat completions client with the configured endpoint and timeout.
pub fn create_client(api_key: &str, settings: &LlmSettings) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()?;

    let config = OpenAIConfig::new()
        .with_api_base(settings.api_base.as_str())
        .with_api_key(api_key);

    Ok(Client::with_config(config).with_http_client(http_client))
}
