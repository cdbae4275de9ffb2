//! Pre-flight checks before networked operations.
//!
//! Validates that required API keys are configured before starting
//! operations that would otherwise fail midway.

use crate::config::Settings;
use crate::error::Result;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Chat needs both the model and the weather API (startup snapshot).
    Chat,
    /// One-shot questions need the model API only.
    Ask,
    /// Live weather lookups need the weather API only.
    Weather,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Chat => {
            settings.llm.resolve_api_key()?;
            settings.weather.resolve_api_key()?;
        }
        Operation::Ask => {
            settings.llm.resolve_api_key()?;
        }
        Operation::Weather => {
            settings.weather.resolve_api_key()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fails_without_keys() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "VAER_TEST_NO_SUCH_LLM_KEY".to_string();
        settings.weather.api_key_env = "VAER_TEST_NO_SUCH_OWM_KEY".to_string();

        assert!(check(Operation::Chat, &settings).is_err());
        assert!(check(Operation::Ask, &settings).is_err());
        assert!(check(Operation::Weather, &settings).is_err());
    }
}
