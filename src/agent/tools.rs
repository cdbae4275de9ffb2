//! Tool definitions and implementations for the agent system.

use crate::error::{Result, VaerError};
use crate::sentiment;
use crate::weather;
use serde::{Deserialize, Serialize};

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Look up the canned weather report for a city.
    GetWeatherReport { city: String },

    /// Classify the sentiment of user feedback.
    AnalyzeSentiment { text: String },
}

/// Tool execution dispatch.
///
/// Both tools are pure lookups with no shared state; the context exists as
/// the seam between the agent loop and the tool implementations.
pub struct ToolContext;

impl ToolContext {
    /// Create a new tool context.
    pub fn new() -> Self {
        Self
    }

    /// Execute a tool call and return the JSON result the model consumes.
    pub fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::GetWeatherReport { city } => {
                let report = weather::report_for(city);
                Ok(serde_json::to_string(&report)?)
            }
            ToolCall::AnalyzeSentiment { text } => {
                let score = sentiment::analyze(text);
                Ok(serde_json::to_string(&score)?)
            }
        }
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "get_weather_report".to_string(),
                description: Some(
                    "Retrieves the current weather report for a specified city.".to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "city": {
                            "type": "string",
                            "description": "The city for which to get the weather report."
                        }
                    },
                    "required": ["city"]
                })),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "analyze_sentiment".to_string(),
                description: Some("Analyzes the sentiment of the given text.".to_string()),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "The text to analyze for sentiment."
                        }
                    },
                    "required": ["text"]
                })),
                strict: None,
            },
        },
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| VaerError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "get_weather_report" => {
            let city = args["city"]
                .as_str()
                .ok_or_else(|| VaerError::Agent("Missing 'city' argument".to_string()))?
                .to_string();
            Ok(ToolCall::GetWeatherReport { city })
        }
        "analyze_sentiment" => {
            let text = args["text"]
                .as_str()
                .ok_or_else(|| VaerError::Agent("Missing 'text' argument".to_string()))?
                .to_string();
            Ok(ToolCall::AnalyzeSentiment { text })
        }
        _ => Err(VaerError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weather_tool() {
        let tool = parse_tool_call("get_weather_report", r#"{"city": "London"}"#).unwrap();
        match tool {
            ToolCall::GetWeatherReport { city } => assert_eq!(city, "London"),
            _ => panic!("Expected GetWeatherReport tool"),
        }
    }

    #[test]
    fn test_parse_sentiment_tool() {
        let tool = parse_tool_call("analyze_sentiment", r#"{"text": "That's good"}"#).unwrap();
        match tool {
            ToolCall::AnalyzeSentiment { text } => assert_eq!(text, "That's good"),
            _ => panic!("Expected AnalyzeSentiment tool"),
        }
    }

    #[test]
    fn test_parse_unknown_tool() {
        assert!(parse_tool_call("get_forecast", "{}").is_err());
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(parse_tool_call("get_weather_report", "{}").is_err());
        assert!(parse_tool_call("analyze_sentiment", r#"{"city": "Oslo"}"#).is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_tool_call("get_weather_report", "not json").is_err());
    }

    #[test]
    fn test_execute_weather_report() {
        let context = ToolContext::new();
        let result = context
            .execute(&ToolCall::GetWeatherReport {
                city: "London".to_string(),
            })
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json["report"].as_str().unwrap().contains("London"));
    }

    #[test]
    fn test_execute_weather_report_unknown_city() {
        let context = ToolContext::new();
        let result = context
            .execute(&ToolCall::GetWeatherReport {
                city: "Berlin".to_string(),
            })
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json.get("report").is_none());
    }

    #[test]
    fn test_execute_sentiment() {
        let context = ToolContext::new();
        let result = context
            .execute(&ToolCall::AnalyzeSentiment {
                text: "It's good and sunny".to_string(),
            })
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["confidence"], 0.8);
    }
}
