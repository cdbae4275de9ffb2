//! Vaer - Weather and Sentiment Assistant
//!
//! A CLI chatbot that answers weather questions and classifies the sentiment
//! of user feedback. The name "Vaer" comes from the Norwegian word for
//! "weather."
//!
//! # Overview
//!
//! Vaer wires two small tools into an LLM-driven agent loop:
//! - a weather report lookup for a fixed set of cities
//! - a keyword-based sentiment classifier for user feedback
//!
//! The language model decides when to call which tool; Vaer executes the
//! calls and feeds the results back. Separately, startup fetches a live
//! current-weather snapshot from the OpenWeatherMap API for display.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `weather` - Canned report lookup and the live weather API client
//! - `sentiment` - Keyword-based sentiment classification
//! - `agent` - Agent assembly and the tool-calling loop
//! - `llm` - Language model client construction
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use vaer::agent::{Agent, ToolContext};
//! use vaer::config::Settings;
//! use vaer::llm;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let api_key = settings.llm.resolve_api_key()?;
//!     let client = llm::create_client(&api_key, &settings.llm)?;
//!
//!     let agent = Agent::new(client, ToolContext::new(), &settings.llm.model);
//!     let response = agent.run("What's the weather in London?").await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod sentiment;
pub mod weather;

pub use error::{Result, VaerError};
