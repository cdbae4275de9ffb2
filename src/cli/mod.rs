//! CLI module for Vaer.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Vaer - Weather and Sentiment Assistant
///
/// A CLI chatbot that answers weather questions and reads the mood of your
/// feedback. The name "Vaer" comes from the Norwegian word for "weather."
#[derive(Parser, Debug)]
#[command(name = "vaer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session with the agent
    Chat {
        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Skip the startup weather snapshot
        #[arg(long)]
        no_snapshot: bool,
    },

    /// Ask the agent a single question
    Ask {
        /// The question to ask
        question: String,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Look up live current weather for a city
    Weather {
        /// City name, e.g. "London" or "Phoenix,AZ"
        city: String,

        /// Measurement units (standard, metric, imperial)
        #[arg(short, long)]
        units: Option<String>,
    },

    /// Check API keys and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
