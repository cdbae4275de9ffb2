//! Ask command implementation.

use crate::agent::{Agent, ToolContext, DEFAULT_INSTRUCTION};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::llm;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(question: &str, model: Option<String>, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vaer doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let model = model.unwrap_or_else(|| settings.llm.model.clone());
    let api_key = settings.llm.resolve_api_key()?;
    let client = llm::create_client(&api_key, &settings.llm)?;

    let instruction = settings
        .agent
        .instruction
        .clone()
        .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string());

    tracing::info!("Running agent '{}' with model {}", settings.agent.name, model);

    let agent = Agent::new(client, ToolContext::new(), &model)
        .with_instruction(&instruction)
        .with_max_iterations(settings.llm.max_tool_iterations);

    let spinner = Output::spinner("Agent working...");

    match agent.run(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            // Show the agent's response
            println!("\n{}\n", response.content);

            // Show tool calls summary
            if !response.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", response.tool_calls.len()));
                for call in &response.tool_calls {
                    Output::info(&format!("  {} {}", call.name, truncate(&call.arguments, 60)));
                }
                println!();
            }

            Output::info(&format!(
                "Completed in {} iteration(s)",
                response.iterations
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Agent failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        let long = "a".repeat(80);
        let cut = truncate(&long, 60);
        assert_eq!(cut.len(), 60);
        assert!(cut.ends_with("..."));
    }
}
