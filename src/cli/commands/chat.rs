//! Interactive chat command with tool calling support.

use crate::agent::{parse_tool_call, tool_definitions, ToolContext, DEFAULT_INSTRUCTION};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::{Result, VaerError};
use crate::llm;
use crate::weather::WeatherClient;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestToolMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use console::style;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Run the interactive chat command.
pub async fn run_chat(model: Option<String>, no_snapshot: bool, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Chat, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vaer doctor' for detailed diagnostics.");
        return Err(e);
    }

    // Startup weather snapshot. Printed and otherwise unused; the agent's
    // weather tool answers from canned reports, not from this lookup.
    // A failure here ends the session, matching the strict startup path.
    if !no_snapshot {
        let owm_key = settings.weather.resolve_api_key()?;
        let weather_client = WeatherClient::new(owm_key, &settings.weather)?;

        let spinner = Output::spinner("Fetching weather snapshot...");
        match weather_client
            .current_by_name(&settings.weather.snapshot_city)
            .await
        {
            Ok(snapshot) => {
                spinner.finish_and_clear();
                Output::info(&format!("{}", snapshot));
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::error(&format!("Weather snapshot failed: {}", e));
                return Err(e);
            }
        }
    }

    let model = model.unwrap_or_else(|| settings.llm.model.clone());
    let api_key = settings.llm.resolve_api_key()?;
    let client = llm::create_client(&api_key, &settings.llm)?;

    let instruction = settings
        .agent
        .instruction
        .clone()
        .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string());

    info!("Starting agent '{}' with model {}", settings.agent.name, model);

    let mut chat = ChatSession::new(
        client,
        ToolContext::new(),
        &model,
        &instruction,
        settings.llm.max_tool_iterations,
    );

    println!("\n{}", style("Vaer Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask about the weather, or give feedback. Type 'exit' to quit, 'clear' to reset.")
            .dim()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", style("You:").green().bold());
        std::io::stdout().flush()?;

        // Ctrl-C ends the session like an explicit exit.
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                Output::info("Goodbye!");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(input) = line else {
            // EOF on stdin
            println!();
            break;
        };

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("clear") {
            chat.clear_history();
            Output::info("Conversation history cleared.");
            continue;
        }

        match chat.send_message(input).await {
            Ok(response) => {
                println!("\n{} {}\n", style("Vaer:").cyan().bold(), response);
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}

/// Interactive chat session with tool calling support.
struct ChatSession {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    tools: ToolContext,
    messages: Vec<ChatCompletionRequestMessage>,
    max_tool_iterations: usize,
}

impl ChatSession {
    /// Create a new chat session.
    fn new(
        client: async_openai::Client<async_openai::config::OpenAIConfig>,
        tools: ToolContext,
        model: &str,
        instruction: &str,
        max_tool_iterations: usize,
    ) -> Self {
        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(instruction)
            .build()
            .expect("Failed to build system message");

        Self {
            client,
            model: model.to_string(),
            tools,
            messages: vec![system_message.into()],
            max_tool_iterations,
        }
    }

    /// Clear conversation history (keeps system prompt).
    fn clear_history(&mut self) {
        self.messages.truncate(1); // Keep system message
    }

    /// Send a message and get a response, handling tool calls.
    async fn send_message(&mut self, user_input: &str) -> Result<String> {
        // Add user message to history
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(user_input)
            .build()
            .map_err(|e| VaerError::Agent(e.to_string()))?;
        self.messages.push(user_message.into());

        let mut iterations = 0;

        loop {
            iterations += 1;
            if iterations > self.max_tool_iterations {
                return Err(VaerError::Agent("Too many tool iterations".to_string()));
            }

            debug!("Chat iteration {}, {} messages", iterations, self.messages.len());

            // Call LLM with tools
            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(self.messages.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| VaerError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| VaerError::Llm(format!("Chat API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| VaerError::Agent("No response from model".to_string()))?;

            // Check if LLM wants to call tools
            if let Some(ref tool_calls) = choice.message.tool_calls {
                if tool_calls.is_empty() {
                    // No tool calls, this is the final response
                    let content = choice.message.content.clone().unwrap_or_default();
                    self.add_assistant_message(&content)?;
                    return Ok(content);
                }

                // Add assistant message with tool calls
                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(|e| VaerError::Agent(e.to_string()))?;
                self.messages.push(assistant_msg.into());

                // Execute each tool call
                for tool_call in tool_calls {
                    let name = &tool_call.function.name;
                    let arguments = &tool_call.function.arguments;

                    info!("Chat calling tool: {} with args: {}", name, arguments);
                    print!("{}", style(format!("  [{}] ", name)).dim());
                    std::io::stdout().flush().ok();

                    let result = match parse_tool_call(name, arguments) {
                        Ok(tool) => match self.tools.execute(&tool) {
                            Ok(output) => {
                                println!("{}", style("✓").green());
                                output
                            }
                            Err(e) => {
                                println!("{}", style("✗").red());
                                format!("Tool error: {}", e)
                            }
                        },
                        Err(e) => {
                            println!("{}", style("✗").red());
                            format!("Failed to parse tool call: {}", e)
                        }
                    };

                    // Add tool result to messages
                    let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(&tool_call.id)
                        .content(result)
                        .build()
                        .map_err(|e| VaerError::Agent(e.to_string()))?;
                    self.messages.push(tool_msg.into());
                }
            } else {
                // No tool calls - final response
                let content = choice.message.content.clone().unwrap_or_default();
                self.add_assistant_message(&content)?;

                // Trim history if too long (keep system + last N exchanges)
                self.trim_history(30);

                return Ok(content);
            }
        }
    }

    /// Add an assistant text message to history.
    fn add_assistant_message(&mut self, content: &str) -> Result<()> {
        let msg = ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| VaerError::Agent(e.to_string()))?;
        self.messages.push(msg.into());
        Ok(())
    }

    /// Trim conversation history to keep it manageable.
    fn trim_history(&mut self, max_messages: usize) {
        if self.messages.len() > max_messages {
            // Keep system message (index 0) and last N-1 messages
            let start = self.messages.len() - (max_messages - 1);
            let mut trimmed = vec![self.messages[0].clone()];
            trimmed.extend(self.messages[start..].iter().cloned());
            self.messages = trimmed;
        }
    }
}
