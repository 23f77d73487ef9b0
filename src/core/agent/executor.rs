use std::sync::Arc;

use tracing::debug;

use super::config::ExecutorConfig;
use super::events::{AgentEventEmitter, AgentEventHandler};
use super::parser::{AgentDecision, parse_decision};
use crate::core::error::{AgentError, Result};
use crate::core::llm::LanguageModel;
use crate::core::memory::ConversationMemory;
use crate::core::prompt::ZeroShotPrompt;
use crate::core::types::{CompletionRequest, Message, Usage};
use crate::tools::ToolRegistry;

/// The model writes free text up to the point where an observation would
/// go; stopping there keeps it from hallucinating tool output.
const OBSERVATION_STOP: &str = "\nObservation:";

#[derive(Debug, Clone)]
pub struct AgentStep {
    pub thought: String,
    pub tool: String,
    pub input: String,
    pub observation: String,
}

#[derive(Debug, Clone)]
pub struct AgentOutcome {
    pub answer: String,
    pub steps: Vec<AgentStep>,
    pub usage: Usage,
}

/// Drives the decide/act/observe loop for one question at a time; the
/// conversation memory persists across questions.
pub struct AgentExecutor {
    llm: Arc<dyn LanguageModel>,
    tools: ToolRegistry,
    memory: ConversationMemory,
    config: ExecutorConfig,
    events: AgentEventEmitter,
}

impl AgentExecutor {
    #[must_use]
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self::with_config(llm, ExecutorConfig::default())
    }

    #[must_use]
    pub fn with_config(llm: Arc<dyn LanguageModel>, config: ExecutorConfig) -> Self {
        Self {
            llm,
            tools: ToolRegistry::new(),
            memory: ConversationMemory::new(),
            config,
            events: AgentEventEmitter::new(),
        }
    }

    pub fn register_handler(&mut self, handler: Arc<dyn AgentEventHandler>) {
        self.events.add_handler(handler);
    }

    #[must_use]
    pub const fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub const fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    #[must_use]
    pub const fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    #[must_use]
    pub fn llm(&self) -> &dyn LanguageModel {
        self.llm.as_ref()
    }

    pub async fn run(&mut self, input: impl Into<String>) -> Result<AgentOutcome> {
        let input = input.into();
        let prompt = ZeroShotPrompt::build(&self.tools);
        let chat_history = self.memory.render();

        let mut scratchpad = String::new();
        let mut steps = Vec::new();
        let mut usage = Usage::default();

        debug!(model = self.llm.model(), %input, "starting agent run");

        for iteration in 0..self.config.max_iterations {
            let rendered = prompt.render(&chat_history, &input, &scratchpad);
            let request = CompletionRequest::new(vec![Message::user(rendered)])
                .with_max_tokens(self.config.max_tokens)
                .with_temperature(self.config.temperature)
                .with_stop_sequence(OBSERVATION_STOP);

            let response = self.llm.complete(request).await?;
            usage.add(&response.usage);

            let text = response.message.content;
            debug!(iteration, completion = %text, "model step");
            self.events.emit_step(&text);

            match parse_decision(&text)? {
                AgentDecision::Finish { answer } => {
                    self.memory.save_turn(&input, &answer);
                    self.events.emit_finished(&answer);
                    return Ok(AgentOutcome {
                        answer,
                        steps,
                        usage,
                    });
                }
                AgentDecision::Act {
                    tool,
                    input: tool_input,
                } => {
                    self.events.emit_tool_started(&tool, &tool_input);
                    let observation = self.observe(&tool, &tool_input).await;
                    self.events.emit_tool_finished(&tool, &observation);

                    scratchpad.push_str(&text);
                    scratchpad.push_str("\nObservation: ");
                    scratchpad.push_str(&observation);
                    scratchpad.push_str("\nThought:");

                    steps.push(AgentStep {
                        thought: text,
                        tool,
                        input: tool_input,
                        observation,
                    });
                }
            }
        }

        Err(AgentError::IterationLimit(self.config.max_iterations))
    }

    /// Tool failures become observations so the model can route around
    /// them; only provider failures abort the run.
    async fn observe(&self, tool: &str, input: &str) -> String {
        match self.tools.dispatch(tool, input).await {
            Ok(observation) => observation,
            Err(AgentError::ToolNotFound(name)) => {
                debug!(tool = %name, "model picked an unregistered tool");
                format!(
                    "{name} is not a valid tool, try one of [{}].",
                    self.tools.names().join(", ")
                )
            }
            Err(e) => format!("Error: {e}"),
        }
    }
}
