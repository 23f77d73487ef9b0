use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum AgentEvent {
    /// Raw model completion for one decision step.
    Step { text: String },
    ToolStarted { tool: String, input: String },
    ToolFinished { tool: String, observation: String },
    Finished { answer: String },
}

pub trait AgentEventHandler: Send + Sync {
    fn handle(&self, event: AgentEvent);
}

#[derive(Default)]
pub struct AgentEventEmitter {
    handlers: Vec<Arc<dyn AgentEventHandler>>,
}

impl AgentEventEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn AgentEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: AgentEvent) {
        for handler in &self.handlers {
            handler.handle(event.clone());
        }
    }

    pub fn emit_step(&self, text: impl Into<String>) {
        self.emit(AgentEvent::Step { text: text.into() });
    }

    pub fn emit_tool_started(&self, tool: impl Into<String>, input: impl Into<String>) {
        self.emit(AgentEvent::ToolStarted {
            tool: tool.into(),
            input: input.into(),
        });
    }

    pub fn emit_tool_finished(&self, tool: impl Into<String>, observation: impl Into<String>) {
        self.emit(AgentEvent::ToolFinished {
            tool: tool.into(),
            observation: observation.into(),
        });
    }

    pub fn emit_finished(&self, answer: impl Into<String>) {
        self.emit(AgentEvent::Finished {
            answer: answer.into(),
        });
    }
}
