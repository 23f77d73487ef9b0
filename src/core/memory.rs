const HUMAN_PREFIX: &str = "Human";
const AI_PREFIX: &str = "AI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub human: String,
    pub ai: String,
}

/// Completed exchanges, rendered verbatim into the prompt's chat history
/// slot. Shared across every run of a session.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    exchanges: Vec<Exchange>,
}

impl ConversationMemory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exchanges: Vec::new(),
        }
    }

    pub fn save_turn(&mut self, human: impl Into<String>, ai: impl Into<String>) {
        self.exchanges.push(Exchange {
            human: human.into(),
            ai: ai.into(),
        });
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.exchanges
            .iter()
            .map(|e| format!("{HUMAN_PREFIX}: {}\n{AI_PREFIX}: {}", e.human, e.ai))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn clear(&mut self) {
        self.exchanges.clear();
    }
}
