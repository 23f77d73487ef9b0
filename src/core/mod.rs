pub mod agent;
pub mod error;
pub mod llm;
pub mod memory;
pub mod prompt;
pub mod types;

pub use agent::{AgentExecutor, ExecutorConfig};
pub use error::{AgentError, Result};
pub use llm::LanguageModel;
