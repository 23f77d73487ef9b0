mod config;
mod events;
mod executor;
mod parser;

pub use config::ExecutorConfig;
pub use events::{AgentEvent, AgentEventEmitter, AgentEventHandler};
pub use executor::{AgentExecutor, AgentOutcome, AgentStep};
pub use parser::{AgentDecision, parse_decision};
