mod agent;
mod args;
mod provider;
mod session;

pub use agent::create_executor;
pub use args::{Cli, Commands, ConfigSubcommands, DEFAULT_QUESTIONS};
pub use provider::{create_provider, create_search_tool};
pub use session::{TraceHandler, run_session};
