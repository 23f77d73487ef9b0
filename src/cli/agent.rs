use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::{AgentExecutor, ExecutorConfig, LanguageModel, Result};

use super::provider::create_search_tool;
use super::session::TraceHandler;
use super::Cli;

pub fn create_executor(
    llm: &Arc<dyn LanguageModel>,
    cli: &Cli,
    config: &AppConfig,
) -> Result<AgentExecutor> {
    let mut executor_config = ExecutorConfig::default();
    if let Some(n) = cli.max_iterations.or(config.max_iterations) {
        executor_config.max_iterations = n;
    }

    let mut executor = AgentExecutor::with_config(llm.clone(), executor_config);

    executor.tools_mut().register(Arc::new(create_search_tool(config)?));

    if cli.verbose {
        executor.register_handler(Arc::new(TraceHandler));
    }

    Ok(executor)
}
