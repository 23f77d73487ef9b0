use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::{AgentError, LanguageModel, Result};
use crate::providers::{ApiKey, OpenAiProvider};
use crate::tools::GoogleSearchTool;

use super::Cli;

/// Config file values win over environment variables; empty strings count
/// as unset.
pub fn create_provider(cli: &Cli, config: &AppConfig) -> Result<Arc<dyn LanguageModel>> {
    let api_key = match config.openai.api_key.as_deref().filter(|s| !s.is_empty()) {
        Some(key) => ApiKey::new(key.to_string()),
        None => {
            ApiKey::from_env("OPENAI_API_KEY").map_err(|e| AgentError::Config(e.to_string()))?
        }
    };

    let mut provider =
        OpenAiProvider::new(api_key).map_err(|e| AgentError::Config(e.to_string()))?;

    if let Some(model) = cli.model.as_deref().or(config.model.as_deref()) {
        provider = provider.with_model(model.to_string());
    }

    Ok(Arc::new(provider))
}

pub fn create_search_tool(config: &AppConfig) -> Result<GoogleSearchTool> {
    let api_key = config.google.api_key.as_deref().filter(|s| !s.is_empty());
    let engine_id = config.google.cse_id.as_deref().filter(|s| !s.is_empty());

    let tool = match (api_key, engine_id) {
        (Some(key), Some(cx)) => GoogleSearchTool::new(ApiKey::new(key.to_string()), cx),
        _ => GoogleSearchTool::from_env(),
    }
    .map_err(|e| AgentError::Config(e.to_string()))?;

    Ok(tool)
}
