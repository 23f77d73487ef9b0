use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Tool '{tool}' failed: {reason}")]
    Tool { tool: String, reason: String },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Could not parse agent decision: {0}")]
    Parse(String),

    #[error("Agent stopped after {0} iterations without a final answer")]
    IterationLimit(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;

impl From<crate::providers::error::ProviderError> for AgentError {
    fn from(err: crate::providers::error::ProviderError) -> Self {
        Self::Provider(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgentError::ToolNotFound("Search".to_string());
        assert_eq!(err.to_string(), "Tool not found: Search");

        let err = AgentError::IterationLimit(10);
        assert_eq!(
            err.to_string(),
            "Agent stopped after 10 iterations without a final answer"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let agent_err: AgentError = io_err.into();
        assert!(matches!(agent_err, AgentError::Io(_)));
    }

    #[test]
    fn test_tool_error_display() {
        let err = AgentError::Tool {
            tool: "Search".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Tool 'Search' failed: connection refused");
    }
}
