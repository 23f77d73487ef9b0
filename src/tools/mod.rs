use async_trait::async_trait;

use crate::core::error::Result;

pub mod registry;
pub mod search;

pub use registry::ToolRegistry;
pub use search::GoogleSearchTool;

/// Input is the raw `Action Input:` text; output becomes the observation.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn invoke(&self, input: &str) -> Result<String>;
}
