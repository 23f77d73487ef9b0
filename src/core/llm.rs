use async_trait::async_trait;

use super::error::Result;
use super::types::{CompletionRequest, CompletionResponse};

#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;
    fn model(&self) -> &str;
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
