pub mod convert;
pub mod types;

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::Result;
use crate::core::llm::LanguageModel;
use crate::core::types::{CompletionRequest, CompletionResponse};
use crate::providers::error::ProviderError;
use crate::providers::http::{AuthScheme, HttpClient, HttpConfig};
use crate::providers::types::{ApiKey, BaseUrl, ModelId};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

#[derive(Clone)]
pub struct OpenAiProvider {
    http: HttpClient,
    auth: AuthScheme,
    model: ModelId,
    base_url: BaseUrl,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiProvider {
    pub fn new(api_key: ApiKey) -> std::result::Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new()?,
            auth: AuthScheme::bearer(api_key),
            model: ModelId::new(DEFAULT_MODEL),
            base_url: BaseUrl::new(DEFAULT_BASE_URL),
        })
    }

    pub fn from_env() -> std::result::Result<Self, ProviderError> {
        let api_key = ApiKey::from_env(API_KEY_ENV_VAR)?;
        Self::new(api_key)
    }

    pub fn with_http_config(
        api_key: ApiKey,
        http_config: HttpConfig,
    ) -> std::result::Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::with_config(http_config)?,
            auth: AuthScheme::bearer(api_key),
            model: ModelId::new(DEFAULT_MODEL),
            base_url: BaseUrl::new(DEFAULT_BASE_URL),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<BaseUrl>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn parse_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
        ProviderError::from_status(status.as_u16(), body, API_KEY_ENV_VAR)
    }
}

#[async_trait]
impl LanguageModel for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_request = convert::to_api_request(&self.model, &request);
        let url = self.base_url.join("/v1/chat/completions");

        debug!(model = %self.model, messages = request.messages.len(), "sending completion");

        let body =
            serde_json::to_string(&api_request).map_err(crate::core::error::AgentError::Json)?;

        let response = self
            .http
            .post(&url, &self.auth)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &error_body).into());
        }

        let api_response: types::ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(convert::from_api_response(api_response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let provider = OpenAiProvider::new(ApiKey::new("test-key")).unwrap();
        assert_eq!(provider.model(), "gpt-4o-mini");
        assert_eq!(provider.base_url.as_str(), "https://api.openai.com");
    }

    #[test]
    fn test_provider_with_model() {
        let provider = OpenAiProvider::new(ApiKey::new("test-key"))
            .unwrap()
            .with_model("gpt-4.1");

        assert_eq!(provider.model(), "gpt-4.1");
    }

    #[test]
    fn test_provider_debug_hides_key() {
        let provider = OpenAiProvider::new(ApiKey::new("secret-key-value")).unwrap();
        let debug = format!("{provider:?}");
        assert!(debug.contains("OpenAiProvider"));
        assert!(!debug.contains("secret-key-value"));
    }

    #[test]
    fn test_parse_error_401() {
        let body = r#"{"error": {"message": "Invalid API key"}}"#;
        let err = OpenAiProvider::parse_error(reqwest::StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, ProviderError::Authentication { .. }));
    }

    #[test]
    fn test_parse_error_429() {
        let body = r#"{"error": {"message": "Rate limit exceeded"}}"#;
        let err = OpenAiProvider::parse_error(reqwest::StatusCode::TOO_MANY_REQUESTS, body);
        assert!(matches!(err, ProviderError::RateLimit { .. }));
    }
}
