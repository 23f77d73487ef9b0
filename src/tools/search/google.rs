use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::core::error::Result;
use crate::providers::error::ProviderError;
use crate::providers::http::{AuthScheme, HttpClient};
use crate::providers::types::{ApiKey, BaseUrl};
use crate::tools::Tool;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const SEARCH_PATH: &str = "/customsearch/v1";
const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";
const ENGINE_ID_ENV_VAR: &str = "GOOGLE_CSE_ID";

const TOOL_NAME: &str = "Search";
const TOOL_DESCRIPTION: &str = "useful for when you need to answer questions about current events";

const NO_RESULT_MESSAGE: &str = "No good Google Search result was found";
const DEFAULT_RESULT_COUNT: u32 = 10;

/// Web search over the Google Custom Search JSON API. The observation is
/// the concatenated snippets of the top results.
#[derive(Clone)]
pub struct GoogleSearchTool {
    http: HttpClient,
    auth: AuthScheme,
    engine_id: String,
    base_url: BaseUrl,
    result_count: u32,
}

impl std::fmt::Debug for GoogleSearchTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSearchTool")
            .field("engine_id", &self.engine_id)
            .field("base_url", &self.base_url)
            .field("result_count", &self.result_count)
            .finish_non_exhaustive()
    }
}

impl GoogleSearchTool {
    pub fn new(
        api_key: ApiKey,
        engine_id: impl Into<String>,
    ) -> std::result::Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new()?,
            auth: AuthScheme::query_param("key", api_key),
            engine_id: engine_id.into(),
            base_url: BaseUrl::new(DEFAULT_BASE_URL),
            result_count: DEFAULT_RESULT_COUNT,
        })
    }

    pub fn from_env() -> std::result::Result<Self, ProviderError> {
        let api_key = ApiKey::from_env(API_KEY_ENV_VAR)?;
        let engine_id = std::env::var(ENGINE_ID_ENV_VAR).map_err(|_| {
            ProviderError::Configuration(format!(
                "Environment variable {ENGINE_ID_ENV_VAR} not set"
            ))
        })?;
        Self::new(api_key, engine_id)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<BaseUrl>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_result_count(mut self, count: u32) -> Self {
        self.result_count = count;
        self
    }

    async fn search(&self, query: &str) -> std::result::Result<Vec<SearchItem>, ProviderError> {
        let url = self.base_url.join(SEARCH_PATH);
        let num = self.result_count.to_string();

        debug!(%query, "searching");

        let response = self
            .http
            .get(&url, &self.auth)
            .query(&[
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                status.as_u16(),
                &error_body,
                API_KEY_ENV_VAR,
            ));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        debug!(results = results.items.len(), "search finished");

        Ok(results.items)
    }

    fn format_results(items: &[SearchItem]) -> String {
        let snippets: Vec<&str> = items
            .iter()
            .filter_map(|item| item.snippet.as_deref())
            .collect();

        if snippets.is_empty() {
            NO_RESULT_MESSAGE.to_string()
        } else {
            snippets.join(" ")
        }
    }
}

#[async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        let query = input.trim();
        if query.is_empty() {
            return Err(ProviderError::InvalidRequest("search query is empty".to_string()).into());
        }

        let items = self.search(query).await?;
        Ok(Self::format_results(&items))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchItem {
    #[allow(dead_code)]
    title: String,
    #[allow(dead_code)]
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}
