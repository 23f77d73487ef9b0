use reqwest_middleware::RequestBuilder;

use crate::providers::types::ApiKey;

/// Bearer header for the model provider, query parameter for the search
/// API.
#[derive(Clone)]
pub enum AuthScheme {
    Bearer(ApiKey),
    QueryParam {
        param: &'static str,
        key: ApiKey,
    },
    None,
}

impl AuthScheme {
    #[must_use]
    pub const fn bearer(key: ApiKey) -> Self {
        Self::Bearer(key)
    }

    #[must_use]
    pub const fn query_param(param: &'static str, key: ApiKey) -> Self {
        Self::QueryParam { param, key }
    }

    #[must_use]
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer(key) => {
                request.header("Authorization", format!("Bearer {}", key.as_str()))
            }
            Self::QueryParam { param, key } => request.query(&[(*param, key.as_str())]),
            Self::None => request,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        match self {
            Self::Bearer(key) | Self::QueryParam { key, .. } => !key.is_empty(),
            Self::None => true,
        }
    }
}

impl std::fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(key) => f.debug_tuple("Bearer").field(key).finish(),
            Self::QueryParam { param, key } => f
                .debug_struct("QueryParam")
                .field("param", param)
                .field("key", key)
                .finish(),
            Self::None => write!(f, "None"),
        }
    }
}
