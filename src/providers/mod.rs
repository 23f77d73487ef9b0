pub mod error;
pub mod http;
pub mod mock;
pub mod openai;
pub mod types;

pub use error::ProviderError;
pub use openai::OpenAiProvider;
pub use types::ApiKey;
