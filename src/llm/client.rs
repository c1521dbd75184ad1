use crate::error::Result;
use crate::llm::types::{CompletionRequest, CompletionResponse};
use async_trait::async_trait;

/// A text-completion service: submit a prompt, get back ranked candidates.
///
/// Implementations must map transport, authentication and quota failures to
/// [`crate::AdvisorError::ServiceUnavailable`].
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    fn name(&self) -> &str;
}

#[cfg(feature = "openai")]
pub use openai::{OpenAiClient, OpenAiConfig};

#[cfg(feature = "openai")]
mod openai {
    use super::CompletionService;
    use crate::error::{AdvisorError, Result};
    use crate::llm::types::{
        ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionRequest,
        CompletionResponse,
    };
    use async_trait::async_trait;
    use log::debug;
    use reqwest::Client;
    use std::time::Duration;

    const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
    const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
    const DEFAULT_TIMEOUT_SECS: u64 = 120;

    #[derive(Debug, Clone)]
    pub struct OpenAiConfig {
        pub api_key: String,
        /// Base URL of an OpenAI-compatible API
        pub api_base: String,
        pub model: String,
        pub timeout_secs: u64,
    }

    impl OpenAiConfig {
        pub fn new(api_key: impl Into<String>) -> Self {
            Self {
                api_key: api_key.into(),
                api_base: DEFAULT_API_BASE.to_string(),
                model: DEFAULT_MODEL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            }
        }

        /// Reads `OPENAI_API_KEY`, plus the optional `OPENAI_API_BASE` and `OPENAI_MODEL`.
        pub fn from_env() -> Result<Self> {
            let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
                AdvisorError::Configuration(
                    "OPENAI_API_KEY environment variable not set".to_string(),
                )
            })?;

            let mut config = Self::new(api_key);
            if let Ok(api_base) = std::env::var("OPENAI_API_BASE") {
                config.api_base = api_base;
            }
            if let Ok(model) = std::env::var("OPENAI_MODEL") {
                config.model = model;
            }
            Ok(config)
        }

        pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
            self.api_base = api_base.into();
            self
        }

        pub fn with_model(mut self, model: impl Into<String>) -> Self {
            self.model = model.into();
            self
        }

        pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
            self.timeout_secs = timeout_secs;
            self
        }
    }

    /// Client for the `/chat/completions` endpoint of an OpenAI-compatible API.
    #[derive(Clone)]
    pub struct OpenAiClient {
        client: Client,
        config: OpenAiConfig,
    }

    impl OpenAiClient {
        pub fn new(api_key: impl Into<String>) -> Result<Self> {
            Self::with_config(OpenAiConfig::new(api_key))
        }

        pub fn from_env() -> Result<Self> {
            Self::with_config(OpenAiConfig::from_env()?)
        }

        pub fn with_config(config: OpenAiConfig) -> Result<Self> {
            if config.api_key.trim().is_empty() {
                return Err(AdvisorError::Configuration(
                    "API key must not be empty".to_string(),
                ));
            }

            let client = Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .map_err(|e| {
                    AdvisorError::Configuration(format!("Failed to build HTTP client: {}", e))
                })?;

            Ok(Self { client, config })
        }

        pub fn config(&self) -> &OpenAiConfig {
            &self.config
        }

        fn endpoint(&self) -> String {
            format!(
                "{}/chat/completions",
                self.config.api_base.trim_end_matches('/')
            )
        }
    }

    #[async_trait]
    impl CompletionService for OpenAiClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
            let payload = ChatCompletionRequest {
                model: self.config.model.clone(),
                messages: vec![ChatMessage::user(request.prompt.clone())],
                max_tokens: request.max_tokens,
                temperature: request.temperature,
            };

            debug!(
                "Sending completion request to {} (model {}, max_tokens {})",
                self.config.api_base, self.config.model, request.max_tokens
            );

            let res = self
                .client
                .post(self.endpoint())
                .bearer_auth(&self.config.api_key)
                .json(&payload)
                .send()
                .await
                .map_err(|e| AdvisorError::ServiceUnavailable(e.to_string()))?;

            let status = res.status();
            if !status.is_success() {
                let err_text = res.text().await.unwrap_or_default();
                return Err(AdvisorError::ServiceUnavailable(format!(
                    "Completion API error (status {}): {}",
                    status, err_text
                )));
            }

            let body: ChatCompletionResponse = res.json().await.map_err(|e| {
                AdvisorError::ServiceUnavailable(format!("Malformed completion response: {}", e))
            })?;

            Ok(body.into())
        }

        fn name(&self) -> &str {
            "openai"
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_empty_api_key_is_rejected() {
            assert!(matches!(
                OpenAiClient::new("  "),
                Err(AdvisorError::Configuration(_))
            ));
        }

        #[test]
        fn test_endpoint_joins_base_url() {
            let config = OpenAiConfig::new("sk-test").with_api_base("http://localhost:8000/v1/");
            let client = OpenAiClient::with_config(config).unwrap();
            assert_eq!(client.endpoint(), "http://localhost:8000/v1/chat/completions");
        }

        #[tokio::test]
        async fn test_unreachable_endpoint_is_service_unavailable() {
            let config = OpenAiConfig::new("sk-test")
                .with_api_base("http://127.0.0.1:9")
                .with_timeout(5);
            let client = OpenAiClient::with_config(config).unwrap();

            let result = client
                .complete(&CompletionRequest::new("Any advice?", 16))
                .await;
            assert!(matches!(result, Err(AdvisorError::ServiceUnavailable(_))));
        }
    }
}
