//! OpenAI gateway implementation

use super::types::{self, ChatCompletionRequest};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use verity_application::{GatewayError, LlmGateway};
use verity_domain::ModelConfig;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// [`LlmGateway`] backed by the OpenAI Chat Completions API.
///
/// The credential comes from the [`ModelConfig`] on each call, so one
/// gateway can serve agents configured with different keys. The inner
/// `reqwest::Client` pools connections and is safe to share.
#[derive(Debug, Clone)]
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    max_tokens: Option<u32>,
}

impl OpenAiGateway {
    /// Create a gateway for `base_url` with a whole-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let endpoint = Self::endpoint_for(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            max_tokens: None,
        })
    }

    /// Create a gateway from the `[providers.openai]` section.
    pub fn from_config(config: &FileOpenAiConfig) -> Result<Self, GatewayError> {
        Ok(Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))?
            .with_max_tokens(config.max_tokens))
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn endpoint_for(base_url: &str) -> Result<reqwest::Url, GatewayError> {
        let base = base_url.trim().trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        reqwest::Url::parse(&format!("{}{}", base, COMPLETIONS_PATH)).map_err(|e| {
            GatewayError::Configuration(format!("invalid base URL '{}': {}", base_url, e))
        })
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, config: &ModelConfig, prompt: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest::single_prompt(
            config.model_name(),
            config.temperature,
            prompt,
            self.max_tokens,
        );

        debug!(
            endpoint = %self.endpoint,
            model = config.model_name(),
            "Calling Chat Completions API"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(config.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(types::convert_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(types::convert_send_error)?;

        debug!(status = status.as_u16(), bytes = body.len(), "Chat Completions response");

        if !status.is_success() {
            return Err(types::convert_error_response(status.as_u16(), &body));
        }
        types::extract_completion(&body)
    }
}
