//! Per-agent model configuration.
//!
//! [`ModelConfig`] bundles the model name, sampling temperature and API
//! credential an agent sends with every request. It is a static value
//! object: built once when the agent is constructed, never mutated.

use crate::core::error::DomainError;
use crate::core::model::Model;

/// Sampling temperature for answer drafting.
pub const GENERATOR_TEMPERATURE: f32 = 0.3;

/// Sampling temperature for verification (fully deterministic).
pub const VERIFIER_TEMPERATURE: f32 = 0.0;

/// Upper bound accepted by OpenAI-compatible chat endpoints.
pub const MAX_TEMPERATURE: f32 = 2.0;

/// API credential.
///
/// `Debug` and `Display` are redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw secret, for building the Authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        ApiKey(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        ApiKey(s.to_string())
    }
}

/// Model settings for a single agent.
///
/// # Example
///
/// ```
/// use verity_domain::agent::model_config::ModelConfig;
/// use verity_domain::Model;
///
/// let config = ModelConfig::verifier("sk-test").with_model(Model::Gpt4o);
///
/// assert_eq!(config.temperature, 0.0);
/// assert_eq!(config.model, Model::Gpt4o);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model: Model,
    pub temperature: f32,
    pub api_key: ApiKey,
}

impl ModelConfig {
    pub fn new(model: Model, temperature: f32, api_key: impl Into<ApiKey>) -> Self {
        Self {
            model,
            temperature,
            api_key: api_key.into(),
        }
    }

    /// Default settings for the answer generator (gpt-4-turbo, 0.3)
    pub fn generator(api_key: impl Into<ApiKey>) -> Self {
        Self::new(Model::default(), GENERATOR_TEMPERATURE, api_key)
    }

    /// Default settings for the answer verifier (gpt-4-turbo, 0.0)
    pub fn verifier(api_key: impl Into<ApiKey>) -> Self {
        Self::new(Model::default(), VERIFIER_TEMPERATURE, api_key)
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// The model identifier sent on the wire
    pub fn model_name(&self) -> &str {
        self.model.as_str()
    }

    /// Check the settings an agent needs before it can make any call.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.api_key.is_blank() {
            return Err(DomainError::MissingApiKey);
        }
        if self.model.as_str().trim().is_empty() {
            return Err(DomainError::InvalidModel(
                "model name cannot be empty".to_string(),
            ));
        }
        if !self.temperature.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&self.temperature)
        {
            return Err(DomainError::InvalidTemperature(self.temperature));
        }
        Ok(())
    }
}
