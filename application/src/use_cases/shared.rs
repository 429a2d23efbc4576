//! Error type and model invocation shared by both agents.

use crate::ports::llm_gateway::{ErrorKind, GatewayError, LlmGateway};
use thiserror::Error;
use tracing::{debug, error};
use verity_domain::{DomainError, ModelConfig};

/// Errors returned by the agents.
///
/// Gateway failures are passed through unchanged so callers can match on the
/// exact transport or upstream condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Configuration(DomainError),

    #[error("Invalid input: {0}")]
    InvalidInput(DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AgentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgentError::Configuration(_) => ErrorKind::Configuration,
            AgentError::InvalidInput(_) => ErrorKind::InvalidInput,
            AgentError::Gateway(e) => e.kind(),
        }
    }
}

impl From<DomainError> for AgentError {
    fn from(e: DomainError) -> Self {
        if e.is_configuration() {
            AgentError::Configuration(e)
        } else {
            AgentError::InvalidInput(e)
        }
    }
}

/// Send one prompt, logging a failure once at error level.
pub(crate) async fn complete_once(
    gateway: &dyn LlmGateway,
    config: &ModelConfig,
    prompt: &str,
    failure: &str,
) -> Result<String, AgentError> {
    debug!(
        model = %config.model,
        temperature = config.temperature,
        prompt_len = prompt.len(),
        "Invoking chat model"
    );
    gateway.complete(config, prompt).await.map_err(|e| {
        error!("{}: {}", failure, e);
        AgentError::Gateway(e)
    })
}
