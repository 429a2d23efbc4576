//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid temperature {0}: must be within 0.0..=2.0")]
    InvalidTemperature(f32),
}

impl DomainError {
    /// Whether this error comes from configuration rather than caller input
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::MissingApiKey
                | DomainError::InvalidModel(_)
                | DomainError::InvalidTemperature(_)
        )
    }
}
