//! LLM Gateway port
//!
//! Defines the interface for sending a rendered prompt to a chat model.

use async_trait::async_trait;
use thiserror::Error;
use verity_domain::ModelConfig;

/// Coarse classification of a failure, for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid credential or settings
    Configuration,
    /// Network failure, timeout, unexpected HTTP status or unreadable body
    Transport,
    /// The provider answered with an error payload
    Upstream,
    /// Caller passed an unusable question or answer
    InvalidInput,
}

/// Provider-reported failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    RateLimited,
    InvalidRequest,
    Authentication,
    ContentPolicy,
    Server,
    Other,
}

impl std::fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UpstreamErrorKind::RateLimited => "rate limited",
            UpstreamErrorKind::InvalidRequest => "invalid request",
            UpstreamErrorKind::Authentication => "authentication",
            UpstreamErrorKind::ContentPolicy => "content policy",
            UpstreamErrorKind::Server => "server error",
            UpstreamErrorKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Upstream error ({kind}{}): {message}", .status.map(|s| format!(", HTTP {s}")).unwrap_or_default())]
    Upstream {
        kind: UpstreamErrorKind,
        status: Option<u16>,
        message: String,
    },
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Configuration(_) => ErrorKind::Configuration,
            GatewayError::ConnectionError(_)
            | GatewayError::Timeout
            | GatewayError::HttpStatus { .. }
            | GatewayError::MalformedResponse(_) => ErrorKind::Transport,
            GatewayError::Upstream { .. } => ErrorKind::Upstream,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches a chat model.
/// Implementations (adapters) live in the infrastructure layer and must be
/// safe to call concurrently.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `prompt` as a single user message and return the completion text.
    ///
    /// Exactly one request per call. Implementations do not retry.
    async fn complete(&self, config: &ModelConfig, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GatewayError::Configuration("bad header".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(GatewayError::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(
            GatewayError::HttpStatus {
                status: 502,
                body: String::new()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            GatewayError::Upstream {
                kind: UpstreamErrorKind::RateLimited,
                status: Some(429),
                message: "slow down".into()
            }
            .kind(),
            ErrorKind::Upstream
        );
    }

    #[test]
    fn test_upstream_display() {
        let err = GatewayError::Upstream {
            kind: UpstreamErrorKind::RateLimited,
            status: Some(429),
            message: "Rate limit reached".into(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream error (rate limited, HTTP 429): Rate limit reached"
        );

        let err = GatewayError::Upstream {
            kind: UpstreamErrorKind::ContentPolicy,
            status: None,
            message: "flagged".into(),
        };
        assert_eq!(err.to_string(), "Upstream error (content policy): flagged");
    }
}
