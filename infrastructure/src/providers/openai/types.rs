//! Wire types for the Chat Completions API and their conversion to
//! gateway results.

use serde::{Deserialize, Serialize};
use verity_application::{GatewayError, UpstreamErrorKind};
use verity_domain::core::string::truncate;

/// Longest slice of an unparseable body kept in an error message.
const MAX_ERROR_BODY: usize = 500;

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// A single user turn carrying the whole rendered prompt.
    pub fn single_prompt(
        model: &'a str,
        temperature: f32,
        prompt: &'a str,
        max_tokens: Option<u32>,
    ) -> Self {
        Self {
            model,
            temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

// ─── Response → gateway result ───────────────────────────────────

/// Extract the completion text from a 2xx response body.
pub fn extract_completion(body: &str) -> Result<String, GatewayError> {
    let response: ChatCompletionResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            // Some proxies return an error envelope with a 200 status.
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
                return Err(upstream_from_envelope(None, envelope.error));
            }
            return Err(GatewayError::MalformedResponse(format!(
                "{}: {}",
                e,
                truncate(body, MAX_ERROR_BODY)
            )));
        }
    };

    let choice = response.choices.into_iter().next().ok_or_else(|| {
        GatewayError::MalformedResponse("response contained no choices".to_string())
    })?;

    if let Some(refusal) = choice.message.refusal {
        return Err(GatewayError::Upstream {
            kind: UpstreamErrorKind::ContentPolicy,
            status: None,
            message: refusal,
        });
    }
    if choice.finish_reason.as_deref() == Some("content_filter") {
        return Err(GatewayError::Upstream {
            kind: UpstreamErrorKind::ContentPolicy,
            status: None,
            message: "completion was stopped by the content filter".to_string(),
        });
    }

    choice.message.content.ok_or_else(|| {
        GatewayError::MalformedResponse("choice carried no message content".to_string())
    })
}

/// Convert a non-2xx response into a gateway error.
///
/// Bodies carrying the provider's `{"error": {...}}` envelope become
/// [`GatewayError::Upstream`]; anything else is a transport-level
/// [`GatewayError::HttpStatus`].
pub fn convert_error_response(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => upstream_from_envelope(Some(status), envelope.error),
        Err(_) => GatewayError::HttpStatus {
            status,
            body: truncate(body, MAX_ERROR_BODY),
        },
    }
}

fn upstream_from_envelope(status: Option<u16>, error: ErrorBody) -> GatewayError {
    GatewayError::Upstream {
        kind: classify(status, error.kind.as_deref(), error.code.as_deref()),
        status,
        message: error.message,
    }
}

fn classify(status: Option<u16>, kind: Option<&str>, code: Option<&str>) -> UpstreamErrorKind {
    let labels = [kind, code];
    let has = |needle: &str| labels.iter().flatten().any(|l| l.contains(needle));

    if has("content_policy") || has("content_filter") {
        return UpstreamErrorKind::ContentPolicy;
    }
    if has("rate_limit") || has("insufficient_quota") {
        return UpstreamErrorKind::RateLimited;
    }
    if has("invalid_api_key") || has("authentication") {
        return UpstreamErrorKind::Authentication;
    }
    if has("server_error") {
        return UpstreamErrorKind::Server;
    }

    match status {
        Some(429) => UpstreamErrorKind::RateLimited,
        Some(401) | Some(403) => UpstreamErrorKind::Authentication,
        Some(400..=499) => UpstreamErrorKind::InvalidRequest,
        Some(500..=599) => UpstreamErrorKind::Server,
        _ if has("invalid_request") => UpstreamErrorKind::InvalidRequest,
        _ => UpstreamErrorKind::Other,
    }
}

/// Map a reqwest failure onto the gateway's error taxonomy.
pub fn convert_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_builder() {
        GatewayError::Configuration(format!("could not build request: {}", err))
    } else if err.is_decode() || err.is_body() {
        GatewayError::MalformedResponse(err.to_string())
    } else {
        GatewayError::ConnectionError(err.to_string())
    }
}
