//! Verify Answer use case.
//!
//! Asks the model to judge a candidate answer against the supplied
//! documents. The report comes back as raw text; structured parsing is left
//! to [`VerificationReport::parse`](verity_domain::VerificationReport::parse).

use super::shared::{AgentError, complete_once};
use crate::ports::llm_gateway::LlmGateway;
use std::sync::Arc;
use tracing::info;
use verity_domain::core::string::is_blank;
use verity_domain::{Document, DomainError, ModelConfig, PromptTemplate, VerificationResult, build_context};

/// Checks answers against retrieved documents.
#[derive(Clone)]
pub struct AnswerVerifier {
    gateway: Arc<dyn LlmGateway>,
    config: ModelConfig,
}

impl AnswerVerifier {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: ModelConfig) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self { gateway, config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Verify `answer` against `documents`, returning the unparsed report.
    pub async fn check(
        &self,
        answer: &str,
        documents: &[Document],
    ) -> Result<VerificationResult, AgentError> {
        if is_blank(answer) {
            return Err(DomainError::InvalidAnswer("answer cannot be empty".to_string()).into());
        }
        let context = build_context(documents);
        let prompt = PromptTemplate::verification(answer, &context);

        let verification_report = complete_once(
            self.gateway.as_ref(),
            &self.config,
            &prompt,
            "Error verifying answer",
        )
        .await?;

        info!("Verification report: {}", verification_report);
        info!("Context used: {}", context);

        Ok(VerificationResult {
            verification_report,
            context_used: context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{ErrorKind, GatewayError};
    use crate::use_cases::test_support::{CapturedLogs, StubGateway};
    use tracing::Level;
    use verity_domain::VerificationReport;

    const REPORT: &str =
        "Supported: YES\nUnsupported Claims: []\nContradictions: []\nRelevant: YES";

    fn verifier(gateway: Arc<StubGateway>) -> AnswerVerifier {
        AnswerVerifier::new(gateway, ModelConfig::verifier("sk-test")).unwrap()
    }

    #[tokio::test]
    async fn test_report_returned_verbatim() {
        let gateway = StubGateway::replying(REPORT);
        let result = verifier(gateway.clone())
            .check("Paris.", &[Document::new("Paris is the capital of France.")])
            .await
            .unwrap();

        assert_eq!(result.verification_report, REPORT);
        assert_eq!(result.context_used, "Paris is the capital of France.");
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_prompt_carries_four_axis_layout() {
        let gateway = StubGateway::replying(REPORT);
        verifier(gateway.clone())
            .check("Paris.", &[Document::new("a"), Document::new("b")])
            .await
            .unwrap();

        let prompt = &gateway.calls()[0].prompt;
        assert!(prompt.contains(
            "Supported: YES/NO\nUnsupported Claims: [items]\nContradictions: [items]\nRelevant: YES/NO"
        ));
        assert!(prompt.contains("Answer: Paris.\nContext: a\n\nb"));
    }

    #[tokio::test]
    async fn test_uses_deterministic_sampling() {
        let gateway = StubGateway::replying(REPORT);
        verifier(gateway.clone()).check("x", &[]).await.unwrap();

        assert_eq!(gateway.calls()[0].temperature, 0.0);
    }

    #[tokio::test]
    async fn test_empty_documents() {
        let gateway = StubGateway::replying("Supported: NO\nUnsupported Claims: [x]\nContradictions: []\nRelevant: NO");
        let result = verifier(gateway.clone()).check("x", &[]).await.unwrap();

        assert_eq!(result.context_used, "");
        assert!(gateway.calls()[0].prompt.ends_with("Context: "));
    }

    #[tokio::test]
    async fn test_unstructured_reply_not_rejected() {
        let gateway = StubGateway::replying("Looks fine to me.");
        let result = verifier(gateway).check("x", &[]).await.unwrap();

        assert_eq!(result.verification_report, "Looks fine to me.");
        assert!(VerificationReport::parse(&result.verification_report).is_none());
    }

    #[tokio::test]
    async fn test_success_logs() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        verifier(StubGateway::replying(REPORT))
            .check("Paris.", &[Document::new("ctx")])
            .await
            .unwrap();

        let info = logs.messages_at(Level::INFO);
        assert_eq!(info.len(), 2);
        assert_eq!(info[0], format!("Verification report: {}", REPORT));
        assert_eq!(info[1], "Context used: ctx");
    }

    #[tokio::test]
    async fn test_failure_propagates_unchanged() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let failure = GatewayError::ConnectionError("connection refused".to_string());
        let gateway = StubGateway::failing(failure.clone());
        let err = verifier(gateway.clone())
            .check("Paris.", &[Document::new("ctx")])
            .await
            .unwrap_err();

        assert_eq!(err, AgentError::Gateway(failure));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(gateway.calls().len(), 1);
        assert!(logs.messages_at(Level::INFO).is_empty());
        assert_eq!(
            logs.messages_at(Level::ERROR),
            vec!["Error verifying answer: Connection error: connection refused".to_string()]
        );
    }

    #[tokio::test]
    async fn test_blank_answer_rejected_without_call() {
        let gateway = StubGateway::replying(REPORT);
        let err = verifier(gateway.clone()).check("\n", &[]).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn test_invalid_temperature_fails_at_construction() {
        let config = ModelConfig::verifier("sk-test").with_temperature(5.0);
        let err = AnswerVerifier::new(StubGateway::replying(REPORT), config)
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
