//! Generate Answer use case.
//!
//! Drafts an answer to a question using only the supplied documents as
//! context. One prompt, one model call, raw text back.

use super::shared::{AgentError, complete_once};
use crate::ports::llm_gateway::LlmGateway;
use std::sync::Arc;
use tracing::info;
use verity_domain::{
    Document, GenerationResult, ModelConfig, PromptTemplate, Question, build_context,
};

/// Drafts answers from retrieved documents.
///
/// Construction validates the [`ModelConfig`], so a missing API key fails
/// here rather than on the first request. The generator holds no mutable
/// state and can be shared across tasks.
#[derive(Clone)]
pub struct AnswerGenerator {
    gateway: Arc<dyn LlmGateway>,
    config: ModelConfig,
}

impl AnswerGenerator {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: ModelConfig) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self { gateway, config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Draft an answer to `question` from `documents`.
    ///
    /// `documents` may be empty; the prompt then carries an empty context
    /// and the model is expected to reply with
    /// [`REFUSAL_PHRASE`](verity_domain::REFUSAL_PHRASE).
    pub async fn generate(
        &self,
        question: &str,
        documents: &[Document],
    ) -> Result<GenerationResult, AgentError> {
        let question = Question::new(question)?;
        let context = build_context(documents);
        let prompt = PromptTemplate::research(question.content(), &context);

        let draft_answer = complete_once(
            self.gateway.as_ref(),
            &self.config,
            &prompt,
            "Error generating answer",
        )
        .await?;

        info!("Generated answer: {}", draft_answer);
        info!("Context used: {}", context);

        Ok(GenerationResult {
            draft_answer,
            context_used: context,
        })
    }
}
