//! Draft and Verify use case
//!
//! Runs the generator, then hands its draft to the verifier over the same
//! documents. The two agents stay independent; this is only the sequencing
//! a caller would otherwise write by hand.

use super::generate_answer::AnswerGenerator;
use super::shared::AgentError;
use super::verify_answer::AnswerVerifier;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use tracing::{debug, info};
use verity_domain::{AnswerReport, Document, Step};

/// Input for the DraftAndVerify use case
#[derive(Debug, Clone)]
pub struct DraftAndVerifyInput {
    pub question: String,
    pub documents: Vec<Document>,
    /// Whether to run the verifier after drafting
    pub verify: bool,
}

impl DraftAndVerifyInput {
    pub fn new(question: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            question: question.into(),
            documents,
            verify: true,
        }
    }

    pub fn without_verification(mut self) -> Self {
        self.verify = false;
        self
    }
}

/// Use case for drafting an answer and checking it
pub struct DraftAndVerifyUseCase {
    generator: AnswerGenerator,
    verifier: AnswerVerifier,
}

impl DraftAndVerifyUseCase {
    pub fn new(generator: AnswerGenerator, verifier: AnswerVerifier) -> Self {
        Self {
            generator,
            verifier,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: DraftAndVerifyInput) -> Result<AnswerReport, AgentError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// A generator failure stops the run before the verifier is called.
    pub async fn execute_with_progress(
        &self,
        input: DraftAndVerifyInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnswerReport, AgentError> {
        info!(
            "Drafting answer from {} document(s)",
            input.documents.len()
        );

        progress.on_step_start(Step::Generate);
        let generation = self
            .generator
            .generate(&input.question, &input.documents)
            .await;
        progress.on_step_complete(Step::Generate, generation.is_ok());
        let generation = generation?;

        let verification = if input.verify {
            progress.on_step_start(Step::Verify);
            let verification = self
                .verifier
                .check(&generation.draft_answer, &input.documents)
                .await;
            progress.on_step_complete(Step::Verify, verification.is_ok());
            Some(verification?)
        } else {
            debug!("Skipping verification");
            None
        };

        Ok(AnswerReport {
            question: input.question,
            generation,
            verification,
        })
    }
}
