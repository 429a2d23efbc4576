//! Domain layer for verity
//!
//! This crate contains the documents, prompt templates, model settings and
//! result records shared by both agents. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Context**: document contents joined with a blank line, in input order
//! - **Draft answer**: the model's first-pass answer to a question, given context
//! - **Verification report**: the model's judgment of a draft answer against
//!   the same context

pub mod agent;
pub mod config;
pub mod core;
pub mod document;
pub mod prompt;
pub mod verification;

// Re-export commonly used types
pub use agent::{
    model_config::{ApiKey, GENERATOR_TEMPERATURE, ModelConfig, VERIFIER_TEMPERATURE},
    results::{AnswerReport, GenerationResult, VerificationResult},
    step::Step,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, question::Question};
pub use document::{CONTEXT_SEPARATOR, Document, build_context};
pub use prompt::{PromptTemplate, REFUSAL_PHRASE, VERIFICATION_FORMAT, render};
pub use verification::VerificationReport;
