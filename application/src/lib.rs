//! Application layer for verity
//!
//! This crate contains the answer generator and verifier use cases, the
//! run that sequences them, and the ports they call. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{ErrorKind, GatewayError, LlmGateway, UpstreamErrorKind};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use use_cases::draft_and_verify::{DraftAndVerifyInput, DraftAndVerifyUseCase};
pub use use_cases::generate_answer::AnswerGenerator;
pub use use_cases::shared::AgentError;
pub use use_cases::verify_answer::AnswerVerifier;
