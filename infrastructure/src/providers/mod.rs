//! Chat model provider adapters.
//!
//! Each adapter implements the application's [`LlmGateway`] port.
//!
//! [`LlmGateway`]: verity_application::LlmGateway

pub mod openai;

pub use openai::OpenAiGateway;
