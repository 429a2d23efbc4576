//! OpenAI Chat Completions provider
//!
//! Talks to `POST {base_url}/v1/chat/completions` with bearer
//! authentication. Works with any server exposing the same API.

mod gateway;
mod types;

pub use gateway::OpenAiGateway;
