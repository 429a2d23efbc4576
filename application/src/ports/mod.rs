//! Ports (interfaces) for external dependencies
//!
//! Implemented by the infrastructure and presentation layers.

pub mod llm_gateway;
pub mod progress;
