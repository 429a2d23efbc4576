//! Infrastructure layer for verity
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and document loading.

pub mod config;
pub mod documents;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileModelsConfig, FileOpenAiConfig, FileOutputConfig,
    FileOutputFormat, FileProvidersConfig,
};
pub use documents::{DocumentLoadError, LocalDocumentLoader};
pub use providers::OpenAiGateway;
