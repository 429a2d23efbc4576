//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod models;
mod output;
mod providers;

pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};
use verity_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection and sampling per agent
    pub models: FileModelsConfig,
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Empty model names
    /// 2. Temperatures outside `0.0..=2.0`
    /// 3. Credentials (missing key, key written in plain text)
    /// 4. A zero request timeout
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.validate_with_env(|name| std::env::var(name).ok())
    }

    /// [`validate`](Self::validate) with an explicit environment lookup.
    pub fn validate_with_env(&self, env: impl Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_generator().1);
        issues.extend(self.models.parse_verifier().1);
        issues.extend(self.models.temperature_issues());
        issues.extend(self.providers.openai.credential_issues(env));
        issues.extend(self.providers.openai.timeout_issues());

        issues
    }
}
