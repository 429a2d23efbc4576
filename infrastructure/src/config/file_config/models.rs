//! Per-agent model configuration from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use verity_domain::agent::model_config::MAX_TEMPERATURE;
use verity_domain::{
    ApiKey, ConfigIssue, ConfigIssueCode, GENERATOR_TEMPERATURE, Model, ModelConfig, Severity,
    VERIFIER_TEMPERATURE,
};

/// Per-agent model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// generator = "gpt-4-turbo"      # Drafts answers
/// verifier = "gpt-4o"            # Checks answers
/// generator_temperature = 0.3
/// verifier_temperature = 0.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for drafting answers
    pub generator: Option<String>,
    /// Model for verifying answers
    pub verifier: Option<String>,
    /// Sampling temperature for drafting (default 0.3)
    pub generator_temperature: Option<f32>,
    /// Sampling temperature for verification (default 0.0)
    pub verifier_temperature: Option<f32>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        match value {
            None => (None, issues),
            Some(s) if s.trim().is_empty() => {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    message: format!("models.{}: model name cannot be empty", field),
                });
                (None, issues)
            }
            // Unknown names become Model::Custom
            Some(s) => (Some(Model::from(s.trim())), issues),
        }
    }

    pub fn parse_generator(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("generator", self.generator.as_ref())
    }

    pub fn parse_verifier(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("verifier", self.verifier.as_ref())
    }

    /// Report temperatures the provider would reject.
    pub fn temperature_issues(&self) -> Vec<ConfigIssue> {
        [
            ("generator_temperature", self.generator_temperature),
            ("verifier_temperature", self.verifier_temperature),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            let value = value?;
            if value.is_finite() && (0.0..=MAX_TEMPERATURE).contains(&value) {
                return None;
            }
            Some(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::TemperatureOutOfRange {
                    field: field.to_string(),
                    value,
                },
                message: format!(
                    "models.{}: {} is outside 0.0..={}",
                    field, value, MAX_TEMPERATURE
                ),
            })
        })
        .collect()
    }

    /// Generator settings: configured values over built-in defaults.
    pub fn generator_config(&self, api_key: ApiKey) -> ModelConfig {
        ModelConfig::new(
            self.parse_generator().0.unwrap_or_default(),
            self.generator_temperature.unwrap_or(GENERATOR_TEMPERATURE),
            api_key,
        )
    }

    /// Verifier settings: configured values over built-in defaults.
    pub fn verifier_config(&self, api_key: ApiKey) -> ModelConfig {
        ModelConfig::new(
            self.parse_verifier().0.unwrap_or_default(),
            self.verifier_temperature.unwrap_or(VERIFIER_TEMPERATURE),
            api_key,
        )
    }
}
