//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use verity_domain::{ApiKey, ConfigIssue, ConfigIssueCode, Severity};

/// OpenAI (or OpenAI-compatible) API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can be overridden for proxies and compatible servers).
    pub base_url: String,
    /// Max tokens per response; provider default when unset.
    pub max_tokens: Option<u32>,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: None,
            timeout_secs: 60,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve the credential from the process environment.
    pub fn resolve_api_key(&self) -> Option<ApiKey> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential: explicit `api_key` first, then the env var.
    ///
    /// Blank values count as unset.
    pub fn resolve_api_key_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<ApiKey> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env(&self.api_key_env).filter(|k| !k.trim().is_empty()))
            .map(ApiKey::from)
    }

    /// A zero timeout would fail every request before it is sent.
    pub(crate) fn timeout_issues(&self) -> Vec<ConfigIssue> {
        if self.timeout_secs > 0 {
            return Vec::new();
        }
        vec![ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::ZeroTimeout {
                field: "timeout_secs".to_string(),
            },
            message: "providers.openai.timeout_secs: must be at least 1".to_string(),
        }]
    }

    pub(crate) fn credential_issues(&self, env: impl Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.api_key.is_some() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::PlaintextApiKey,
                message: format!(
                    "providers.openai.api_key is set in a config file; prefer the {} environment variable",
                    self.api_key_env
                ),
            });
        }
        if self.resolve_api_key_with(env).is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingApiKey {
                    env_var: self.api_key_env.clone(),
                },
                message: format!(
                    "no API key: set {} or providers.openai.api_key",
                    self.api_key_env
                ),
            });
        }
        issues
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_used_when_unset() {
        let config = FileOpenAiConfig::default();
        let key = config
            .resolve_api_key_with(|name| (name == "OPENAI_API_KEY").then(|| "sk-env".to_string()))
            .unwrap();
        assert_eq!(key.expose(), "sk-env");
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-file".to_string()),
            ..Default::default()
        };
        let key = config
            .resolve_api_key_with(|_| Some("sk-env".to_string()))
            .unwrap();
        assert_eq!(key.expose(), "sk-file");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = FileOpenAiConfig {
            api_key: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key_with(|_| Some(String::new())).is_none());
    }

    #[test]
    fn test_custom_env_var_name() {
        let config = FileOpenAiConfig {
            api_key_env: "LOCAL_LLM_KEY".to_string(),
            ..Default::default()
        };
        assert!(config
            .resolve_api_key_with(|name| (name == "OPENAI_API_KEY").then(|| "sk".to_string()))
            .is_none());
        let issues = config.credential_issues(|_| None);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::MissingApiKey {
                env_var: "LOCAL_LLM_KEY".to_string()
            }
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = FileOpenAiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let issues = config.timeout_issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroTimeout {
                field: "timeout_secs".to_string()
            }
        );
        assert!(FileOpenAiConfig::default().timeout_issues().is_empty());
    }

    #[test]
    fn test_plaintext_key_warning() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-file".to_string()),
            ..Default::default()
        };
        let issues = config.credential_issues(|_| None);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::PlaintextApiKey);
    }
}
