//! Configuration issues detected while reading settings.
//!
//! Loaders collect every problem they find instead of stopping at the first,
//! so the CLI can report them all at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A model field was set to an empty string.
    EmptyModelName { field: String },
    /// A temperature outside `0.0..=2.0`.
    TemperatureOutOfRange { field: String, value: f32 },
    /// Neither `api_key` nor the configured environment variable is set.
    MissingApiKey { env_var: String },
    /// `api_key` is written directly in a config file.
    PlaintextApiKey,
    /// A request timeout of zero seconds.
    ZeroTimeout { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
