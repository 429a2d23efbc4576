//! Steps of a draft-then-verify run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One model call in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Generate,
    Verify,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Generate => "generate",
            Step::Verify => "verify",
        }
    }

    /// Human-readable label for progress display
    pub fn display_name(&self) -> &'static str {
        match self {
            Step::Generate => "Drafting answer",
            Step::Verify => "Verifying answer",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_names() {
        assert_eq!(Step::Generate.to_string(), "generate");
        assert_eq!(Step::Verify.as_str(), "verify");
        assert_eq!(serde_json::to_string(&Step::Verify).unwrap(), "\"verify\"");
    }
}
