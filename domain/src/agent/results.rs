//! Result records returned by the agents.

use serde::{Deserialize, Serialize};

/// Output of the answer generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Model response, verbatim
    pub draft_answer: String,
    /// Joined document contents the model was given
    pub context_used: String,
}

/// Output of the answer verifier.
///
/// The report is the raw model text. Use
/// [`VerificationReport::parse`](crate::verification::VerificationReport::parse)
/// when structured fields are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verification_report: String,
    pub context_used: String,
}

/// Everything a draft-then-verify run produced.
///
/// `verification` is `None` when verification was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerReport {
    pub question: String,
    pub generation: GenerationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationResult>,
}

impl AnswerReport {
    pub fn draft_answer(&self) -> &str {
        &self.generation.draft_answer
    }

    pub fn is_verified(&self) -> bool {
        self.verification.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_result_json_shape() {
        let result = GenerationResult {
            draft_answer: "Paris.".to_string(),
            context_used: "Paris is the capital of France.".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["draft_answer"], "Paris.");
        assert_eq!(value["context_used"], "Paris is the capital of France.");
    }

    #[test]
    fn test_verification_result_json_shape() {
        let result = VerificationResult {
            verification_report: "Supported: YES".to_string(),
            context_used: String::new(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["verification_report"], "Supported: YES");
        assert_eq!(value["context_used"], "");
    }

    #[test]
    fn test_answer_report_skips_missing_verification() {
        let report = AnswerReport {
            question: "What is the capital of France?".to_string(),
            generation: GenerationResult {
                draft_answer: "Paris.".to_string(),
                context_used: "Paris is the capital of France.".to_string(),
            },
            verification: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["generation"]["draft_answer"], "Paris.");
        assert!(value.get("verification").is_none());
        assert!(!report.is_verified());
        assert_eq!(report.draft_answer(), "Paris.");
    }
}
