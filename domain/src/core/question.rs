//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be answered from retrieved documents (Value Object)
///
/// Guaranteed non-blank. The original text is kept as given, including
/// surrounding whitespace, since it is embedded verbatim in the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question, rejecting empty or whitespace-only text
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is Rust?").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_question_try_from_str() {
        let q: Question = "What is the capital of France?".try_into().unwrap();
        assert_eq!(q.to_string(), "What is the capital of France?");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert!(matches!(
            Question::new(""),
            Err(DomainError::InvalidQuestion(_))
        ));
        assert!(Question::new("   \n\t").is_err());
    }

    #[test]
    fn test_whitespace_preserved() {
        let q = Question::new("  why?  ").unwrap();
        assert_eq!(q.into_content(), "  why?  ");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Question>("\"  \"").is_err());
        let q: Question = serde_json::from_str("\"ok?\"").unwrap();
        assert_eq!(q.content(), "ok?");
    }
}
