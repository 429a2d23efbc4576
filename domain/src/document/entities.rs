//! Document entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A unit of retrieved text.
///
/// `metadata` is opaque to the agents. Callers use it to carry provenance
/// such as the source path or a retrieval score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry (builder style)
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Read the `source` metadata entry, if it is a string
    pub fn source(&self) -> Option<&str> {
        self.metadata.get("source").and_then(|v| v.as_str())
    }
}

impl From<&str> for Document {
    fn from(content: &str) -> Self {
        Document::new(content)
    }
}

impl From<String> for Document {
    fn from(content: String) -> Self {
        Document::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_with_source() {
        let doc = Document::new("Paris is the capital of France.")
            .with_metadata("source", "geo.txt")
            .with_metadata("score", 0.92);
        assert_eq!(doc.source(), Some("geo.txt"));
        assert_eq!(doc.metadata.len(), 2);
    }

    #[test]
    fn test_deserialize_without_metadata() {
        let doc: Document = serde_json::from_str(r#"{"content": "hello"}"#).unwrap();
        assert_eq!(doc.content, "hello");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.source(), None);
    }

    #[test]
    fn test_serialize_skips_empty_metadata() {
        let json = serde_json::to_string(&Document::from("x")).unwrap();
        assert_eq!(json, r#"{"content":"x"}"#);
    }
}
