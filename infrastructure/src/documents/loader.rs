//! Local file system document loader
//!
//! Turns already-retrieved snippets on disk into [`Document`]s:
//!
//! - [`LocalDocumentLoader::load_files`] reads each path as one document and
//!   records the path under the `source` metadata key
//! - [`LocalDocumentLoader::load_json`] reads a JSON array of
//!   `{"content": ..., "metadata": {...}}` objects
//!
//! Input order is preserved in both cases, since it decides the order of
//! the context handed to the agents.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use verity_domain::Document;
use verity_domain::core::string::is_blank;

/// Errors raised while reading documents from disk.
#[derive(Error, Debug)]
pub enum DocumentLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} as a JSON document list: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Document loader that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalDocumentLoader;

impl LocalDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one document per file, in the given order.
    ///
    /// Files that are empty or whitespace-only are skipped with a warning;
    /// an unreadable file aborts the whole load.
    pub fn load_files(&self, paths: &[PathBuf]) -> Result<Vec<Document>, DocumentLoadError> {
        let mut documents = Vec::with_capacity(paths.len());

        for path in paths {
            let content = read(path)?;
            if is_blank(&content) {
                warn!("Skipping empty document: {}", path.display());
                continue;
            }
            debug!("Loaded document {} ({} bytes)", path.display(), content.len());
            documents.push(
                Document::new(content).with_metadata("source", path.display().to_string()),
            );
        }

        Ok(documents)
    }

    /// Load a JSON array of documents.
    ///
    /// Entries are kept exactly as written, including their metadata.
    pub fn load_json(&self, path: &Path) -> Result<Vec<Document>, DocumentLoadError> {
        let raw = read(path)?;
        let documents: Vec<Document> =
            serde_json::from_str(&raw).map_err(|source| DocumentLoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Loaded {} documents from {}", documents.len(), path.display());
        Ok(documents)
    }
}

fn read(path: &Path) -> Result<String, DocumentLoadError> {
    fs::read_to_string(path).map_err(|source| DocumentLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
