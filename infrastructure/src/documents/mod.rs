//! Document loading from the local file system

mod loader;

pub use loader::{DocumentLoadError, LocalDocumentLoader};
