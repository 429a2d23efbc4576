//! Retrieved documents and the context built from them.
//!
//! Documents are produced by a retrieval step outside this workspace; the
//! agents only ever read [`Document::content`].

pub mod context;
pub mod entities;

pub use context::{CONTEXT_SEPARATOR, build_context};
pub use entities::Document;
