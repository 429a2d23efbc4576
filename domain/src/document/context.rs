//! Context assembly.

use super::entities::Document;

/// Separator placed between consecutive document contents.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Join document contents, in the order given, with a blank line between each.
///
/// The result is exactly the text the model is asked to reason over and is
/// returned to callers as `context_used`. Contents are not trimmed, and empty
/// contents still contribute a separator so the output is reproducible from
/// the input sequence alone.
pub fn build_context(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|doc| doc.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}
