//! Prompt domain
//!
//! Fixed templates for the two agents and the placeholder renderer that
//! fills them.

mod render;
mod template;

pub use render::render;
pub use template::{PromptTemplate, REFUSAL_PHRASE, VERIFICATION_FORMAT};
