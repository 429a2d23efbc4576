//! Use cases
//!
//! The two agents: draft an answer from documents, then verify it against
//! the same documents. Neither calls the other; [`draft_and_verify`]
//! sequences them for callers that want both.

pub mod draft_and_verify;
pub mod generate_answer;
pub mod shared;
pub mod verify_answer;

#[cfg(test)]
pub(crate) mod test_support;
