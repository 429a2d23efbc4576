//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the hosted chat models an agent can target
//! - [`question::Question`] — a validated, non-blank question
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
