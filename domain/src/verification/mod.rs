//! Verification report parsing.
//!
//! The verifier returns raw model text. These helpers extract the four
//! requested fields for consumers that want them structured. They are pure
//! text pattern matching: no I/O, and never called by the verifier itself.

mod parsing;

pub use parsing::VerificationReport;
