//! Output formatting for run results

pub mod console;
pub mod formatter;
