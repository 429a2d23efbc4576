//! Output formatter trait

use verity_domain::AnswerReport;

/// Trait for formatting the result of a draft-and-verify run
pub trait OutputFormatter {
    /// Format the complete run: answer, report and verdict
    fn format(&self, report: &AnswerReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &AnswerReport) -> String;

    /// Format the draft answer only
    fn format_answer_only(&self, report: &AnswerReport) -> String;
}
