//! Console output formatter for run results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use verity_domain::{AnswerReport, VerificationReport};

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run
    pub fn format(report: &AnswerReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Verity"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            report.question
        ));

        output.push_str(&Self::section_header("Draft Answer"));
        output.push_str(&format!("\n{}\n", report.generation.draft_answer));

        match &report.verification {
            Some(verification) => {
                output.push_str(&Self::section_header("Verification Report"));
                output.push_str(&format!("\n{}\n", verification.verification_report));
                output.push_str(&Self::verdict(&verification.verification_report));
            }
            None => {
                output.push_str(&format!("\n{}\n", "Verification skipped".dimmed()));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &AnswerReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the draft answer only
    pub fn format_answer_only(report: &AnswerReport) -> String {
        format!("{}\n", report.generation.draft_answer)
    }

    /// Summarize the report in one verdict block, if it follows the layout
    fn verdict(raw: &str) -> String {
        let Some(parsed) = VerificationReport::parse(raw) else {
            return format!(
                "\n{}\n",
                "(verdict unavailable: report did not follow the expected format)".dimmed()
            );
        };

        let mut output = String::new();
        let verdict = if parsed.is_clean() {
            "GROUNDED".green().bold()
        } else if parsed.supported {
            "PARTIALLY GROUNDED".yellow().bold()
        } else {
            "NOT GROUNDED".red().bold()
        };
        output.push_str(&format!("\n{} {}\n", "Verdict:".cyan().bold(), verdict));
        output.push_str(&format!(
            "  Supported: {}  Relevant: {}\n",
            Self::yes_no(parsed.supported),
            Self::yes_no(parsed.relevant)
        ));

        if !parsed.unsupported_claims.is_empty() {
            output.push_str(&format!("\n{}\n", "Unsupported Claims:".yellow().bold()));
            for claim in &parsed.unsupported_claims {
                output.push_str(&format!("  * {}\n", claim));
            }
        }

        if !parsed.contradictions.is_empty() {
            output.push_str(&format!("\n{}\n", "Contradictions:".red().bold()));
            for item in &parsed.contradictions {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        output
    }

    fn yes_no(value: bool) -> String {
        if value {
            "YES".green().to_string()
        } else {
            "NO".red().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &AnswerReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &AnswerReport) -> String {
        Self::format_json(report)
    }

    fn format_answer_only(&self, report: &AnswerReport) -> String {
        Self::format_answer_only(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_domain::{GenerationResult, VerificationResult};

    fn report(verification: Option<&str>) -> AnswerReport {
        AnswerReport {
            question: "What is the capital of France?".to_string(),
            generation: GenerationResult {
                draft_answer: "Paris.".to_string(),
                context_used: "Paris is the capital of France.".to_string(),
            },
            verification: verification.map(|text| VerificationResult {
                verification_report: text.to_string(),
                context_used: "Paris is the capital of France.".to_string(),
            }),
        }
    }

    #[test]
    fn test_format_clean_report() {
        let text = ConsoleFormatter::format(&report(Some(
            "Supported: YES\nUnsupported Claims: []\nContradictions: []\nRelevant: YES",
        )));

        assert!(text.contains("What is the capital of France?"));
        assert!(text.contains("Paris."));
        assert!(text.contains("Verification Report"));
        assert!(text.contains("GROUNDED"));
        assert!(!text.contains("NOT GROUNDED"));
        assert!(!text.contains("PARTIALLY"));
    }

    #[test]
    fn test_format_lists_problems() {
        let text = ConsoleFormatter::format(&report(Some(
            "Supported: NO\nUnsupported Claims: [Paris has 10 million residents]\nContradictions: none\nRelevant: YES",
        )));

        assert!(text.contains("NOT GROUNDED"));
        assert!(text.contains("  * Paris has 10 million residents"));
    }

    #[test]
    fn test_format_unparseable_report() {
        let text = ConsoleFormatter::format(&report(Some("Looks fine to me.")));

        assert!(text.contains("Looks fine to me."));
        assert!(text.contains("verdict unavailable"));
    }

    #[test]
    fn test_format_skipped_verification() {
        let text = ConsoleFormatter::format(&report(None));

        assert!(text.contains("Verification skipped"));
        assert!(!text.contains("Verification Report"));
    }

    #[test]
    fn test_format_answer_only() {
        assert_eq!(ConsoleFormatter::format_answer_only(&report(None)), "Paris.\n");
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&report(Some("Supported: YES")));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["question"], "What is the capital of France?");
        assert_eq!(value["generation"]["draft_answer"], "Paris.");
        assert_eq!(
            value["verification"]["verification_report"],
            "Supported: YES"
        );
    }
}
