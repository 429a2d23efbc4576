//! Lenient parser for the four-field verification layout.

use serde::{Deserialize, Serialize};

const SUPPORTED: &str = "supported:";
const UNSUPPORTED_CLAIMS: &str = "unsupported claims:";
const CONTRADICTIONS: &str = "contradictions:";
const RELEVANT: &str = "relevant:";

/// List field that bullet continuation lines are appended to.
#[derive(Clone, Copy)]
enum ListField {
    UnsupportedClaims,
    Contradictions,
}

/// Structured view of a verification report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub supported: bool,
    pub unsupported_claims: Vec<String>,
    pub contradictions: Vec<String>,
    pub relevant: bool,
}

impl VerificationReport {
    /// Parse a report written in the requested layout.
    ///
    /// Labels are matched case-insensitively at the start of a line, with
    /// optional markdown emphasis (`**Supported:**`) or list bullets.
    /// List fields accept `[a, b]`, bare comma-separated text, or
    /// continuation lines starting with `-`/`*`. `none`, `n/a` and `[]`
    /// mean an empty list.
    ///
    /// Returns `None` unless both YES/NO fields are present and readable.
    ///
    /// # Examples
    ///
    /// ```
    /// use verity_domain::VerificationReport;
    ///
    /// let report = VerificationReport::parse(
    ///     "Supported: YES\nUnsupported Claims: []\nContradictions: none\nRelevant: YES",
    /// )
    /// .unwrap();
    /// assert!(report.supported);
    /// assert!(report.is_clean());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut supported = None;
        let mut relevant = None;
        let mut unsupported_claims = Vec::new();
        let mut contradictions = Vec::new();
        let mut current_list = None;

        for raw in text.lines() {
            let line = normalize_line(raw);
            if line.is_empty() {
                continue;
            }
            let lower = line.to_lowercase();

            if let Some(value) = strip_label(line, &lower, SUPPORTED) {
                supported = parse_yes_no(value);
                current_list = None;
            } else if let Some(value) = strip_label(line, &lower, RELEVANT) {
                relevant = parse_yes_no(value);
                current_list = None;
            } else if let Some(value) = strip_label(line, &lower, UNSUPPORTED_CLAIMS) {
                unsupported_claims.extend(parse_items(value));
                current_list = Some(ListField::UnsupportedClaims);
            } else if let Some(value) = strip_label(line, &lower, CONTRADICTIONS) {
                contradictions.extend(parse_items(value));
                current_list = Some(ListField::Contradictions);
            } else if is_bullet(raw) {
                match current_list {
                    Some(ListField::UnsupportedClaims) => unsupported_claims.extend(parse_bullet(line)),
                    Some(ListField::Contradictions) => contradictions.extend(parse_bullet(line)),
                    None => {}
                }
            }
        }

        Some(Self {
            supported: supported?,
            unsupported_claims,
            contradictions,
            relevant: relevant?,
        })
    }

    /// Supported, relevant, and nothing flagged
    pub fn is_clean(&self) -> bool {
        self.supported
            && self.relevant
            && self.unsupported_claims.is_empty()
            && self.contradictions.is_empty()
    }
}

/// Strip bullets and markdown emphasis around a label line.
fn normalize_line(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches(['-', '*', '#'])
        .trim()
        .trim_start_matches("**")
        .trim()
}

fn is_bullet(raw: &str) -> bool {
    let t = raw.trim_start();
    t.starts_with('-') || t.starts_with('*') || t.starts_with('•')
}

/// Match `label` at the start of `lower` and return the remainder of `line`.
fn strip_label<'a>(line: &'a str, lower: &str, label: &str) -> Option<&'a str> {
    if !lower.starts_with(label) {
        return None;
    }
    // Labels are ASCII so byte offsets agree between `line` and `lower`.
    Some(line.get(label.len()..)?.trim().trim_start_matches("**").trim())
}

fn parse_yes_no(value: &str) -> Option<bool> {
    let word: String = value
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_uppercase();
    match word.as_str() {
        "YES" => Some(true),
        "NO" => Some(false),
        _ => None,
    }
}

/// A bullet line is one item, commas included.
fn parse_bullet(line: &str) -> Option<String> {
    let item = clean_item(line.trim_start_matches(['-', '*', '•']));
    (!is_empty_marker(item)).then(|| item.to_string())
}

fn parse_items(value: &str) -> Vec<String> {
    let inner = value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if is_empty_marker(inner) {
        return Vec::new();
    }
    split_items(inner)
        .into_iter()
        .map(clean_item)
        .filter(|item| !is_empty_marker(item))
        .map(str::to_string)
        .collect()
}

/// Split on commas outside double quotes, except digit group separators
/// such as `2,100,000`.
fn split_items(inner: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut prev: Option<char> = None;
    let mut chars = inner.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                let next = chars.peek().map(|&(_, n)| n);
                let digit_group = prev.is_some_and(|p| p.is_ascii_digit())
                    && next.is_some_and(|n| n.is_ascii_digit());
                if !digit_group {
                    items.push(&inner[start..i]);
                    start = i + c.len_utf8();
                }
            }
            _ => {}
        }
        prev = Some(c);
    }
    items.push(&inner[start..]);
    items
}

fn clean_item(item: &str) -> &str {
    item.trim().trim_matches('"').trim()
}

fn is_empty_marker(s: &str) -> bool {
    let lower = s.trim().trim_end_matches('.').to_lowercase();
    matches!(lower.as_str(), "" | "none" | "n/a" | "na" | "nothing")
}
