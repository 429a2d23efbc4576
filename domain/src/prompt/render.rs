//! Placeholder substitution for prompt templates.

/// Replace `{name}` placeholders in `template` with the matching value.
///
/// Substitution is a single left-to-right pass: text inserted from a value is
/// never scanned again, so documents that happen to contain `{context}` or
/// `{question}` are embedded literally. Placeholders with no matching input
/// are left untouched.
pub fn render(template: &str, inputs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + inputs.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            inputs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match replaced {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
