/// Format a user-supplied value for the appended variables block.
///
/// Single-line values become an inline double-quoted literal with `\` and
/// `"` escaped. Multi-line values become a heredoc-style triple-quote
/// block: delimiters on their own lines, content kept raw except that any
/// embedded `"""` run is escaped character-by-character to `\"\"\"` so it
/// cannot terminate the block early. Backslashes inside multi-line values
/// stay unescaped; the asymmetry is part of the fixed output contract.
pub fn format_value(value: &str) -> String {
    if value.contains('\n') {
        let escaped = value.replace("\"\"\"", "\\\"\\\"\\\"");
        format!("\"\"\"\n{escaped}\n\"\"\"")
    } else {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    }
}

/// Expand a prompt by appending filled-in variable values.
///
/// Values are never substituted inline; they are appended as a trailing
/// block: a blank line, a `Variables:` header, then one line per
/// non-empty value as `{{name}}: <formatted>`. Entries whose value is
/// empty or all-whitespace are omitted; when nothing remains the content
/// is returned unchanged, byte for byte.
pub fn expand_prompt(content: &str, values: &[(String, String)]) -> String {
    let filled: Vec<&(String, String)> = values
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();
    if filled.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len() + 64);
    out.push_str(content);
    out.push_str("\n\nVariables:");
    for (name, value) in filled {
        out.push('\n');
        out.push_str(&format!("{{{{{name}}}}}: {}", format_value(value)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn single_line_values_escape_quotes_and_backslashes() {
        assert_eq!(format_value("Hello \"World\""), r#""Hello \"World\"""#);
        assert_eq!(format_value(r"C:\temp"), r#""C:\\temp""#);
    }

    #[test]
    fn multi_line_values_use_triple_quote_blocks() {
        assert_eq!(format_value("line1\nline2"), "\"\"\"\nline1\nline2\n\"\"\"");
    }

    #[test]
    fn multi_line_values_keep_backslashes_raw() {
        assert_eq!(format_value("a\\b\nc"), "\"\"\"\na\\b\nc\n\"\"\"");
    }

    #[test]
    fn embedded_triple_quotes_cannot_terminate_the_block() {
        assert_eq!(
            format_value("before\n\"\"\"\nafter"),
            "\"\"\"\nbefore\n\\\"\\\"\\\"\nafter\n\"\"\""
        );
    }

    #[test]
    fn expansion_appends_trailing_block() {
        let out = expand_prompt(
            "Write about {{topic}}.",
            &values(&[("topic", "rust"), ("tone", "formal")]),
        );
        assert_eq!(
            out,
            "Write about {{topic}}.\n\nVariables:\n{{topic}}: \"rust\"\n{{tone}}: \"formal\""
        );
    }

    #[test]
    fn empty_values_are_omitted() {
        let out = expand_prompt(
            "content",
            &values(&[("a", "filled"), ("b", ""), ("c", "   ")]),
        );
        assert_eq!(out, "content\n\nVariables:\n{{a}}: \"filled\"");
    }

    #[test]
    fn all_empty_returns_content_unchanged() {
        let content = "content with {{a}}";
        assert_eq!(
            expand_prompt(content, &values(&[("a", ""), ("b", " \n ")])),
            content
        );
        assert_eq!(expand_prompt(content, &[]), content);
    }
}
