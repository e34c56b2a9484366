use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("placeholder regex"));

/// Scan `content` for `{{identifier}}` tokens.
///
/// Malformed tokens (empty braces, internal spaces, hyphens, single
/// braces) are ignored rather than reported. Duplicate names collapse to
/// one entry; first-occurrence order is preserved.
pub fn parse_variables(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(content) {
        let name = &captures[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
