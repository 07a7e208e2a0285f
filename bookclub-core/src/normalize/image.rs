//! Cover cell extraction
//!
//! Cover cells are either a bare URL or a Google Sheets `=IMAGE(url, ...)`
//! formula; only the formula's first argument is of interest.

use regex::Regex;
use std::sync::OnceLock;

fn double_quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)^=\s*IMAGE\(("[^"\\]*(?:\\.[^"\\]*)?")"#).expect("valid regex")
    })
}

fn single_quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^=\s*IMAGE\(('[^'\\]*(?:\\.[^'\\]*)?')").expect("valid regex")
    })
}

fn first_argument() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^=\s*IMAGE\(([^,;)]+)").expect("valid regex"))
}

/// Unescape doubled quotes the way formula string literals write them
fn unescape_formula_string(value: &str) -> String {
    value.replace("\"\"", "\"").replace("''", "'").trim().to_string()
}

/// Strip the surrounding quote characters of a captured literal
fn unwrap_quotes(literal: &str) -> &str {
    &literal[1..literal.len() - 1]
}

/// Extract the image URL from a cover cell.
///
/// Returns the first argument of an `=IMAGE(...)` formula, or the trimmed
/// cell itself when it is not a formula.
pub fn extract_image_url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(caps) = double_quoted().captures(trimmed) {
        return unescape_formula_string(unwrap_quotes(&caps[1]));
    }

    if let Some(caps) = single_quoted().captures(trimmed) {
        return unescape_formula_string(unwrap_quotes(&caps[1]));
    }

    if let Some(caps) = first_argument().captures(trimmed) {
        let argument = caps[1].trim();
        let argument = argument
            .strip_prefix(['"', '\''])
            .unwrap_or(argument);
        let argument = argument.strip_suffix(['"', '\'']).unwrap_or(argument);
        return unescape_formula_string(argument);
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quoted_formula() {
        assert_eq!(
            extract_image_url("=IMAGE(\"https://x/y.jpg\", 1)"),
            "https://x/y.jpg"
        );
        assert_eq!(
            extract_image_url("=IMAGE(\"https://x/y.jpg\")"),
            "https://x/y.jpg"
        );
    }

    #[test]
    fn test_case_and_spacing() {
        assert_eq!(
            extract_image_url("  = image(\"https://x/y.jpg\";4;100;80) "),
            "https://x/y.jpg"
        );
    }

    #[test]
    fn test_single_quoted_formula() {
        assert_eq!(
            extract_image_url("=IMAGE('https://x/y.jpg', 2)"),
            "https://x/y.jpg"
        );
    }

    #[test]
    fn test_unquoted_argument() {
        assert_eq!(
            extract_image_url("=IMAGE(https://x/y.jpg; 1)"),
            "https://x/y.jpg"
        );
        assert_eq!(extract_image_url("=IMAGE(A2)"), "A2");
        assert_eq!(
            extract_image_url("=IMAGE(https://x/a\"\"b.jpg)"),
            "https://x/a\"b.jpg"
        );
    }

    #[test]
    fn test_bare_url_unchanged() {
        assert_eq!(extract_image_url("https://x/y.jpg"), "https://x/y.jpg");
        assert_eq!(extract_image_url("  https://x/y.jpg  "), "https://x/y.jpg");
    }

    #[test]
    fn test_empty_and_non_formula() {
        assert_eq!(extract_image_url(""), "");
        assert_eq!(extract_image_url("   "), "");
        assert_eq!(extract_image_url("brak okładki"), "brak okładki");
        assert_eq!(extract_image_url("=SUM(A1:A3)"), "=SUM(A1:A3)");
    }
}
