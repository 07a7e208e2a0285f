//! Header row resolution
//!
//! Spreadsheet authors rename and reorder columns freely, so fields are found
//! by comparing normalized labels: trimmed, lower-cased, stripped of
//! diacritics and with whitespace runs collapsed.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a header label for comparison.
pub fn normalize_header(value: &str) -> String {
    let folded: String = value
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps alias lists onto the columns of one header row
#[derive(Debug, Clone)]
pub struct HeaderResolver {
    headers: Vec<String>,
    normalized: Vec<String>,
}

impl HeaderResolver {
    /// Build a resolver from the raw header row
    pub fn new(header_row: &[String]) -> Self {
        let headers: Vec<String> = header_row.iter().map(|h| h.trim().to_string()).collect();
        let normalized = headers.iter().map(|h| normalize_header(h)).collect();
        Self {
            headers,
            normalized,
        }
    }

    /// Header labels as they appear in the sheet (trimmed)
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of the first column matching any alias, trying aliases in order
    pub fn resolve_index(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            let wanted = normalize_header(alias);
            self.normalized.iter().position(|h| *h == wanted)
        })
    }

    /// Original header text of the first column matching any alias
    pub fn resolve(&self, aliases: &[&str]) -> Option<&str> {
        self.resolve_index(aliases)
            .map(|index| self.headers[index].as_str())
    }
}
