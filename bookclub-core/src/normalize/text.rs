//! Small text helpers for titles and notes

use super::{extract_image_url, is_valid_http_url};

/// Placeholder initials when a title yields none
pub const FALLBACK_INITIALS: &str = "FT";

/// Initials of the first two words of a title, upper-cased.
pub fn initials_from_title(title: &str) -> String {
    let initials: String = title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        initials
    }
}

/// Whether a note cell is worth showing next to the book.
///
/// People paste cover formulas and links into the note column; those are
/// hidden.
pub fn should_display_note(note: &str, cover: &str) -> bool {
    let note = note.trim();
    if note.is_empty() {
        return false;
    }
    let cover = extract_image_url(cover);
    if !cover.is_empty() && note == cover {
        return false;
    }
    !is_valid_http_url(note)
}
