//! The Book record - one spreadsheet row after header mapping

use crate::schema::Field;
use serde::{Deserialize, Serialize};

/// Status value marking the book the club is reading now
pub const STATUS_READING: &str = "czytamy";

/// Status value marking a finished book
pub const STATUS_FINISHED: &str = "przeczytane";

/// A club book as it appears in the sheet.
///
/// All fields hold the trimmed cell text, or an empty string when the cell
/// (or the whole column) is missing. Interpretation of dates, ratings, covers
/// and genres is left to [`crate::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Book title, never empty
    pub title: String,

    pub author: String,

    /// Raw genre text, see [`crate::normalize::split_genres`]
    pub genre: String,

    pub note: String,

    /// Raw cover cell; may be an `=IMAGE(...)` formula or a bare URL
    pub cover: String,

    /// Raw link candidate
    pub link: String,

    /// Member who picked the book
    pub picker: String,

    /// Lower-cased status
    pub status: String,

    /// Meeting date exactly as typed
    pub meeting_date_raw: String,

    /// Rating exactly as typed, possibly with a decimal comma
    pub rating_raw: String,
}

impl Book {
    /// Create a book with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the status (lower-cased)
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_lowercase();
        self
    }

    /// Set the raw meeting date
    pub fn with_meeting_date(mut self, raw: impl Into<String>) -> Self {
        self.meeting_date_raw = raw.into();
        self
    }

    /// Set the raw rating
    pub fn with_rating(mut self, raw: impl Into<String>) -> Self {
        self.rating_raw = raw.into();
        self
    }

    /// Value of a logical field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Genre => &self.genre,
            Field::Note => &self.note,
            Field::Cover => &self.cover,
            Field::Link => &self.link,
            Field::Picker => &self.picker,
            Field::Status => &self.status,
            Field::MeetingDate => &self.meeting_date_raw,
            Field::Rating => &self.rating_raw,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Genre => &mut self.genre,
            Field::Note => &mut self.note,
            Field::Cover => &mut self.cover,
            Field::Link => &mut self.link,
            Field::Picker => &mut self.picker,
            Field::Status => &mut self.status,
            Field::MeetingDate => &mut self.meeting_date_raw,
            Field::Rating => &mut self.rating_raw,
        };
        *slot = value;
    }

    /// Whether the club is reading this book now
    pub fn is_reading(&self) -> bool {
        self.status == STATUS_READING
    }

    /// Whether the club has finished this book
    pub fn is_finished(&self) -> bool {
        self.status == STATUS_FINISHED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Lalka").with_status("Czytamy");
        assert_eq!(book.title, "Lalka");
        assert_eq!(book.status, "czytamy");
        assert!(book.is_reading());
        assert!(!book.is_finished());
        assert!(book.author.is_empty());
    }

    #[test]
    fn test_get_set_cover_every_field() {
        let mut book = Book::default();
        for field in Field::ALL {
            book.set(field, field.name().to_string());
        }
        for field in Field::ALL {
            assert_eq!(book.get(field), field.name());
        }
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Solaris")
            .with_meeting_date("01.03.2024")
            .with_rating("4,5");
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["meetingDateRaw"], "01.03.2024");
        assert_eq!(json["ratingRaw"], "4,5");

        let back: Book = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }
}
