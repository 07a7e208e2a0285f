//! The fixed logical schema of the club spreadsheet

use serde::{Deserialize, Serialize};

/// A logical column of the spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Author,
    Genre,
    Note,
    Cover,
    Link,
    Picker,
    Status,
    MeetingDate,
    Rating,
}

impl Field {
    /// All fields in schema order
    pub const ALL: [Field; 10] = [
        Field::Title,
        Field::Author,
        Field::Genre,
        Field::Note,
        Field::Cover,
        Field::Link,
        Field::Picker,
        Field::Status,
        Field::MeetingDate,
        Field::Rating,
    ];

    /// Canonical field name
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::Note => "note",
            Field::Cover => "cover",
            Field::Link => "link",
            Field::Picker => "picker",
            Field::Status => "status",
            Field::MeetingDate => "meetingDate",
            Field::Rating => "rating",
        }
    }

    /// Accepted header labels, highest priority first. Polish labels lead.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Title => &["Tytuł", "Title"],
            Field::Author => &["Autor", "Author"],
            Field::Genre => &["Gatunek", "Gatunki", "Genre", "Category"],
            Field::Note => &[
                "Notatka",
                "Notatki",
                "Opis",
                "Note",
                "Notes",
                "Description",
            ],
            Field::Cover => &[
                "Okładka",
                "Okładka URL",
                "Okładka (URL)",
                "URL okładki",
                "Cover",
                "Cover URL",
            ],
            Field::Link => &[
                "Link",
                "Link do książki",
                "Goodreads",
                "Lubimy Czytać",
                "Lubimyczytać",
                "Lubimyczytac",
                "Book Link",
            ],
            Field::Picker => &[
                "Wybrała",
                "Wybrala",
                "Wybrał",
                "Wybral",
                "Picker",
                "Suggested By",
                "Selected By",
            ],
            Field::Status => &["Status"],
            Field::MeetingDate => &["Data spotkania", "Spotkanie", "Meeting Date", "Data"],
            Field::Rating => &["Ocena", "Rating"],
        }
    }

    /// Column index used when no alias matches (or the matched cell is empty).
    ///
    /// Genre has no fixed position in the club sheet layout.
    pub fn fallback_index(self) -> Option<usize> {
        match self {
            Field::Title => Some(0),
            Field::Author => Some(1),
            Field::Genre => None,
            Field::Note => Some(2),
            Field::Cover => Some(3),
            Field::Link => Some(4),
            Field::Picker => Some(5),
            Field::Status => Some(6),
            Field::MeetingDate => Some(7),
            Field::Rating => Some(8),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
