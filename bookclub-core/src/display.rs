//! Render-ready projections of books
//!
//! These carry exactly what a page needs to draw a book card, so renderers
//! never touch raw cells. User-facing strings are Polish, like the sheet.

use crate::normalize::{
    extract_image_url, format_date, format_date_time, format_month_year, initials_from_title,
    is_valid_http_url, parse_date, parse_rating, should_display_note, split_genres,
};
use crate::types::Book;
use crate::views::Shelf;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Shown while the sheet is being fetched
pub const LOADING_MESSAGE: &str = "Ładuję dane z Google Sheets…";

/// Shown for any fetch failure; details go to the log only
pub const FETCH_FAILED_MESSAGE: &str = "Nie udało się pobrać danych. Spróbuj ponownie później.";

/// Status line when nothing is being read
pub const NO_CURRENT_BOOK_MESSAGE: &str = "Brak aktualnie czytanej książki.";

/// Hint shown under [`NO_CURRENT_BOOK_MESSAGE`]
pub const NO_CURRENT_BOOK_HINT: &str = "Dodaj w Google Sheets książkę ze statusem „Czytamy”.";

/// Status line when nothing has been read yet
pub const NO_FINISHED_BOOKS_MESSAGE: &str = "Brak przeczytanych książek.";

/// Hint shown under [`NO_FINISHED_BOOKS_MESSAGE`]
pub const NO_FINISHED_BOOKS_HINT: &str = "Dodaj w Google Sheets książki ze statusem „Przeczytane”.";

/// `Ostatnia aktualizacja: DD.MM.YYYY HH:MM`
pub fn last_updated_message(at: NaiveDateTime) -> String {
    format!("Ostatnia aktualizacja: {}", format_date_time(at))
}

/// Cover image, or initials when the cover cell holds no usable URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Cover {
    Image { url: String, alt: String },
    Placeholder { initials: String },
}

impl Cover {
    pub fn for_book(book: &Book) -> Self {
        let url = extract_image_url(&book.cover);
        if is_valid_http_url(&url) {
            Cover::Image {
                url,
                alt: format!("Okładka książki {}", book.title),
            }
        } else {
            Cover::Placeholder {
                initials: initials_from_title(&book.title),
            }
        }
    }
}

/// A parsed rating ready for a star widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub value: f64,
    /// Two-decimal label, e.g. `4.50`
    pub label: String,
    /// Star fill, `0..=100`
    pub fill_percent: f64,
}

impl Rating {
    pub fn from_raw(raw: &str) -> Option<Self> {
        let value = parse_rating(raw)?;
        Some(Self {
            value,
            label: format!("{:.2}", value),
            fill_percent: (value / 5.0 * 100.0).clamp(0.0, 100.0),
        })
    }

    /// Accessible description, e.g. `Ocena: 4.50 na 5`
    pub fn aria_label(&self) -> String {
        format!("Ocena: {} na 5", self.label)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Card for the book being read now
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NowReadingCard {
    pub title: String,
    /// Only present when the link cell holds a valid http(s) URL
    pub link: Option<String>,
    pub author: Option<String>,
    pub genres: Vec<String>,
    pub picker: Option<String>,
    /// `Porozmawiamy o książce: DD.MM.YYYY`
    pub meeting: Option<String>,
    pub cover: Cover,
}

impl From<&Book> for NowReadingCard {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            link: is_valid_http_url(&book.link).then(|| book.link.clone()),
            author: non_empty(&book.author),
            genres: split_genres(&book.genre),
            picker: non_empty(&book.picker),
            meeting: parse_date(&book.meeting_date_raw)
                .map(|date| format!("Porozmawiamy o książce: {}", format_date(date))),
            cover: Cover::for_book(book),
        }
    }
}

/// Card for a finished book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCard {
    pub title: String,
    pub link: Option<String>,
    pub author: Option<String>,
    pub genres: Vec<String>,
    pub picker: Option<String>,
    pub note: Option<String>,
    /// Meeting month as `MM.YYYY`
    pub meeting: Option<String>,
    pub rating: Option<Rating>,
    pub cover: Cover,
}

impl From<&Book> for HistoryCard {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            link: is_valid_http_url(&book.link).then(|| book.link.clone()),
            author: non_empty(&book.author),
            genres: split_genres(&book.genre),
            picker: non_empty(&book.picker),
            note: should_display_note(&book.note, &book.cover).then(|| book.note.clone()),
            meeting: parse_date(&book.meeting_date_raw).map(format_month_year),
            rating: Rating::from_raw(&book.rating_raw),
            cover: Cover::for_book(book),
        }
    }
}

/// Everything the page shows for one successful fetch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShelfView {
    pub now_reading: Option<NowReadingCard>,
    /// Empty when a current book exists
    pub now_reading_status: String,
    pub history: Vec<HistoryCard>,
    /// Empty when at least one book has been read
    pub history_status: String,
}

impl From<&Shelf> for ShelfView {
    fn from(shelf: &Shelf) -> Self {
        let now_reading = shelf.now_reading.as_ref().map(NowReadingCard::from);
        let history: Vec<HistoryCard> = shelf.history.iter().map(HistoryCard::from).collect();

        Self {
            now_reading_status: if now_reading.is_some() {
                String::new()
            } else {
                NO_CURRENT_BOOK_MESSAGE.to_string()
            },
            history_status: if history.is_empty() {
                NO_FINISHED_BOOKS_MESSAGE.to_string()
            } else {
                String::new()
            },
            now_reading,
            history,
        }
    }
}
