//! View projections over the book list

use crate::csv::parse_rows;
use crate::normalize::parse_date;
use crate::record::build_books;
use crate::types::Book;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The book the club is reading now: the first one marked `czytamy`.
pub fn now_reading(books: &[Book]) -> Option<&Book> {
    books.iter().find(|book| book.is_reading())
}

/// Finished books, most recent meeting first.
///
/// Books whose meeting date does not parse go last; ties keep sheet order.
pub fn read_history(books: &[Book]) -> Vec<&Book> {
    let mut finished: Vec<(&Book, _)> = books
        .iter()
        .filter(|book| book.is_finished())
        .map(|book| (book, parse_date(&book.meeting_date_raw)))
        .collect();

    finished.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    finished.into_iter().map(|(book, _)| book).collect()
}

/// Both views, owned, built from one fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Shelf {
    pub now_reading: Option<Book>,
    pub history: Vec<Book>,
}

impl Shelf {
    /// Project a book list into the two views
    pub fn from_books(books: &[Book]) -> Self {
        Self {
            now_reading: now_reading(books).cloned(),
            history: read_history(books).into_iter().cloned().collect(),
        }
    }

    /// Run the whole pipeline on CSV text
    pub fn from_csv(text: &str) -> Self {
        Self::from_books(&books_from_csv(text))
    }

    pub fn is_empty(&self) -> bool {
        self.now_reading.is_none() && self.history.is_empty()
    }
}

/// Tokenize CSV text and build its books
pub fn books_from_csv(text: &str) -> Vec<Book> {
    build_books(&parse_rows(text))
}

/// Convenience for [`Shelf::from_csv`]
pub fn shelf_from_csv(text: &str) -> Shelf {
    Shelf::from_csv(text)
}
