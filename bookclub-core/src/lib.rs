//! Bookclub Core Library
//!
//! Turns the reading club's published spreadsheet (CSV) into book records and
//! the two views the club page shows: the book being read now and the history
//! of finished books. The pipeline never fails on bad rows; only fetching the
//! sheet can fail.

pub mod csv;
pub mod display;
pub mod error;
pub mod header;
pub mod normalize;
pub mod record;
pub mod schema;
pub mod source;
pub mod types;
pub mod views;

pub use display::{Cover, HistoryCard, NowReadingCard, Rating, ShelfView};
pub use error::{BookclubError, Result, SourceError};
pub use schema::Field;
pub use source::{CsvSource, FileSource, HttpSource, MemorySource, CSV_URL};
pub use types::Book;
pub use views::{books_from_csv, now_reading, read_history, shelf_from_csv, Shelf};
