//! Core record types

mod book;

pub use book::{Book, STATUS_FINISHED, STATUS_READING};
