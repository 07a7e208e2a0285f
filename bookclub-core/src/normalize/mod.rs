//! Value normalizers for raw spreadsheet cells
//!
//! Every function here is total: malformed input degrades to an empty string,
//! `None` or `false` rather than an error.

mod date;
mod genre;
mod image;
mod link;
mod rating;
mod text;

pub use date::{format_date, format_date_time, format_month_year, parse_date};
pub use genre::split_genres;
pub use image::extract_image_url;
pub use link::is_valid_http_url;
pub use rating::parse_rating;
pub use text::{initials_from_title, should_display_note, FALLBACK_INITIALS};
