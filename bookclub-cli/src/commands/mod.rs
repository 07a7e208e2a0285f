//! CLI command implementations

mod books;
mod fetch;
mod headers;
mod show;

pub use books::books;
pub use headers::headers;
pub use show::show;
