//! Where the CSV text comes from
//!
//! The published sheet is fetched over HTTP; a local export can stand in for
//! it. Either way a fetch either yields the whole text or fails as a whole.

use crate::error::{Result, SourceError};
use crate::types::Book;
use crate::views::{books_from_csv, Shelf};
use async_trait::async_trait;
use std::path::PathBuf;

/// Result type for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// The club's published spreadsheet, exported as CSV
pub const CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQGJxtZz8jv7tMkadmYYuH19esMQ2DXmTn2BvARsQuX0BTFAHUMifNobYveKDbUURm61MdkdZg1aPR-/pub?output=csv";

/// A provider of spreadsheet CSV text
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Fetch the full CSV text
    async fn fetch(&self) -> SourceResult<String>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// Fetch and build all books from a source
pub async fn load_books(source: &dyn CsvSource) -> SourceResult<Vec<Book>> {
    let text = source.fetch().await?;
    let books = books_from_csv(&text);
    tracing::info!("Loaded {} books from {}", books.len(), source.describe());
    Ok(books)
}

/// Fetch a source and project it into both views
pub async fn load_shelf(source: &dyn CsvSource) -> Result<Shelf> {
    let books = load_books(source).await?;
    Ok(Shelf::from_books(&books))
}

/// Published sheet over HTTP(S)
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(CSV_URL)
    }
}

#[async_trait]
impl CsvSource for HttpSource {
    async fn fetch(&self) -> SourceResult<String> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A CSV export on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CsvSource for FileSource {
    async fn fetch(&self) -> SourceResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Read {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed CSV text (for testing)
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CsvSource for MemorySource {
    async fn fetch(&self) -> SourceResult<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
