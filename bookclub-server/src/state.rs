//! Application state

use anyhow::{Context, Result};
use bookclub_core::source::load_books;
use bookclub_core::{Book, CsvSource, FileSource, HttpSource, Shelf, SourceError, CSV_URL};
use chrono::NaiveDateTime;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server settings, read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Published sheet URL (`BOOKCLUB_CSV_URL`)
    pub csv_url: String,

    /// Local CSV export used instead of the URL (`BOOKCLUB_CSV_FILE`)
    pub csv_file: Option<String>,

    /// Bind address (`BOOKCLUB_ADDR`)
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            csv_url: CSV_URL.to_string(),
            csv_file: None,
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("BOOKCLUB_CSV_URL") {
            config.csv_url = url;
        }
        config.csv_file = std::env::var("BOOKCLUB_CSV_FILE").ok();
        if let Ok(addr) = std::env::var("BOOKCLUB_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("Invalid BOOKCLUB_ADDR: {}", addr))?;
        }
        Ok(config)
    }

    /// The source this configuration points at
    pub fn source(&self) -> Arc<dyn CsvSource> {
        match &self.csv_file {
            Some(path) => Arc::new(FileSource::new(path)),
            None => Arc::new(HttpSource::new(self.csv_url.clone())),
        }
    }
}

/// Result of one successful fetch
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub books: Vec<Book>,
    pub shelf: Shelf,
    pub fetched_at: NaiveDateTime,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where the sheet is fetched from
    pub source: Arc<dyn CsvSource>,

    /// Latest fetch; `None` until one succeeds or after one fails
    pub snapshot: Arc<RwLock<Option<Snapshot>>>,
}

impl AppState {
    /// Create state for the configured source and fetch it once.
    ///
    /// A failed first fetch is logged; the server still starts and answers
    /// with the generic failure message until a refresh succeeds.
    pub async fn new(config: &ServerConfig) -> Self {
        let state = Self::with_source(config.source());
        if let Err(e) = state.refresh().await {
            tracing::warn!("Initial fetch failed, serving no data: {}", e);
        }
        state
    }

    /// Create state without fetching
    pub fn with_source(source: Arc<dyn CsvSource>) -> Self {
        Self {
            source,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Fetch the sheet and replace the snapshot wholesale
    pub async fn refresh(&self) -> std::result::Result<Snapshot, SourceError> {
        match load_books(self.source.as_ref()).await {
            Ok(books) => {
                let snapshot = Snapshot {
                    shelf: Shelf::from_books(&books),
                    books,
                    fetched_at: chrono::Local::now().naive_local(),
                };
                *self.snapshot.write().await = Some(snapshot.clone());
                Ok(snapshot)
            }
            Err(e) => {
                tracing::error!("Fetching {} failed: {}", self.source.describe(), e);
                *self.snapshot.write().await = None;
                Err(e)
            }
        }
    }

    /// Latest snapshot, if the last fetch succeeded
    pub async fn current(&self) -> Option<Snapshot> {
        self.snapshot.read().await.clone()
    }
}
