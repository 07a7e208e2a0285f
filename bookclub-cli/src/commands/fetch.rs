//! Fetching the sheet for any command

use crate::SourceArgs;
use anyhow::{Context, Result};
use bookclub_core::display::{FETCH_FAILED_MESSAGE, LOADING_MESSAGE};
use bookclub_core::{CsvSource, FileSource, HttpSource, CSV_URL};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

impl SourceArgs {
    /// Build the source selected on the command line
    pub fn to_source(&self) -> Box<dyn CsvSource> {
        match (&self.file, &self.url) {
            (Some(path), _) => Box::new(FileSource::new(path)),
            (None, Some(url)) => Box::new(HttpSource::new(url.clone())),
            (None, None) => Box::new(HttpSource::new(CSV_URL)),
        }
    }
}

/// Fetch the CSV text once, with a spinner while waiting
pub async fn fetch_sheet(args: &SourceArgs) -> Result<String> {
    let source = args.to_source();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(LOADING_MESSAGE);

    let result = source.fetch().await;
    pb.finish_and_clear();

    match result {
        Ok(text) => {
            tracing::debug!("Fetched {} bytes from {}", text.len(), source.describe());
            Ok(text)
        }
        Err(e) => {
            tracing::error!("Fetching {} failed: {}", source.describe(), e);
            eprintln!("{}", FETCH_FAILED_MESSAGE);
            Err(e).with_context(|| format!("Failed to fetch {}", source.describe()))
        }
    }
}
