//! Headers command implementation

use super::fetch::fetch_sheet;
use crate::SourceArgs;
use anyhow::Result;
use bookclub_core::csv::parse_rows;
use bookclub_core::record::{header_report, ColumnSource};

/// Show which column each field is read from
pub async fn headers(source: &SourceArgs, json: bool) -> Result<()> {
    let text = fetch_sheet(source).await?;
    let rows = parse_rows(&text);
    let report = header_report(&rows);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for resolution in &report {
        let field = resolution.field.name();
        match &resolution.source {
            ColumnSource::Header { index, label } => {
                println!("{:<12} column {} \"{}\"", field, index + 1, label);
            }
            ColumnSource::Position { index, label } => {
                println!(
                    "{:<12} column {} \"{}\" (by position)",
                    field,
                    index + 1,
                    label
                );
            }
            ColumnSource::Missing => {
                tracing::warn!("No column found for {}", field);
                println!("{:<12} missing", field);
            }
        }
    }

    Ok(())
}
