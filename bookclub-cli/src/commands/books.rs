//! Books command implementation

use super::fetch::fetch_sheet;
use crate::SourceArgs;
use anyhow::Result;
use bookclub_core::books_from_csv;

/// List every book in the sheet, as read from the cells
pub async fn books(source: &SourceArgs, json: bool) -> Result<()> {
    let text = fetch_sheet(source).await?;
    let books = books_from_csv(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books found");
        return Ok(());
    }

    for book in &books {
        println!("Title:        {}", book.title);
        if !book.author.is_empty() {
            println!("Author:       {}", book.author);
        }
        if !book.status.is_empty() {
            println!("Status:       {}", book.status);
        }
        if !book.meeting_date_raw.is_empty() {
            println!("Meeting date: {}", book.meeting_date_raw);
        }
        if !book.rating_raw.is_empty() {
            println!("Rating:       {}", book.rating_raw);
        }
        println!();
    }
    println!("{} books", books.len());

    Ok(())
}
