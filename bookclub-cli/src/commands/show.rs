//! Show command implementation

use super::fetch::fetch_sheet;
use crate::SourceArgs;
use anyhow::Result;
use bookclub_core::display::{last_updated_message, NO_CURRENT_BOOK_HINT, NO_FINISHED_BOOKS_HINT};
use bookclub_core::{shelf_from_csv, Cover, HistoryCard, NowReadingCard, ShelfView};

/// Show the book being read now and the reading history
pub async fn show(source: &SourceArgs, json: bool) -> Result<()> {
    let text = fetch_sheet(source).await?;
    let shelf = shelf_from_csv(&text);
    let view = ShelfView::from(&shelf);

    tracing::info!(
        "Now reading: {}, finished: {}",
        shelf.now_reading.is_some(),
        shelf.history.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Teraz czytamy");
    println!("=============");
    match &view.now_reading {
        Some(card) => print_now_reading(card),
        None => {
            println!("{}", view.now_reading_status);
            println!("{}", NO_CURRENT_BOOK_HINT);
        }
    }

    println!();
    println!("Przeczytane ({})", view.history.len());
    println!("==============");
    if view.history.is_empty() {
        println!("{}", view.history_status);
        println!("{}", NO_FINISHED_BOOKS_HINT);
    }
    for card in &view.history {
        print_history(card);
        println!();
    }

    println!(
        "{}",
        last_updated_message(chrono::Local::now().naive_local())
    );
    Ok(())
}

fn print_title(title: &str, link: Option<&str>) {
    match link {
        Some(link) => println!("{} <{}>", title, link),
        None => println!("{}", title),
    }
}

fn print_cover(cover: &Cover) {
    match cover {
        Cover::Image { url, .. } => println!("  Okładka:   {}", url),
        Cover::Placeholder { initials } => println!("  Okładka:   [{}]", initials),
    }
}

fn print_now_reading(card: &NowReadingCard) {
    print_title(&card.title, card.link.as_deref());
    if let Some(author) = &card.author {
        println!("  Autor:     {}", author);
    }
    if !card.genres.is_empty() {
        println!("  Gatunki:   {}", card.genres.join(", "));
    }
    if let Some(picker) = &card.picker {
        println!("  Wybrała:   {}", picker);
    }
    print_cover(&card.cover);
    if let Some(meeting) = &card.meeting {
        println!("  {}", meeting);
    }
}

fn print_history(card: &HistoryCard) {
    print_title(&card.title, card.link.as_deref());
    if let Some(author) = &card.author {
        println!("  Autor:     {}", author);
    }
    if !card.genres.is_empty() {
        println!("  Gatunki:   {}", card.genres.join(", "));
    }
    if let Some(picker) = &card.picker {
        println!("  Wybrała:   {}", picker);
    }
    if let Some(note) = &card.note {
        println!("  Notatka:   {}", note);
    }
    if let Some(meeting) = &card.meeting {
        println!("  Spotkanie: {}", meeting);
    }
    if let Some(rating) = &card.rating {
        println!("  Ocena:     {} / 5", rating.label);
    }
    print_cover(&card.cover);
}
