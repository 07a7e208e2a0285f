//! Record builder: tokenized rows to [`Book`] records

use crate::csv::RawRow;
use crate::header::HeaderResolver;
use crate::schema::Field;
use crate::types::Book;
use serde::Serialize;
use std::collections::HashMap;

/// Build books from tokenized rows. The first row is the header row.
///
/// Each field is read from the column its aliases resolve to; when no alias
/// matches, or the matched cell is empty, the field's fixed column index is
/// tried instead. Rows without a title are dropped.
pub fn build_books(rows: &[RawRow]) -> Vec<Book> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let resolver = HeaderResolver::new(header_row);
    let headers = resolver.headers();
    let resolved: Vec<(Field, Option<&str>)> = Field::ALL
        .iter()
        .map(|&field| (field, resolver.resolve(field.aliases())))
        .collect();

    let mut books = Vec::with_capacity(data_rows.len());
    for (line, row) in data_rows.iter().enumerate() {
        let record: HashMap<&str, &str> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = row.get(index).map(|v| v.trim()).unwrap_or("");
                (header.as_str(), value)
            })
            .collect();

        let mut book = Book::default();
        for &(field, header) in &resolved {
            let by_header = header
                .and_then(|h| record.get(h).copied())
                .filter(|v| !v.is_empty());
            let value = by_header
                .or_else(|| positional_value(field, headers.len(), row))
                .unwrap_or("");
            book.set(field, value.to_string());
        }
        book.status = book.status.to_lowercase();

        if book.title.is_empty() {
            // +2: one for the header row, one for 1-based line numbers
            tracing::debug!("Dropping row {} without a title", line + 2);
            continue;
        }
        books.push(book);
    }

    books
}

/// The cell at the field's fixed index, provided the header row reaches that
/// far. A blank header cell there still counts.
fn positional_value<'a>(field: Field, header_len: usize, row: &'a RawRow) -> Option<&'a str> {
    let index = field.fallback_index()?;
    if index >= header_len {
        return None;
    }
    row.get(index).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Where a field's values come from for a given header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ColumnSource {
    /// An alias matched this header
    Header { index: usize, label: String },
    /// No alias matched; the fixed column index is used
    Position { index: usize, label: String },
    /// The field is always empty
    Missing,
}

/// Resolution of one logical field against a header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldResolution {
    pub field: Field,
    #[serde(flatten)]
    pub source: ColumnSource,
}

/// Describe how every field maps onto the header row (the first row).
pub fn header_report(rows: &[RawRow]) -> Vec<FieldResolution> {
    let header_row: &[String] = rows.first().map(|r| r.as_slice()).unwrap_or(&[]);
    let resolver = HeaderResolver::new(header_row);
    let headers = resolver.headers();

    Field::ALL
        .iter()
        .map(|&field| {
            let source = match resolver.resolve_index(field.aliases()) {
                Some(index) => ColumnSource::Header {
                    index,
                    label: headers[index].clone(),
                },
                None => match field.fallback_index() {
                    Some(index) if index < headers.len() => ColumnSource::Position {
                        index,
                        label: headers[index].clone(),
                    },
                    _ => ColumnSource::Missing,
                },
            };
            FieldResolution { field, source }
        })
        .collect()
}
