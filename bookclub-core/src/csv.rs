//! CSV tokenizer for published spreadsheet exports
//!
//! Quote handling is permissive: a `"` anywhere toggles quoting (so a stray
//! quote in the middle of a field is not an error), `""` inside quotes is a
//! literal quote, and an unterminated quote simply runs to the end of input.

use std::mem::take;

/// One tokenized CSV row; every cell is already de-quoted and trimmed
pub type RawRow = Vec<String>;

/// Tokenize CSV text into rows of trimmed cells.
///
/// `\r\n`, `\r` and `\n` all end a row. Fully blank rows are dropped.
pub fn parse_rows(text: &str) -> Vec<RawRow> {
    let mut rows = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(take(&mut field).trim().to_string());
            }
            '\n' | '\r' if !in_quotes => {
                // A bare line break with nothing pending (e.g. the `\n` of `\r\n`)
                if !field.is_empty() || !row.is_empty() {
                    row.push(take(&mut field).trim().to_string());
                    rows.push(take(&mut row));
                }
                field.clear();
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        rows.push(row);
    }

    rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_simple_rows() {
        let rows = parse_rows("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
    }

    #[test]
    fn test_crlf_and_bare_cr() {
        let rows = parse_rows("a,b\r\n1,2\r3,4");
        assert_eq!(
            rows,
            vec![row(&["a", "b"]), row(&["1", "2"]), row(&["3", "4"])]
        );
    }

    #[test]
    fn test_quoted_comma_and_newline() {
        let rows = parse_rows("title,note\n\"Dune\",\"long, slow\nbut good\"\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], row(&["Dune", "long, slow\nbut good"]));
    }

    #[test]
    fn test_escaped_quotes() {
        let rows = parse_rows("\"She said \"\"hi\"\"\",x");
        assert_eq!(rows, vec![row(&["She said \"hi\"", "x"])]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let rows = parse_rows("  a  ,\" b \" ,c\t\n");
        assert_eq!(rows, vec![row(&["a", "b", "c"])]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let rows = parse_rows("a,b\n\n,\n  ,  \n1,2\n\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["1", "2"])]);
    }

    #[test]
    fn test_stray_quote_mid_field_toggles() {
        // The quote opens a quoted span, so the comma is swallowed.
        let rows = parse_rows("ab\"c,d\"e,f");
        assert_eq!(rows, vec![row(&["abc,de", "f"])]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let rows = parse_rows("a,\"open\nstill open,here");
        assert_eq!(rows, vec![row(&["a", "open\nstill open,here"])]);
    }

    #[test]
    fn test_trailing_empty_cell_kept() {
        let rows = parse_rows("a,b,\n");
        assert_eq!(rows, vec![row(&["a", "b", ""])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\r\n").is_empty());
    }
}
