//! Genre tag splitting

/// Split a genre cell into tags.
///
/// Tags may be separated by `,`, `/`, `|` or written as hashtags. Order and
/// duplicates are kept.
pub fn split_genres(value: &str) -> Vec<String> {
    value
        .split([',', '/', '|', '#'])
        .map(|part| part.trim_start_matches('#').trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            split_genres("Fantasy, #Young Adult / Romance"),
            vec!["Fantasy", "Young Adult", "Romance"]
        );
    }

    #[test]
    fn test_hashtags() {
        assert_eq!(
            split_genres("#kryminał #thriller"),
            vec!["kryminał", "thriller"]
        );
    }

    #[test]
    fn test_pipes_and_duplicates() {
        assert_eq!(
            split_genres("Reportaż | Reportaż|Historia"),
            vec!["Reportaż", "Reportaż", "Historia"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(split_genres("").is_empty());
        assert!(split_genres(" , / | # ").is_empty());
    }
}
