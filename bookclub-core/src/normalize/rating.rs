//! Rating parsing

/// Highest rating on the club's scale
pub const MAX_RATING: f64 = 5.0;

/// Parse a rating such as `4,5` or `4.25`, clamped to `0..=5`.
///
/// Only the leading number is read, so `4,5/5` is `4.5`. Returns `None` when
/// the text does not start with a number.
pub fn parse_rating(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    let normalized = value.replacen(',', ".", 1);
    let number = leading_number(normalized.trim_start())?;
    if number.is_nan() {
        return None;
    }
    Some(number.clamp(0.0, MAX_RATING))
}

/// Longest prefix of `text` that reads as a decimal number
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Optional exponent, only if followed by digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_rating("4,5"), Some(4.5));
        assert_eq!(parse_rating("3,75"), Some(3.75));
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(parse_rating("4.25"), Some(4.25));
        assert_eq!(parse_rating(" 2 "), Some(2.0));
        assert_eq!(parse_rating(".5"), Some(0.5));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(parse_rating("7"), Some(5.0));
        assert_eq!(parse_rating("-1"), Some(0.0));
        assert_eq!(parse_rating("1e3"), Some(5.0));
    }

    #[test]
    fn test_trailing_text_ignored() {
        assert_eq!(parse_rating("4,5/5"), Some(4.5));
        assert_eq!(parse_rating("4 gwiazdki"), Some(4.0));
        assert_eq!(parse_rating("3."), Some(3.0));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("   "), None);
        assert_eq!(parse_rating("brak"), None);
        assert_eq!(parse_rating(","), None);
        assert_eq!(parse_rating("-"), None);
    }
}
