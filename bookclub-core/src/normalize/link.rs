//! Link validation

use url::Url;

/// Whether `value` is an absolute `http` or `https` URL.
pub fn is_valid_http_url(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
