//! `Location` header values for stored long URLs.
//!
//! Long URLs are stored as the user typed them, so they may hold bytes a
//! header value cannot carry (CR, LF, other controls, non-ASCII).

use axum::http::HeaderValue;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Controls and space get escaped; `percent_encode` always escapes non-ASCII.
const NOT_HEADER_SAFE: &AsciiSet = &CONTROLS.add(b' ');

/// Builds the `Location` value for `long_url`.
///
/// URLs that are already valid header values are sent unchanged. Anything
/// else is percent-encoded byte by byte, which keeps a redirect to the
/// same resource for the browser and can't split the response.
pub fn location_header(long_url: &str) -> HeaderValue {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return value;
    }

    let encoded = utf8_percent_encode(long_url, NOT_HEADER_SAFE).to_string();
    HeaderValue::from_str(&encoded).unwrap_or_else(|_| {
        tracing::error!(long_url = %long_url, "escaped long url is still not a header value");
        HeaderValue::from_static("/")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_is_unchanged() {
        let url = "https://example.com/a/b?q=1&r=%20#frag";
        assert_eq!(location_header(url), url);
    }

    #[test]
    fn test_newline_is_escaped() {
        assert_eq!(
            location_header("https://example.com/a\nb"),
            "https://example.com/a%0Ab"
        );
        assert_eq!(
            location_header("https://example.com/\r\nSet-Cookie: x=1"),
            "https://example.com/%0D%0ASet-Cookie:%20x=1"
        );
    }

    #[test]
    fn test_non_ascii_is_utf8_escaped() {
        assert_eq!(
            location_header("https://example.com/café"),
            "https://example.com/caf%C3%A9"
        );
    }

    #[test]
    fn test_tab_and_delete_are_escaped() {
        assert_eq!(
            location_header("https://example.com/a\tb\x7Fc"),
            "https://example.com/a%09b%7Fc"
        );
    }
}
