//! Character decoding for saved pages.
//!
//! Browsers save pages in the charset they were served with, sometimes with a
//! byte order mark. The charset is taken from, in order: the BOM, a
//! `<meta charset>` tag, a `<meta http-equiv="Content-Type">` tag. UTF-8 is
//! the fallback.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes of the document head searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Label of the charset declared in the document head, if any.
///
/// Covers both `<meta charset="...">` and the `content="...; charset=..."`
/// form of `http-equiv`, which the same pattern matches.
#[must_use]
pub fn declared_charset(head: &str) -> Option<&str> {
    META_CHARSET
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Pick the encoding of a saved page and the length of its BOM.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(html) {
        return (encoding, bom_len);
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    let encoding = declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    (encoding, 0)
}

/// Decode page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing the load.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (encoding, bom_len) = detect_encoding(html);
    let body = &html[bom_len..];

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    tracing::debug!(encoding = encoding.name(), "decoding non UTF-8 page");
    let (decoded, _) = encoding.decode_without_bom_handling(body);
    decoded.into_owned()
}
