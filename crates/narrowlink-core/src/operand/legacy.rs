//! The period-escape scheme used by `#narrow` hash components.
//!
//! Hash components are percent-encoded with `%` then replaced by `.`, so
//! `my stream` travels as `my.20stream`. Decoding only rewrites a period
//! followed by a single digit; that narrow pattern is what old links were
//! parsed with and must stay as-is.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone, minus `.`, which has to be
/// escaped because it is the escape character here.
const HASH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Rewrites every `.` followed by an ASCII digit into `%`.
pub fn transform_to_encoded_uri(operand: &str) -> String {
    let mut out = String::with_capacity(operand.len());
    let mut chars = operand.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '.' && chars.peek().is_some_and(char::is_ascii_digit) {
            out.push('%');
        } else {
            out.push(c);
        }
    }
    out
}

/// Decodes a legacy-escaped operand: period rewrite, then percent-decoding.
///
/// Returns `None` when the result contains a malformed `%` escape or the
/// decoded bytes are not UTF-8.
pub fn decode_legacy(operand: &str) -> Option<String> {
    let encoded = transform_to_encoded_uri(operand);
    let decoded = percent_decode_strict(&encoded);
    if decoded.is_none() {
        tracing::debug!(operand, "operand is not valid percent-encoding");
    }
    decoded
}

/// Encodes a stream or topic name the way `#narrow` links carry it.
pub fn encode_hash_component(name: &str) -> String {
    utf8_percent_encode(name, HASH_COMPONENT)
        .to_string()
        .replace('%', ".")
}

fn percent_decode_strict(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
        }
    }
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
