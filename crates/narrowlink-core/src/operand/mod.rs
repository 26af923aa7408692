//! Operand decoding: turn raw path segments into stream names, topics and
//! participant lists.
//!
//! Links written before stream ids were embedded in URLs must keep working,
//! so two encodings coexist for stream operands. See [`StreamOperand`].

mod legacy;
mod pm;
mod stream;

pub use legacy::{decode_legacy, encode_hash_component, transform_to_encoded_uri};
pub use pm::parse_pm_operand;
pub use stream::{parse_stream_operand, parse_topic_operand, StreamOperand};

/// Leading decimal integer of `s`, ignoring leading whitespace.
///
/// `"5"`, `"5abc"` and `" 12"` all parse; `""` and `"abc"` don't.
pub(crate) fn leading_int(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
