//! Path segment extraction.

use crate::realm::Realm;

use super::NARROW_MARKER;

/// Splits the part of `url` after the realm and after `#narrow/` into segments.
///
/// Does not check that the link is internal; on other URLs the output is
/// meaningless but harmless. A single trailing empty segment (from a trailing
/// `/`) is dropped.
pub fn paths_from_url(url: &str, realm: &Realm) -> Vec<String> {
    let rest = after_marker(realm.strip_from(url));
    let mut paths: Vec<String> = rest.split('/').map(str::to_string).collect();
    if paths.last().is_some_and(|last| last.is_empty()) {
        paths.pop();
    }
    paths
}

/// Text after the last `#narrow/`, matched ignoring ASCII case.
fn after_marker(rest: &str) -> &str {
    // ASCII lowercasing keeps byte offsets stable.
    let lowered = rest.to_ascii_lowercase();
    let marker_len = NARROW_MARKER.len() + 1;
    match lowered.rfind("#narrow/") {
        Some(idx) => &rest[idx + marker_len..],
        None => rest,
    }
}
