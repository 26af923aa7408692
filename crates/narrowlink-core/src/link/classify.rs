//! Realm membership and segment-shape classification.

use crate::realm::{Realm, RealmMatcher};

use super::path::paths_from_url;
use super::{LinkKind, NARROW_MARKER};

/// Filters reachable through `#narrow/is/<filter>`, matched as a
/// case-insensitive prefix of the segment.
const SPECIAL_FILTERS: [&str; 3] = ["private", "starred", "mentioned"];

/// True if `url` is on `realm` and the remainder starts with `#narrow`
/// (optionally after one `/`), ignoring case.
pub fn is_internal_link<M: RealmMatcher + ?Sized>(url: &str, realm: &Realm, matcher: &M) -> bool {
    if !matcher.is_url_on_realm(url, realm) {
        return false;
    }
    let rest = realm.strip_from(url);
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    starts_with_ignore_ascii_case(rest, NARROW_MARKER)
}

/// Internal link that mentions `near` anywhere in the URL.
///
/// This is a cheap pre-check; the anchor itself still requires a literal
/// `near` path segment.
pub fn is_message_link<M: RealmMatcher + ?Sized>(url: &str, realm: &Realm, matcher: &M) -> bool {
    is_internal_link(url, realm, matcher) && url.contains("near")
}

/// Classifies `url` into exactly one [`LinkKind`].
pub fn link_type<M: RealmMatcher + ?Sized>(url: &str, realm: &Realm, matcher: &M) -> LinkKind {
    if !is_internal_link(url, realm, matcher) {
        return LinkKind::External;
    }
    let paths = paths_from_url(url, realm);
    let kind = link_type_of_paths(&paths);
    tracing::debug!(%url, kind = kind.as_str(), segments = paths.len(), "classified link");
    kind
}

/// Shape rules for an internal link's segments. First match wins; the
/// order matters since `pm-with/../near/..` and `stream/../topic/..` are
/// both four segments long.
pub fn link_type_of_paths<S: AsRef<str>>(paths: &[S]) -> LinkKind {
    let seg = |i: usize| segment(paths, i);

    match (paths.len(), seg(0)) {
        (2, Some("pm-with")) => return LinkKind::Pm,
        (4, Some("pm-with")) if seg(2) == Some("near") => return LinkKind::Pm,
        _ => {}
    }

    if matches!(paths.len(), 4 | 6)
        && seg(0) == Some("stream")
        && matches!(seg(2), Some("subject" | "topic"))
    {
        return LinkKind::Topic;
    }

    if paths.len() == 2 && seg(0) == Some("stream") {
        return LinkKind::Stream;
    }

    if paths.len() == 2 && seg(0) == Some("is") && seg(1).is_some_and(is_special_filter) {
        return LinkKind::Special;
    }

    LinkKind::Home
}

fn segment<S: AsRef<str>>(paths: &[S], i: usize) -> Option<&str> {
    paths.get(i).map(|s| s.as_ref())
}

fn is_special_filter(segment: &str) -> bool {
    SPECIAL_FILTERS
        .iter()
        .any(|filter| starts_with_ignore_ascii_case(segment, filter))
}

fn starts_with_ignore_ascii_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
