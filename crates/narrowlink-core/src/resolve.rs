//! Narrow construction and message anchors: the public face of the resolver.
//!
//! Every function here is pure. Unresolvable links come back as `None`,
//! since arbitrary URLs are fed through these checks all the time.

use crate::directory::{StreamDirectory, UserDirectory};
use crate::link::{self, LinkKind};
use crate::narrow::{group_narrow, special_narrow, stream_narrow, topic_narrow, Narrow};
use crate::operand::{self, decode_legacy, leading_int, StreamOperand};
use crate::realm::{PrefixMatcher, Realm, RealmMatcher};

/// Resolver bound to one realm and one realm-membership predicate.
#[derive(Debug, Clone)]
pub struct LinkResolver<M = PrefixMatcher> {
    realm: Realm,
    matcher: M,
}

impl LinkResolver<PrefixMatcher> {
    pub fn new(realm: Realm) -> Self {
        Self::with_matcher(realm, PrefixMatcher)
    }
}

impl<M: RealmMatcher> LinkResolver<M> {
    pub fn with_matcher(realm: Realm, matcher: M) -> Self {
        Self { realm, matcher }
    }

    pub fn realm(&self) -> &Realm {
        &self.realm
    }

    pub fn is_internal_link(&self, url: &str) -> bool {
        link::is_internal_link(url, &self.realm, &self.matcher)
    }

    pub fn is_message_link(&self, url: &str) -> bool {
        link::is_message_link(url, &self.realm, &self.matcher)
    }

    pub fn link_type(&self, url: &str) -> LinkKind {
        link::link_type(url, &self.realm, &self.matcher)
    }

    pub fn narrow<U, S>(&self, url: &str, users: &U, streams: &S) -> Option<Narrow>
    where
        U: UserDirectory + ?Sized,
        S: StreamDirectory + ?Sized,
    {
        let kind = self.link_type(url);
        let paths = link::paths_from_url(url, &self.realm);
        narrow_from_paths(kind, &paths, users, streams)
    }

    pub fn message_anchor(&self, url: &str) -> Option<u64> {
        if !self.is_message_link(url) {
            return None;
        }
        let paths = link::paths_from_url(url, &self.realm);
        let near = paths.iter().rposition(|segment| segment == "near")?;
        paths.get(near + 1).and_then(|id| leading_int(id))
    }

    /// Anchor message id, or 0 when the link has none. 0 is never a real
    /// message id; prefer [`Self::message_anchor`] when that distinction matters.
    pub fn message_id(&self, url: &str) -> u64 {
        self.message_anchor(url).unwrap_or(0)
    }
}

/// Builds the narrow for already-classified segments.
fn narrow_from_paths<U, S>(kind: LinkKind, paths: &[String], users: &U, streams: &S) -> Option<Narrow>
where
    U: UserDirectory + ?Sized,
    S: StreamDirectory + ?Sized,
{
    match kind {
        LinkKind::Pm => {
            let emails = operand::parse_pm_operand(&paths[1], users)?;
            Some(group_narrow(emails))
        }
        LinkKind::Topic => {
            // A stream id missing from the directory does not fail a topic
            // link; the raw operand is decoded as a legacy stream name
            // instead. Stream and pm links fail closed.
            let stream_operand = StreamOperand::parse(&paths[1]);
            let stream = match stream_operand {
                StreamOperand::ById { .. } => stream_operand.resolve(streams).or_else(|| {
                    tracing::debug!(operand = %paths[1], "topic link: falling back to raw stream operand");
                    decode_legacy(&paths[1])
                }),
                StreamOperand::ByName(_) => stream_operand.resolve(streams),
            }?;
            let topic = operand::parse_topic_operand(&paths[3])?;
            Some(topic_narrow(stream, topic))
        }
        LinkKind::Stream => operand::parse_stream_operand(&paths[1], streams).map(stream_narrow),
        LinkKind::Special => Some(special_narrow(paths[1].as_str())),
        LinkKind::External | LinkKind::Home => None,
    }
}

/// Classifies `url` against `realm` using plain prefix matching.
pub fn link_type(url: &str, realm: &Realm) -> LinkKind {
    link::link_type(url, realm, &PrefixMatcher)
}

/// The narrow `url` points at, or `None` for external, unrecognized, or
/// unresolvable links.
pub fn narrow_from_link<U, S>(url: &str, realm: &Realm, users: &U, streams: &S) -> Option<Narrow>
where
    U: UserDirectory + ?Sized,
    S: StreamDirectory + ?Sized,
{
    let kind = link_type(url, realm);
    let paths = link::paths_from_url(url, realm);
    narrow_from_paths(kind, &paths, users, streams)
}

/// Id after the last `near` segment, if `url` is a message link.
pub fn message_anchor(url: &str, realm: &Realm) -> Option<u64> {
    LinkResolver::new(realm.clone()).message_anchor(url)
}

/// Like [`message_anchor`] with 0 standing in for "no anchor".
pub fn message_id_from_link(url: &str, realm: &Realm) -> u64 {
    message_anchor(url, realm).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Directory, Stream, User};

    const REALM: &str = "https://chat.example.com";

    fn directory() -> Directory {
        Directory::new(
            [
                User {
                    user_id: 5,
                    email: "a@x.com".into(),
                    full_name: "Ann".into(),
                },
                User {
                    user_id: 9,
                    email: "b@x.com".into(),
                    full_name: "Bo".into(),
                },
            ],
            [Stream {
                stream_id: 42,
                name: "general".into(),
            }],
        )
    }

    fn narrow(url: &str) -> Option<Narrow> {
        let dir = directory();
        narrow_from_link(url, &Realm::new(REALM), &dir, &dir)
    }

    #[test]
    fn pm_link() {
        assert_eq!(
            narrow("https://chat.example.com/#narrow/pm-with/5,9-some-slug"),
            Some(group_narrow(["a@x.com", "b@x.com"]))
        );
        assert_eq!(narrow("https://chat.example.com/#narrow/pm-with/5,10-group"), None);
    }

    #[test]
    fn topic_link_with_anchor() {
        let url = "https://chat.example.com/#narrow/stream/42-general/topic/plans/near/100";
        assert_eq!(narrow(url), Some(topic_narrow("general", "plans")));
        assert_eq!(message_id_from_link(url, &Realm::new(REALM)), 100);
    }

    #[test]
    fn topic_link_falls_back_to_raw_operand_on_unknown_id() {
        assert_eq!(
            narrow("https://chat.example.com/#narrow/stream/7-old.20name/subject/x"),
            Some(topic_narrow("7-old name", "x"))
        );
    }

    #[test]
    fn topic_link_with_undecodable_stream_name() {
        assert_eq!(narrow("https://chat.example.com/#narrow/stream/50%/topic/x"), None);
        assert_eq!(
            narrow("https://chat.example.com/#narrow/stream/99999999999999999999999-old/topic/x"),
            Some(topic_narrow("99999999999999999999999-old", "x"))
        );
    }

    #[test]
    fn stream_link_with_overflowing_id_has_no_narrow() {
        let url = "https://chat.example.com/#narrow/stream/99999999999999999999999-general";
        assert_eq!(link_type(url, &Realm::new(REALM)), LinkKind::Stream);
        assert_eq!(narrow(url), None);
    }

    #[test]
    fn topic_link_with_undecodable_topic() {
        assert_eq!(narrow("https://chat.example.com/#narrow/stream/42-general/topic/50%"), None);
    }

    #[test]
    fn stream_link_fails_closed_on_unknown_id() {
        assert_eq!(narrow("https://chat.example.com/#narrow/stream/7-general"), None);
        assert_eq!(
            narrow("https://chat.example.com/#narrow/stream/general"),
            Some(stream_narrow("general"))
        );
    }

    #[test]
    fn special_link_uses_raw_segment() {
        assert_eq!(
            narrow("https://chat.example.com/#narrow/is/Starred"),
            Some(special_narrow("Starred"))
        );
    }

    #[test]
    fn external_and_home_have_no_narrow() {
        assert_eq!(narrow("https://example.org/#narrow/stream/general"), None);
        assert_eq!(narrow("https://chat.example.com/#narrow/search/lunch"), None);
    }

    #[test]
    fn message_id_defaults_to_zero() {
        let realm = Realm::new(REALM);
        assert_eq!(message_id_from_link("https://chat.example.com/#narrow/stream/42-general", &realm), 0);
        assert_eq!(
            message_id_from_link("https://chat.example.com/#narrow/stream/nearby", &realm),
            0
        );
        assert_eq!(
            message_id_from_link("https://chat.example.com/#narrow/stream/1-a/topic/b/near", &realm),
            0
        );
        assert_eq!(
            message_id_from_link("https://example.org/#narrow/stream/1-a/topic/b/near/7", &realm),
            0
        );
    }

    #[test]
    fn message_anchor_uses_last_near() {
        let realm = Realm::new(REALM);
        assert_eq!(
            message_anchor("https://chat.example.com/#narrow/pm-with/near/near/12", &realm),
            Some(12)
        );
        assert_eq!(
            message_anchor("https://chat.example.com/#narrow/pm-with/5-ann/near/31/", &realm),
            Some(31)
        );
    }

    #[test]
    fn resolver_with_custom_matcher() {
        // Realm configured without a scheme; accept it under any scheme.
        let resolver = LinkResolver::with_matcher(
            Realm::new("chat.example.com"),
            |url: &str, realm: &Realm| {
                url.split_once("://")
                    .is_some_and(|(_, rest)| rest.starts_with(realm.as_str()))
            },
        );
        let dir = directory();
        for url in [
            "http://chat.example.com/#narrow/stream/general",
            "https://chat.example.com/#narrow/stream/general",
        ] {
            assert!(resolver.is_internal_link(url));
            assert_eq!(resolver.link_type(url), LinkKind::Stream);
            assert_eq!(resolver.narrow(url, &dir, &dir), Some(stream_narrow("general")));
        }
        assert!(!resolver.is_internal_link("chat.example.com/#narrow/stream/general"));
        assert_eq!(resolver.message_id("https://chat.example.com/#narrow/is/starred"), 0);
    }
}
