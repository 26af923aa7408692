//! Realm membership, path extraction and link classification.
//!
//! These are the first three stages of resolving a link: decide whether a
//! URL is internal to the realm, split the part after `#narrow/` into
//! segments, and pick a [`LinkKind`] from the segment shape.

mod classify;
mod path;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use classify::{is_internal_link, is_message_link, link_type, link_type_of_paths};
pub use path::paths_from_url;

/// Fragment marker that distinguishes in-app links from other realm URLs.
pub(crate) const NARROW_MARKER: &str = "#narrow";

/// What kind of view a URL points at. Every URL maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Not on the realm, or on the realm but not an in-app link.
    External,
    /// In-app link whose shape we don't recognize.
    Home,
    /// Direct-message conversation (`pm-with`).
    Pm,
    /// Topic within a stream.
    Topic,
    /// Whole stream.
    Stream,
    /// Filtered view such as starred or mentioned messages.
    Special,
}

impl LinkKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Home => "home",
            Self::Pm => "pm",
            Self::Topic => "topic",
            Self::Stream => "stream",
            Self::Special => "special",
        }
    }

    /// True for kinds that can produce a narrow.
    pub const fn is_narrow(&self) -> bool {
        matches!(self, Self::Pm | Self::Topic | Self::Stream | Self::Special)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link kind: {0}")]
pub struct UnknownLinkKind(pub String);

impl FromStr for LinkKind {
    type Err = UnknownLinkKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "external" => Ok(Self::External),
            "home" => Ok(Self::Home),
            "pm" => Ok(Self::Pm),
            "topic" => Ok(Self::Topic),
            "stream" => Ok(Self::Stream),
            "special" => Ok(Self::Special),
            _ => Err(UnknownLinkKind(s.to_string())),
        }
    }
}
