//! Realm identity and the "is this URL on the realm" predicate.

use std::fmt;

use thiserror::Error;

/// Base URL of a server instance. Only ever used for prefix matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Realm(String);

#[derive(Debug, Error)]
pub enum RealmError {
    #[error("realm URL is empty")]
    Empty,
    #[error("invalid realm URL {value:?}: {source}")]
    Invalid {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("realm URL has no host: {0}")]
    MissingHost(String),
}

impl Realm {
    /// Wraps a realm string as-is, without validation.
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Validates `base` as an absolute URL with a host.
    ///
    /// The stored value is the input string (trimmed), not the `url` crate's
    /// serialization, so that prefix matching sees what the user configured.
    pub fn parse(base: &str) -> Result<Self, RealmError> {
        let base = base.trim();
        if base.is_empty() {
            return Err(RealmError::Empty);
        }
        let parsed = url::Url::parse(base).map_err(|source| RealmError::Invalid {
            value: base.to_string(),
            source,
        })?;
        if parsed.host_str().is_none() {
            return Err(RealmError::MissingHost(base.to_string()));
        }
        Ok(Self(base.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the last occurrence of the realm in `url`.
    ///
    /// If the realm does not occur at all the whole URL is returned. Using the
    /// last occurrence tolerates realms repeated inside redirect query strings.
    pub(crate) fn strip_from<'u>(&self, url: &'u str) -> &'u str {
        if self.0.is_empty() {
            return url;
        }
        match url.rfind(self.0.as_str()) {
            Some(idx) => &url[idx + self.0.len()..],
            None => url,
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Realm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Decides whether a URL lives on a realm at all.
///
/// The link classifier only asks this question; how URLs are normalized
/// before comparing is up to the implementation.
pub trait RealmMatcher {
    fn is_url_on_realm(&self, url: &str, realm: &Realm) -> bool;
}

/// Plain string-prefix match: `url` begins with the realm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixMatcher;

impl RealmMatcher for PrefixMatcher {
    fn is_url_on_realm(&self, url: &str, realm: &Realm) -> bool {
        !realm.0.is_empty() && url.starts_with(realm.as_str())
    }
}

impl<F> RealmMatcher for F
where
    F: Fn(&str, &Realm) -> bool,
{
    fn is_url_on_realm(&self, url: &str, realm: &Realm) -> bool {
        self(url, realm)
    }
}
