//! Read-only user and stream lookup tables supplied by the caller.
//!
//! The resolver only ever does point lookups by numeric id. Any map keyed by
//! id works; [`Directory`] is an owned snapshot that can be loaded from disk.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type UserId = u64;
pub type StreamId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    pub stream_id: StreamId,
    pub name: String,
}

/// Point lookup of users by id.
pub trait UserDirectory {
    fn user(&self, id: UserId) -> Option<&User>;
}

/// Point lookup of streams by id.
pub trait StreamDirectory {
    fn stream(&self, id: StreamId) -> Option<&Stream>;
}

impl<S: std::hash::BuildHasher> UserDirectory for HashMap<UserId, User, S> {
    fn user(&self, id: UserId) -> Option<&User> {
        self.get(&id)
    }
}

impl UserDirectory for BTreeMap<UserId, User> {
    fn user(&self, id: UserId) -> Option<&User> {
        self.get(&id)
    }
}

impl<S: std::hash::BuildHasher> StreamDirectory for HashMap<StreamId, Stream, S> {
    fn stream(&self, id: StreamId) -> Option<&Stream> {
        self.get(&id)
    }
}

impl StreamDirectory for BTreeMap<StreamId, Stream> {
    fn stream(&self, id: StreamId) -> Option<&Stream> {
        self.get(&id)
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse directory TOML {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("parse directory JSON {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk form: two flat lists.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    streams: Vec<Stream>,
}

/// Owned snapshot of users and streams, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: HashMap<UserId, User>,
    streams: HashMap<StreamId, Stream>,
}

impl Directory {
    pub fn new(users: impl IntoIterator<Item = User>, streams: impl IntoIterator<Item = Stream>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.user_id, u)).collect(),
            streams: streams.into_iter().map(|s| (s.stream_id, s)).collect(),
        }
    }

    /// Loads a directory file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let shown = path.display().to_string();
        let data = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: shown.clone(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file: DirectoryFile = if is_json {
            serde_json::from_str(&data).map_err(|source| DirectoryError::Json {
                path: shown.clone(),
                source,
            })?
        } else {
            toml::from_str(&data).map_err(|source| DirectoryError::Toml {
                path: shown.clone(),
                source,
            })?
        };
        tracing::debug!(
            path = %shown,
            users = file.users.len(),
            streams = file.streams.len(),
            "loaded directory"
        );
        Ok(Self::new(file.users, file.streams))
    }

    pub fn users(&self) -> &HashMap<UserId, User> {
        &self.users
    }

    pub fn streams(&self) -> &HashMap<StreamId, Stream> {
        &self.streams
    }
}

impl UserDirectory for Directory {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }
}

impl StreamDirectory for Directory {
    fn stream(&self, id: StreamId) -> Option<&Stream> {
        self.streams.get(&id)
    }
}
