//! Shared realm and directory fixtures, loaded the way the CLI loads them.

use std::io::Write;

use narrowlink_core::directory::Directory;
use narrowlink_core::Realm;
use tempfile::NamedTempFile;

pub const REALM: &str = "https://chat.example.com";

const DIRECTORY_TOML: &str = r#"
[[users]]
user_id = 5
email = "a@x.com"
full_name = "Ann"

[[users]]
user_id = 9
email = "b@x.com"
full_name = "Bo"

[[streams]]
stream_id = 42
name = "general-renamed"

[[streams]]
stream_id = 7
name = "design team"
"#;

pub fn realm() -> Realm {
    Realm::parse(REALM).unwrap()
}

/// Writes the fixture directory to a temp file and loads it back.
pub fn directory() -> Directory {
    let mut f = NamedTempFile::with_suffix(".toml").unwrap();
    f.write_all(DIRECTORY_TOML.as_bytes()).unwrap();
    f.flush().unwrap();
    Directory::load(f.path()).unwrap()
}
