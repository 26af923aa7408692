//! Tests for encode, route and session resolution.

use super::{parse, parse_cli};
use crate::cli::{CliCommand, Session};
use narrowlink_core::config::{NarrowlinkConfig, OutputFormat};
use narrowlink_core::LinkKind;
use std::path::PathBuf;

#[test]
fn cli_parse_encode() {
    match parse(&["narrowlink", "encode", "my stream"]) {
        CliCommand::Encode { text } => assert_eq!(text, "my stream"),
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_route() {
    match parse(&["narrowlink", "route", "main"]) {
        CliCommand::Route { name } => assert_eq!(name, "main"),
        _ => panic!("expected Route"),
    }
}

#[test]
fn session_flags_override_config() {
    let cfg = NarrowlinkConfig {
        realm: Some("https://config.example.com".into()),
        directory: Some(PathBuf::from("/etc/dir.toml")),
        output: OutputFormat::Text,
    };
    let cli = parse_cli(&[
        "narrowlink",
        "--realm",
        "https://flag.example.com",
        "--json",
        "classify",
        "x",
    ]);
    let session = Session::from_config(&cli, &cfg).unwrap();
    assert_eq!(
        session.realm.as_ref().map(|r| r.as_str()),
        Some("https://flag.example.com")
    );
    assert_eq!(session.directory_path, Some(PathBuf::from("/etc/dir.toml")));
    assert_eq!(session.output, OutputFormat::Json);
}

#[test]
fn session_falls_back_to_config() {
    let cfg = NarrowlinkConfig {
        realm: Some("https://config.example.com".into()),
        directory: None,
        output: OutputFormat::Json,
    };
    let cli = parse_cli(&["narrowlink", "message-id", "x"]);
    let session = Session::from_config(&cli, &cfg).unwrap();
    let resolver = session.resolver().unwrap();
    assert_eq!(
        resolver.link_type("https://config.example.com/#narrow/is/starred"),
        LinkKind::Special
    );
    assert_eq!(session.output, OutputFormat::Json);
    assert!(session.directory().unwrap().users().is_empty());
}

#[test]
fn session_without_realm_cannot_resolve() {
    let cli = parse_cli(&["narrowlink", "classify", "x"]);
    let session = Session::from_config(&cli, &NarrowlinkConfig::default()).unwrap();
    assert!(session.resolver().is_err());
}

#[test]
fn session_rejects_invalid_realm_flag() {
    let cli = parse_cli(&["narrowlink", "--realm", "nope", "classify", "x"]);
    assert!(Session::from_config(&cli, &NarrowlinkConfig::default()).is_err());
}
