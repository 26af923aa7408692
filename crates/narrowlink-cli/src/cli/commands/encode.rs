//! `narrowlink encode <text>`

use anyhow::Result;
use narrowlink_core::config::OutputFormat;
use narrowlink_core::operand::encode_hash_component;

use crate::cli::Session;

pub fn run_encode(session: &Session, text: &str) -> Result<()> {
    let encoded = encode_hash_component(text);
    match session.output {
        OutputFormat::Text => println!("{encoded}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&encoded)?),
    }
    Ok(())
}
