//! `narrowlink classify <url>`

use anyhow::Result;
use narrowlink_core::config::OutputFormat;

use crate::cli::Session;

pub fn run_classify(session: &Session, url: &str) -> Result<()> {
    let kind = session.resolver()?.link_type(url);
    match session.output {
        OutputFormat::Text => println!("{kind}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&kind)?),
    }
    Ok(())
}
