//! `narrowlink narrow <url>` – an unresolvable link is reported, not an error.

use anyhow::Result;
use narrowlink_core::config::OutputFormat;

use crate::cli::Session;

pub fn run_narrow(session: &Session, url: &str) -> Result<()> {
    let resolver = session.resolver()?;
    let directory = session.directory()?;
    let narrow = resolver.narrow(url, &directory, &directory);
    match (session.output, narrow) {
        (OutputFormat::Text, Some(narrow)) => println!("{narrow}"),
        (OutputFormat::Text, None) => println!("no narrow"),
        (OutputFormat::Json, narrow) => println!("{}", serde_json::to_string(&narrow)?),
    }
    Ok(())
}
