//! `narrowlink resolve <url>` – kind, narrow and anchor in one go.

use anyhow::Result;
use narrowlink_core::config::OutputFormat;
use serde_json::json;

use crate::cli::Session;

pub fn run_resolve(session: &Session, url: &str) -> Result<()> {
    let resolver = session.resolver()?;
    let directory = session.directory()?;

    let kind = resolver.link_type(url);
    let narrow = resolver.narrow(url, &directory, &directory);
    let anchor = resolver.message_anchor(url);

    match session.output {
        OutputFormat::Text => {
            println!("kind:   {kind}");
            match &narrow {
                Some(narrow) => println!("narrow: {narrow}"),
                None => println!("narrow: (none)"),
            }
            match anchor {
                Some(id) => println!("near:   {id}"),
                None => println!("near:   (none)"),
            }
        }
        OutputFormat::Json => {
            let out = json!({
                "kind": kind,
                "narrow": narrow,
                "terms": narrow.as_ref().map(|n| n.terms()),
                "message_id": anchor.unwrap_or(0),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
