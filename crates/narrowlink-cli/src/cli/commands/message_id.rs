//! `narrowlink message-id <url>`

use anyhow::Result;

use crate::cli::Session;

pub fn run_message_id(session: &Session, url: &str) -> Result<()> {
    println!("{}", session.resolver()?.message_id(url));
    Ok(())
}
