//! `narrowlink route <name>` – unknown routes exit non-zero.

use anyhow::Result;
use narrowlink_core::config::OutputFormat;
use narrowlink_core::nav::RouteTable;

use crate::cli::Session;

pub fn run_route(session: &Session, name: &str) -> Result<()> {
    let state = RouteTable::standard().state_for_route(name)?;
    match session.output {
        OutputFormat::Text => {
            for (i, route) in state.routes.iter().enumerate() {
                let marker = if i == state.index { "*" } else { " " };
                println!("{marker} {} ({})", route.route_name, route.key);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
    }
    Ok(())
}
