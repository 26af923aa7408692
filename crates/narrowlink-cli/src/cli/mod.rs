//! CLI for inspecting realm deep links.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use narrowlink_core::config::{self, NarrowlinkConfig, OutputFormat};
use narrowlink_core::directory::Directory;
use narrowlink_core::{LinkResolver, Realm};
use std::path::PathBuf;

use commands::{run_classify, run_encode, run_message_id, run_narrow, run_resolve, run_route};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "narrowlink")]
#[command(about = "Classify realm URLs and resolve them into narrows", long_about = None)]
pub struct Cli {
    /// Realm base URL, e.g. https://chat.example.com (overrides config).
    #[arg(long, global = true, value_name = "URL")]
    pub realm: Option<String>,

    /// Users/streams directory file, TOML or JSON (overrides config).
    #[arg(long, global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Print JSON instead of text (overrides config).
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the link kind of a URL.
    Classify {
        /// URL to classify.
        url: String,
    },

    /// Print the narrow a URL points at, or "no narrow".
    Narrow {
        /// URL to resolve.
        url: String,
    },

    /// Print the anchor message id of a URL (0 when none).
    MessageId {
        /// URL to inspect.
        url: String,
    },

    /// Print kind, narrow and anchor together.
    Resolve {
        /// URL to resolve.
        url: String,
    },

    /// Encode a stream or topic name the way #narrow links carry it.
    Encode {
        /// Name to encode.
        text: String,
    },

    /// Print the initial navigation state for an app route.
    Route {
        /// Route name, e.g. "main".
        name: String,
    },
}

/// Settings resolved from config file and command-line overrides.
pub struct Session {
    pub realm: Option<Realm>,
    pub directory_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Session {
    fn from_config(cli: &Cli, cfg: &NarrowlinkConfig) -> Result<Self> {
        let realm = match &cli.realm {
            Some(raw) => Some(Realm::parse(raw).with_context(|| format!("--realm {raw}"))?),
            None => cfg.realm()?,
        };
        let output = if cli.json { OutputFormat::Json } else { cfg.output };
        Ok(Self {
            realm,
            directory_path: cli.directory.clone().or_else(|| cfg.directory.clone()),
            output,
        })
    }

    pub fn resolver(&self) -> Result<LinkResolver> {
        let realm = self
            .realm
            .clone()
            .context("no realm: pass --realm or set `realm` in config.toml")?;
        Ok(LinkResolver::new(realm))
    }

    pub fn directory(&self) -> Result<Directory> {
        match &self.directory_path {
            Some(path) => Ok(Directory::load(path)?),
            None => Ok(Directory::default()),
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let session = Session::from_config(&cli, &cfg)?;

        match cli.command {
            CliCommand::Classify { url } => run_classify(&session, &url)?,
            CliCommand::Narrow { url } => run_narrow(&session, &url)?,
            CliCommand::MessageId { url } => run_message_id(&session, &url)?,
            CliCommand::Resolve { url } => run_resolve(&session, &url)?,
            CliCommand::Encode { text } => run_encode(&session, &text)?,
            CliCommand::Route { name } => run_route(&session, &name)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
