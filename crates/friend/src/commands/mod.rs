use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use friend_core::config::{Config, ConfigError};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

use crate::log::setup_logging;
use crate::ux::write_guidance;

pub mod chat;

/// Friend - chat with an imaginary friend hosted on Azure OpenAI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File the chat history is written to on exit.
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Write logs to the data directory. Repeat for trace level.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Resolves the loaded configuration.
///
/// Missing required variables are not an error: the guidance text is written
/// to `out` and `None` is returned so the caller can exit cleanly.
pub fn resolve_config<W: Write>(
    config: Result<Config, ConfigError>,
    out: &mut W,
) -> Result<Option<Config>> {
    match config {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::Missing(vars)) => {
            warn!(?vars, "Required configuration missing");
            write_guidance(out)?;
            Ok(None)
        }
        Err(e) => Err(e).context("Failed to load configuration"),
    }
}

pub async fn run_app() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        setup_logging(cli.verbose).context("Failed to set up logging")?;
    }

    let Some(mut config) = resolve_config(Config::from_env(), &mut io::stdout())? else {
        return Ok(());
    };

    if let Some(path) = cli.history {
        config.history_path = path;
    }

    chat::execute(config).await
}
