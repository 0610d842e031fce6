//! Wayfare - Travel Dashboard Terminal Surface
//!
//! Loads the dashboard's resource collections from the REST store, renders
//! every section to the terminal, then reads interaction from stdin until
//! EOF.
//!
//! # Usage
//!
//! ```bash
//! # Against the default local store
//! wayfare
//!
//! # Custom store
//! wayfare --base-url https://store.example/api
//!
//! # With config file
//! wayfare --config ~/.config/wayfare/config.toml
//!
//! # Verbose logging
//! RUST_LOG=debug wayfare
//! ```
//!
//! # Interaction
//!
//! - Any non-empty line is submitted as a search query
//! - `/nav N` selects the N-th bottom-navigation item
//! - A blank line does nothing; EOF (Ctrl-D) exits

mod surface;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wayfare_core::{load_config, load_config_from_path, App, AppEvent, HttpGateway};

use surface::TerminalSurface;

/// Wayfare - terminal surface for the travel dashboard
#[derive(Parser, Debug)]
#[command(name = "wayfare")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the resource store
    #[arg(short = 'u', long, env = "WAYFARE_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "WAYFARE_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "WAYFARE_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_config().context("loading config")?,
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    info!(base_url = %config.base_url, "starting wayfare");

    let gateway = Arc::new(HttpGateway::from_config(&config));
    let app = App::new(
        gateway,
        config.renderer(),
        Arc::new(TerminalSurface),
        &config,
    );

    let (tx, rx) = mpsc::channel(16);
    let runner = tokio::spawn(app.run(rx));

    // Stdin drives interaction: lines become search submissions, `/nav N`
    // selects a navigation item, EOF tears the event loop down.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let event = match parse_line(&line) {
            Some(event) => event,
            None => continue,
        };
        if tx.send(event).await.is_err() {
            break;
        }
    }

    debug!("stdin closed, shutting down");
    drop(tx);
    runner.await.context("event loop panicked")?;
    Ok(())
}

/// Map one input line to an interaction event.
///
/// Blank lines map to nothing, mirroring the empty-query guard on the
/// search field itself.
fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix("/nav") {
        let index = rest.trim().parse().ok()?;
        return Some(AppEvent::NavSelected { index });
    }

    Some(AppEvent::SearchSubmitted {
        query: line.to_string(),
    })
}
