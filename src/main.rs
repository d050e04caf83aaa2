//! previewdeck binary entry point

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use previewdeck::app::App;
use previewdeck::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "previewdeck",
    about = "Terminal control panel for a live client-window thumbnail manager"
)]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append structured logs to this file. The terminal is taken over by
    /// the UI, so without this flag logging is off.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Color theme override
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    tracing::info!(
        theme = %config.theme,
        clients = config.clients.len(),
        "starting previewdeck"
    );

    App::new(config).run()
}
