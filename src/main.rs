use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

// Declare modules
mod client;
mod commands;
mod config;
mod domain;
mod state;
#[cfg(test)]
mod test_utils;
mod theme;
mod tui;
mod ui;

use crate::{config::ApiConfig, state::App};

// LazyLedger version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// LazyLedger - Terminal UI for an expense-tracking ledger API
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Base URL of the ledger API. Overrides the LAZYLEDGER_API_URL
    /// environment variable; defaults to http://localhost:8080/api.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    color_eyre::install()?;

    let config = ApiConfig::resolve(cli.api_url);
    tracing::info!(base_url = %config.base_url, "starting lazyledger");

    let mut terminal = tui::init()?;
    let mut app = App::new(config)?;
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Sets up file-based tracing when LAZYLEDGER_LOG points at a log file.
///
/// The terminal runs in raw mode, so writing log lines to stderr would
/// corrupt the UI. Logging stays off unless explicitly requested.
fn init_tracing() {
    let Ok(path) = std::env::var("LAZYLEDGER_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
}
