//! school-registry binary entry point.
//!
//! Parses options, installs the tracing subscriber, then runs the menu loop
//! over locked stdin/stdout until the user exits.
//!
use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use school_registry::app::{self, AppState, Theme};
use school_registry::cli::Cli;
use school_registry::model::{Kind, RecordId};
use school_registry::store::Registry;
use school_registry::ui::Console;

/// Send diagnostics to stderr so they never mix with the menu on stdout.
fn init_tracing(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let stdout = std::io::stdout();
    let theme = if cli.no_color || !stdout.is_terminal() { Theme::plain() } else { Theme::mocha() };

    let mut state = if cli.no_seed {
        AppState::with_registry(Registry::empty())
    } else {
        AppState::new().context("seed sample records")?
    };
    for kind in Kind::ALL {
        tracing::debug!(%kind, records = state.registry.len(kind), "roster loaded");
    }
    let last_id = state.registry.last_id().map(RecordId::get);
    tracing::info!(seeded = !cli.no_seed, ?last_id, "starting");

    let mut console = Console::new(std::io::stdin().lock(), stdout.lock(), theme);
    app::run(&mut state, &mut console).context("console session")?;
    Ok(())
}
