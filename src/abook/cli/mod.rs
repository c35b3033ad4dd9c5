mod args;
mod print;
mod repl;
mod styles;

use abook::book::AddressBook;
use abook::config::AppConfig;
use abook::dispatch::Dispatcher;
use abook::error::Result;
use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config = load_config(&cli)?;
    debug!(?config, "configuration loaded");

    let dispatcher = Dispatcher::new()?;
    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(
        stdin.lock(),
        &mut stdout.lock(),
        &mut book,
        &dispatcher,
        &config,
    )
}

/// Logs go to stderr so they never interleave with REPL output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// An explicit `--config` must load; the default location falls back to defaults.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    if let Some(path) = &cli.config {
        return AppConfig::load_file(path);
    }

    let Some(dirs) = ProjectDirs::from("com", "abook", "abook") else {
        return Ok(AppConfig::default());
    };

    match AppConfig::load(dirs.config_dir()) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(error = %e, "ignoring unreadable config, using defaults");
            Ok(AppConfig::default())
        }
    }
}
