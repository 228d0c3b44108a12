mod aggregate;
mod bot;
mod categorize;
mod classify;
mod config;
mod db;
mod export;
mod extract;
mod models;
mod reflect;
mod run;
mod ui;
mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;

    // The TUI owns the terminal, so its logs go to a file instead of stderr.
    let log_file = (args.len() == 1).then_some(config.log_path.as_path());
    init_logger(config.log_level, log_file)?;

    let db = db::Database::open(&config.db_path)?;
    let bot = bot::Bot::new(db)?;

    match args.len() {
        1 => run::as_tui(&bot, &config),
        2.. => run::as_cli(&args, &bot, &config),
        _ => {
            eprintln!("Usage: finbot [command]");
            Ok(())
        }
    }
}

fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
