//! Docsite - a documentation server for a fixed set of localized markdown
//! topics.

mod cli;
mod config;
mod content;
mod locale;
mod logger;
mod page;
mod render;
mod serve;
mod topics;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    serve::state::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Loaded once, immutable for the lifetime of the process
    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Serve { .. } => serve::run(&config),
    }
}
