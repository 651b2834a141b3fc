//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod demo;
pub mod get;
pub mod list;

use anyhow::Context;
use clap::{Parser, Subcommand};
use comment_iter_core::config::Config;

/// comment-iter - traverse a comment aggregate through its iterator
#[derive(Debug, Parser)]
#[command(name = "comment-iter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COMMENT_ITER_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the comment count and every comment text in order (default)
    Demo,

    /// Print the comment at an index
    Get(get::GetArgs),

    /// List all comments with their authors
    List(list::ListArgs),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::execute(&config),
        Commands::Get(args) => get::execute(args, &config),
        Commands::List(args) => list::execute(args, &config),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
