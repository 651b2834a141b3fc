//! Get command
//!
//! Print a single comment by its 0-based index.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use comment_iter_core::config::Config;

/// Arguments for the get command
#[derive(Debug, Args)]
pub struct GetArgs {
    /// 0-based index; anything outside the aggregate is an error
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

/// Execute the get command
pub fn execute(args: GetArgs, config: &Config) -> Result<()> {
    let aggregate = config.aggregate();
    let comment = aggregate
        .comment_at_offset(args.index)
        .with_context(|| format!("Failed to read comment {}", args.index))?;

    println!("{} {}", format!("{}:", comment.name()).bold(), comment.text());
    Ok(())
}
