//! List command
//!
//! Print every comment with its author, as text or JSON.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use comment_iter_core::config::{Config, OutputFormat};
use comment_iter_core::demo::print_json;
use comment_iter_core::Aggregate;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output as JSON regardless of configuration
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> Result<()> {
    let aggregate = config.aggregate();

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match format {
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            print_json(&aggregate, &mut stdout.lock()).context("Failed to write JSON")?;
        }
        OutputFormat::Text => {
            if aggregate.is_empty() {
                eprintln!("{}", "No comments.".yellow());
            }
            for (index, comment) in aggregate.elements().enumerate() {
                println!(
                    "{} {} {}",
                    format!("[{}]", index).dimmed(),
                    format!("{}:", comment.name()).bold(),
                    comment.text()
                );
            }
        }
    }

    Ok(())
}
