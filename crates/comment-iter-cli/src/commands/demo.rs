//! Demo command
//!
//! Add the configured comments to an aggregate and walk it with its iterator.

use anyhow::{Context, Result};
use comment_iter_core::config::Config;
use comment_iter_core::demo::print_traversal;
use std::io::Write;

/// Execute the demo command
pub fn execute(config: &Config) -> Result<()> {
    let aggregate = config.aggregate();
    tracing::info!("Traversing {} comments", aggregate.count());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_traversal(&aggregate, &mut out).context("Failed to print traversal")?;
    out.flush()?;

    Ok(())
}
