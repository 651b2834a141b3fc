//! comment-iter - Aggregate/Iterator demonstration CLI
//!
//! ## Quick Start
//!
//! ```bash
//! # Traverse the sample comments
//! comment-iter
//!
//! # Read one comment by index
//! comment-iter get 1
//!
//! # List comments from your own file
//! comment-iter --config comments.toml list --json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
