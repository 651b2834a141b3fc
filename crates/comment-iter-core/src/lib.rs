//! comment-iter-core - Core library for comment-iter
//!
//! This crate provides the Aggregate/Iterator abstractions, the comment
//! collection that implements them, configuration loading, and the client
//! traversal used by the CLI.

pub mod error;
pub mod config;
pub mod pattern;
pub mod comment;
pub mod demo;

pub use error::{IterError, Result};
pub use pattern::{Aggregate, ElementIterator, Elements};
pub use comment::{Comment, CommentAggregate, CommentIterator, SharedCommentAggregate};
