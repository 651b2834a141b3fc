//! Comment collection module
//!
//! The comment record, the aggregate that stores comments, and the cursors
//! that traverse it.

pub mod model;
pub mod aggregate;
pub mod iterator;
pub mod shared;

pub use model::Comment;
pub use aggregate::CommentAggregate;
pub use iterator::CommentIterator;
pub use shared::{SharedCommentAggregate, SharedCommentIterator};
