//! Shared, growable comment aggregate
//!
//! [`SharedCommentAggregate`] can be appended to while a traversal is in
//! flight. Its cursor re-reads the live count and element on every call, so
//! comments added mid-traversal are visited by iterators that have not yet
//! passed the end.

use super::aggregate::CommentAggregate;
use super::model::Comment;
use crate::error::Result;
use crate::pattern::{Aggregate, ElementIterator};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Cloneable handle to a single comment aggregate
#[derive(Debug, Clone, Default)]
pub struct SharedCommentAggregate {
    inner: Rc<RefCell<CommentAggregate>>,
}

impl SharedCommentAggregate {
    /// Create an empty shared aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment, visible to every live iterator
    pub fn add(&self, comment: Comment) {
        self.inner.borrow_mut().add(comment);
    }

    /// Number of comments
    pub fn count(&self) -> usize {
        self.inner.borrow().count()
    }

    /// Clone of the comment at a 0-based index
    pub fn comment_at(&self, index: usize) -> Result<Comment> {
        self.inner.borrow().comment_at(index).cloned()
    }
}

impl From<CommentAggregate> for SharedCommentAggregate {
    fn from(aggregate: CommentAggregate) -> Self {
        Self {
            inner: Rc::new(RefCell::new(aggregate)),
        }
    }
}

impl Aggregate for SharedCommentAggregate {
    type Iter<'a> = SharedCommentIterator<'a>;

    fn iterator(&self) -> SharedCommentIterator<'_> {
        debug!("Created shared iterator over {} comments", self.count());
        SharedCommentIterator {
            aggregate: self,
            position: 0,
        }
    }
}

/// Cursor over a [`SharedCommentAggregate`].
///
/// Borrows the handle it was created from, so it cannot outlive the
/// storage. Appends made through that handle or any clone of it stay
/// visible while the cursor is live.
#[derive(Debug, Clone)]
pub struct SharedCommentIterator<'a> {
    aggregate: &'a SharedCommentAggregate,
    position: usize,
}

impl SharedCommentIterator<'_> {
    /// Number of elements already returned
    pub fn position(&self) -> usize {
        self.position
    }
}

impl ElementIterator for SharedCommentIterator<'_> {
    type Item = Comment;

    fn has_next(&self) -> bool {
        self.aggregate.count() > self.position
    }

    fn next(&mut self) -> Result<Comment> {
        let comment = self.aggregate.comment_at(self.position)?;
        self.position += 1;
        trace!("Shared iterator advanced to position {}", self.position);
        Ok(comment)
    }
}
