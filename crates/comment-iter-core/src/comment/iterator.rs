//! Cursor over a borrowed comment aggregate

use super::aggregate::CommentAggregate;
use super::model::Comment;
use crate::error::Result;
use crate::pattern::ElementIterator;
use tracing::trace;

/// Forward-only cursor over a [`CommentAggregate`].
///
/// Holds a shared borrow of the aggregate, so the aggregate cannot be
/// mutated while a traversal is in progress. Once exhausted it stays
/// exhausted; call [`Aggregate::iterator`](crate::Aggregate::iterator) again
/// for a new pass.
#[derive(Debug, Clone)]
pub struct CommentIterator<'a> {
    aggregate: &'a CommentAggregate,
    position: usize,
}

impl<'a> CommentIterator<'a> {
    pub(crate) fn new(aggregate: &'a CommentAggregate) -> Self {
        Self {
            aggregate,
            position: 0,
        }
    }

    /// Number of elements already returned
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> ElementIterator for CommentIterator<'a> {
    type Item = &'a Comment;

    fn has_next(&self) -> bool {
        self.aggregate.count() > self.position
    }

    fn next(&mut self) -> Result<&'a Comment> {
        let comment = self.aggregate.comment_at(self.position)?;
        self.position += 1;
        trace!("Iterator advanced to position {}", self.position);
        Ok(comment)
    }
}
