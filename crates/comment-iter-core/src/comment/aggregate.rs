//! Ordered comment container

use super::iterator::CommentIterator;
use super::model::Comment;
use crate::error::{IterError, Result};
use crate::pattern::{Aggregate, Elements};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Comments in insertion order. Duplicates are kept; nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentAggregate {
    comments: Vec<Comment>,
}

impl CommentAggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment to the end
    pub fn add(&mut self, comment: Comment) {
        self.comments.push(comment);
        debug!("Added comment #{}", self.comments.len());
    }

    /// Number of comments
    pub fn count(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Get the comment at a 0-based index
    pub fn comment_at(&self, index: usize) -> Result<&Comment> {
        self.comments
            .get(index)
            .ok_or_else(|| IterError::out_of_range(index, self.count()))
    }

    /// Get a comment by a signed index, as typed by a user.
    ///
    /// Negative indices fault like any other out-of-range index; they never
    /// count from the end.
    pub fn comment_at_offset(&self, index: i64) -> Result<&Comment> {
        let position = usize::try_from(index).map_err(|_| IterError::OutOfRange {
            index,
            count: self.count(),
        })?;
        self.comment_at(position)
    }

    /// Render all comments as a pretty JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Aggregate for CommentAggregate {
    type Iter<'a> = CommentIterator<'a>;

    fn iterator(&self) -> CommentIterator<'_> {
        debug!("Created iterator over {} comments", self.count());
        CommentIterator::new(self)
    }
}

impl FromIterator<Comment> for CommentAggregate {
    fn from_iter<T: IntoIterator<Item = Comment>>(iter: T) -> Self {
        let mut aggregate = Self::new();
        aggregate.extend(iter);
        aggregate
    }
}

impl Extend<Comment> for CommentAggregate {
    fn extend<T: IntoIterator<Item = Comment>>(&mut self, iter: T) {
        for comment in iter {
            self.add(comment);
        }
    }
}

impl<'a> IntoIterator for &'a CommentAggregate {
    type Item = &'a Comment;
    type IntoIter = Elements<CommentIterator<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered(n: usize) -> CommentAggregate {
        (1..=n)
            .map(|i| Comment::new(format!("text{}", i), format!("name{}", i)))
            .collect()
    }

    #[test]
    fn test_add_and_count() {
        let mut aggregate = CommentAggregate::new();
        assert!(aggregate.is_empty());

        for i in 0..5 {
            assert_eq!(aggregate.count(), i);
            aggregate.add(Comment::new("t", "n"));
        }
        assert_eq!(aggregate.count(), 5);
    }

    #[test]
    fn test_duplicates_kept() {
        let mut aggregate = CommentAggregate::new();
        aggregate.add(Comment::new("same", "same"));
        aggregate.add(Comment::new("same", "same"));
        assert_eq!(aggregate.count(), 2);
    }

    #[test]
    fn test_comment_at() {
        let aggregate = numbered(3);
        assert_eq!(aggregate.comment_at(0).unwrap().text(), "text1");
        assert_eq!(aggregate.comment_at(2).unwrap().name(), "name3");
    }

    #[test]
    fn test_comment_at_out_of_range() {
        let aggregate = numbered(3);
        let err = aggregate.comment_at(3).unwrap_err();
        assert!(matches!(err, IterError::OutOfRange { index: 3, count: 3 }));
        assert!(aggregate.comment_at(usize::MAX).is_err());
        assert!(CommentAggregate::new().comment_at(0).is_err());
    }

    #[test]
    fn test_negative_offset_faults() {
        let aggregate = numbered(3);
        let err = aggregate.comment_at_offset(-1).unwrap_err();
        assert!(matches!(err, IterError::OutOfRange { index: -1, count: 3 }));
        assert!(aggregate.comment_at_offset(3).is_err());
        assert_eq!(aggregate.comment_at_offset(1).unwrap().text(), "text2");
    }

    #[test]
    fn test_for_loop_preserves_order() {
        let aggregate = numbered(4);
        let texts: Vec<&str> = (&aggregate).into_iter().map(Comment::text).collect();
        assert_eq!(texts, vec!["text1", "text2", "text3", "text4"]);

        let mut names = Vec::new();
        for comment in &aggregate {
            names.push(comment.name());
        }
        assert_eq!(names, vec!["name1", "name2", "name3", "name4"]);
    }

    #[test]
    fn test_json() {
        let aggregate = numbered(1);
        let json = aggregate.to_json().unwrap();
        let parsed: CommentAggregate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aggregate);
        assert!(json.trim_start().starts_with('['));
    }
}
