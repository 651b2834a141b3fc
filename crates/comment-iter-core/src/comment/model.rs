//! Comment data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A comment: its text and the name of whoever wrote it.
///
/// Immutable once built; fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    text: String,
    name: String,
}

impl Comment {
    /// Create a comment. Empty strings are accepted.
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
        }
    }

    /// Comment body
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Author name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new("text1", "name1");
        assert_eq!(comment.text(), "text1");
        assert_eq!(comment.name(), "name1");
    }

    #[test]
    fn test_empty_fields_allowed() {
        let comment = Comment::new("", "");
        assert!(comment.text().is_empty());
        assert!(comment.name().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Comment::new("looks good", "alice").to_string(), "alice: looks good");
    }

    #[test]
    fn test_comment_serialization() {
        let comment = Comment::new("text1", "name1");
        let json = serde_json::to_string(&comment).unwrap();
        assert_eq!(json, r#"{"text":"text1","name":"name1"}"#);
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }
}
