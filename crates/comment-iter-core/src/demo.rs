//! Client traversal
//!
//! Builds the sample aggregate and walks it with `has_next`/`next`, writing
//! a summary line followed by each comment's text.

use crate::comment::{Comment, CommentAggregate};
use crate::error::Result;
use crate::pattern::{Aggregate, ElementIterator};
use std::io::Write;

/// The three sample comments
pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment::new("text1", "name1"),
        Comment::new("text2", "name2"),
        Comment::new("text3", "name3"),
    ]
}

/// An aggregate holding [`sample_comments`] in order
pub fn sample_aggregate() -> CommentAggregate {
    let mut aggregate = CommentAggregate::new();
    for comment in sample_comments() {
        aggregate.add(comment);
    }
    aggregate
}

/// Summary line reporting the live count
pub fn summary_line(count: usize) -> String {
    format!("Aggregate has {} comments.", count)
}

/// Write the summary, then one line per comment text in traversal order
pub fn print_traversal<W: Write>(aggregate: &CommentAggregate, out: &mut W) -> Result<()> {
    writeln!(out, "{}", summary_line(aggregate.count()))?;

    let mut iterator = aggregate.iterator();
    while iterator.has_next() {
        let comment = iterator.next()?;
        writeln!(out, "{}", comment.text())?;
    }

    Ok(())
}

/// Write the aggregate as a JSON array of `{ text, name }` objects
pub fn print_json<W: Write>(aggregate: &CommentAggregate, out: &mut W) -> Result<()> {
    writeln!(out, "{}", aggregate.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(aggregate: &CommentAggregate) -> String {
        let mut buf = Vec::new();
        print_traversal(aggregate, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sample_scenario() {
        let aggregate = sample_aggregate();
        assert_eq!(aggregate.count(), 3);
        assert_eq!(
            render(&aggregate),
            "Aggregate has 3 comments.\ntext1\ntext2\ntext3\n"
        );
    }

    #[test]
    fn test_empty_traversal() {
        assert_eq!(render(&CommentAggregate::new()), "Aggregate has 0 comments.\n");
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        print_json(&sample_aggregate(), &mut buf).unwrap();
        let parsed: Vec<Comment> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample_comments());
    }
}
