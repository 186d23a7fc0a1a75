//! Diff primitives: tags, windows, matches, spans and blocks.
//!
//! Everything except [`Block`] is plain `Copy` data with serde support so a
//! presentation layer can emit it directly. Blocks borrow the compared
//! sequences and only implement `Serialize`.

use crate::errors::{DiffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Kind of edit operation covered by a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Tag {
    /// Both ranges hold equal items
    #[default]
    Equal = 0,
    /// Items present only in B
    Insert = 1,
    /// Items present only in A
    Delete = 2,
    /// A-side items replaced by B-side items
    Replace = 3,
}

impl Tag {
    /// All tags in numeric order
    pub const ALL: [Tag; 4] = [Tag::Equal, Tag::Insert, Tag::Delete, Tag::Replace];

    /// Single-character symbol used when rendering diffs.
    pub fn symbol(self) -> char {
        match self {
            Tag::Equal => '=',
            Tag::Insert => '+',
            Tag::Delete => '-',
            Tag::Replace => '%',
        }
    }

    /// Parse a rendered symbol back into a tag.
    ///
    /// # Errors
    ///
    /// `InvalidSymbol` for any character other than `=`, `+`, `-`, `%`.
    pub fn from_symbol(symbol: char) -> Result<Tag> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.symbol() == symbol)
            .ok_or(DiffError::InvalidSymbol { symbol })
    }
}

impl TryFrom<u8> for Tag {
    type Error = DiffError;

    fn try_from(value: u8) -> Result<Tag> {
        Tag::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(DiffError::InvalidTag { value })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rectangular window over both sequences: `[a_start, a_end) × [b_start, b_end)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Quad {
    pub fn new(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        debug_assert!(a_start <= a_end && b_start <= b_end);
        Self {
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    pub fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    pub fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }

    /// Width on A; an inverted range counts as empty.
    pub fn a_len(&self) -> usize {
        self.a_end.saturating_sub(self.a_start)
    }

    /// Width on B; an inverted range counts as empty.
    pub fn b_len(&self) -> usize {
        self.b_end.saturating_sub(self.b_start)
    }
}

/// One aligned run: `A[a_start..a_start+length) == B[b_start..b_start+length)`.
///
/// The derived ordering compares `(a_start, b_start, length)`, which is the
/// order the normalizer sorts by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Match {
    pub a_start: usize,
    pub b_start: usize,
    pub length: usize,
}

impl Match {
    pub fn new(a_start: usize, b_start: usize, length: usize) -> Self {
        Self {
            a_start,
            b_start,
            length,
        }
    }

    /// First A index past the run
    pub fn a_end(&self) -> usize {
        self.a_start + self.length
    }

    /// First B index past the run
    pub fn b_end(&self) -> usize {
        self.b_start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// A tagged window: one edit region of the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub tag: Tag,
    #[serde(flatten)]
    pub quad: Quad,
}

impl Span {
    pub fn new(tag: Tag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            quad: Quad::new(a_start, a_end, b_start, b_end),
        }
    }

    pub fn a_range(&self) -> Range<usize> {
        self.quad.a_range()
    }

    pub fn b_range(&self) -> Range<usize> {
        self.quad.b_range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} [{}:{}] [{}:{}]>",
            self.tag, self.quad.a_start, self.quad.a_end, self.quad.b_start, self.quad.b_end
        )
    }
}

/// A span materialized as borrowed item slices of both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block<'a, T> {
    pub tag: Tag,
    pub a_items: &'a [T],
    pub b_items: &'a [T],
}

impl<'a, T> Block<'a, T> {
    pub fn new(tag: Tag, a_items: &'a [T], b_items: &'a [T]) -> Self {
        Self {
            tag,
            a_items,
            b_items,
        }
    }

    /// Payload of the block for a single merged stream.
    ///
    /// Deletions read from A; every other tag reads from B.
    pub fn items(&self) -> &'a [T] {
        match self.tag {
            Tag::Delete => self.a_items,
            _ => self.b_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_symbols() {
        let rendered: String = Tag::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, "=+-%");
    }

    #[test]
    fn test_tag_default_is_equal() {
        assert_eq!(Tag::default(), Tag::Equal);
    }

    #[test]
    fn test_tag_from_u8_rejects_out_of_range() {
        assert_eq!(Tag::try_from(3), Ok(Tag::Replace));
        assert_eq!(Tag::try_from(4), Err(DiffError::InvalidTag { value: 4 }));
        assert_eq!(
            Tag::try_from(255),
            Err(DiffError::InvalidTag { value: 255 })
        );
    }

    #[test]
    fn test_tag_from_symbol() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_symbol(tag.symbol()), Ok(tag));
        }
        assert_eq!(
            Tag::from_symbol('*'),
            Err(DiffError::InvalidSymbol { symbol: '*' })
        );
    }

    #[test]
    fn test_quad_lengths_saturate_on_inverted_ranges() {
        let quad = Quad {
            a_start: 3,
            a_end: 1,
            b_start: 0,
            b_end: 2,
        };
        assert_eq!(quad.a_len(), 0);
        assert_eq!(quad.b_len(), 2);
    }

    #[test]
    fn test_match_ordering_is_lexicographic() {
        let mut matches = vec![
            Match::new(4, 2, 1),
            Match::new(1, 0, 2),
            Match::new(1, 0, 1),
            Match::new(1, 3, 1),
        ];
        matches.sort();
        assert_eq!(
            matches,
            vec![
                Match::new(1, 0, 1),
                Match::new(1, 0, 2),
                Match::new(1, 3, 1),
                Match::new(4, 2, 1),
            ]
        );
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Tag::Delete, 3, 4, 2, 2);
        assert_eq!(span.to_string(), "<- [3:4] [2:2]>");
    }

    #[test]
    fn test_span_serializes_flat() {
        let span = Span::new(Tag::Insert, 1, 1, 1, 2);
        let json = serde_json::to_value(span).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tag": "insert",
                "a_start": 1,
                "a_end": 1,
                "b_start": 1,
                "b_end": 2
            })
        );
        let back: Span = serde_json::from_value(json).unwrap();
        assert_eq!(back, span);
    }

    #[test]
    fn test_block_items_reads_a_only_for_delete() {
        let a = [1, 2];
        let b = [3];
        assert_eq!(Block::new(Tag::Delete, &a, &b).items(), &[1, 2]);
        assert_eq!(Block::new(Tag::Replace, &a, &b).items(), &[3]);
        assert_eq!(Block::new(Tag::Equal, &a[..1], &b).items(), &[3]);
    }
}
