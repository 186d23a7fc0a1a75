//! Plain-text renderers for blocks
//!
//! Each line is the tag symbol, a space, and the block's items joined by a
//! caller-chosen separator, e.g. `"% red"` or `"= fox jumped over"`.

use crate::model::{Block, Tag};
use std::fmt::Display;

fn line<T: Display>(tag: Tag, items: &[T], sep: &str) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep);
    format!("{tag} {joined}")
}

/// One line per block, using [`Block::items`] as the payload.
pub fn block_lines<T: Display>(blocks: &[Block<'_, T>], sep: &str) -> Vec<String> {
    blocks
        .iter()
        .map(|block| line(block.tag, block.items(), sep))
        .collect()
}

/// Like [`block_lines`] but skipping `Equal` blocks.
pub fn change_lines<T: Display>(blocks: &[Block<'_, T>], sep: &str) -> Vec<String> {
    blocks
        .iter()
        .filter(|block| block.tag != Tag::Equal)
        .map(|block| line(block.tag, block.items(), sep))
        .collect()
}

/// Changes only, with every `Replace` block written as a `-` line for its
/// A items followed by a `+` line for its B items.
pub fn split_change_lines<T: Display>(blocks: &[Block<'_, T>], sep: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        match block.tag {
            Tag::Equal => {}
            Tag::Replace => {
                lines.push(line(Tag::Delete, block.a_items, sep));
                lines.push(line(Tag::Insert, block.b_items, sep));
            }
            tag => lines.push(line(tag, block.items(), sep)),
        }
    }
    lines
}
