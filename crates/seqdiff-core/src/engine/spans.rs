//! Span derivation from normalized matches

use crate::model::{Match, Span, Tag};

/// Classify the gaps between consecutive matches and interleave them with
/// `Equal` spans for the matches themselves.
///
/// `matches` must be normalized (sorted, coalesced, sentinel-terminated).
pub(crate) fn spans_for_matches(matches: &[Match]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(matches.len() * 2);
    let (mut i, mut j) = (0, 0);

    for run in matches {
        let tag = match (i < run.a_start, j < run.b_start) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            spans.push(Span::new(tag, i, run.a_start, j, run.b_start));
        }
        i = run.a_end();
        j = run.b_end();
        if !run.is_empty() {
            spans.push(Span::new(Tag::Equal, run.a_start, i, run.b_start, j));
        }
    }

    spans
}
