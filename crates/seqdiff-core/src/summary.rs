//! Item counts per edit kind, plus a one-line human rendering.

use crate::model::{Span, Tag};
use serde::{Deserialize, Serialize};

/// How many items each kind of edit touches.
///
/// Counts are in items, not spans. Replacements count both sides since
/// they may differ in length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Items shared by A and B
    pub equal: usize,
    /// Items only in B
    pub inserted: usize,
    /// Items only in A
    pub deleted: usize,
    /// A-side items of replace spans
    pub replaced_from: usize,
    /// B-side items of replace spans
    pub replaced_to: usize,
    /// Number of non-equal spans
    pub changes: usize,
}

impl DiffSummary {
    /// Tally a span list as returned by [`Diff::spans`](crate::Diff::spans).
    pub fn from_spans(spans: &[Span]) -> Self {
        let mut summary = Self::default();
        for span in spans {
            match span.tag {
                Tag::Equal => summary.equal += span.quad.a_len(),
                Tag::Insert => summary.inserted += span.quad.b_len(),
                Tag::Delete => summary.deleted += span.quad.a_len(),
                Tag::Replace => {
                    summary.replaced_from += span.quad.a_len();
                    summary.replaced_to += span.quad.b_len();
                }
            }
            if span.tag != Tag::Equal {
                summary.changes += 1;
            }
        }
        summary
    }

    /// True when the spans describe no change at all.
    pub fn is_unchanged(&self) -> bool {
        self.changes == 0
    }
}

/// Render a summary as a single line, e.g.
/// `"4 equal, 1 inserted, 2 deleted, 1 replaced by 2 (3 changes)"`.
pub fn render_summary(summary: &DiffSummary) -> String {
    if summary.is_unchanged() {
        return format!("{} equal, no changes", summary.equal);
    }
    let mut parts = vec![format!("{} equal", summary.equal)];
    if summary.inserted > 0 {
        parts.push(format!("{} inserted", summary.inserted));
    }
    if summary.deleted > 0 {
        parts.push(format!("{} deleted", summary.deleted));
    }
    if summary.replaced_from > 0 {
        parts.push(format!(
            "{} replaced by {}",
            summary.replaced_from, summary.replaced_to
        ));
    }
    let noun = if summary.changes == 1 { "change" } else { "changes" };
    format!("{} ({} {})", parts.join(", "), summary.changes, noun)
}
