//! Match normalization
//!
//! Turns the unordered runs from the match finder into the sorted,
//! coalesced list the span builder walks, terminated by a zero-length
//! sentinel at `(len(A), len(B))`.

use crate::model::Match;

/// Sort `matches`, merge runs that continue each other on both axes, and
/// append the end-of-input sentinel.
pub(crate) fn normalize_matches(mut matches: Vec<Match>, a_len: usize, b_len: usize) -> Vec<Match> {
    matches.sort_unstable();

    let mut normalized = Vec::with_capacity(matches.len() + 1);
    let mut current = Match::default();
    for run in matches {
        if current.a_end() == run.a_start && current.b_end() == run.b_start {
            current.length += run.length;
        } else {
            if !current.is_empty() {
                normalized.push(current);
            }
            current = run;
        }
    }
    if !current.is_empty() {
        normalized.push(current);
    }

    normalized.push(Match::new(a_len, b_len, 0));
    normalized
}
