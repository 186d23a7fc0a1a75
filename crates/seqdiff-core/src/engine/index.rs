//! B-side position index
//!
//! Maps each identity in B to the ascending positions where it occurs. The
//! match finder only proposes alignments through this map, so identities
//! pruned here never anchor a match.

use super::equivalence::Equivalence;
use crate::config::PopularityPolicy;
use std::collections::HashMap;

/// Identity → ascending positions in B.
pub(crate) type PositionIndex<K> = HashMap<K, Vec<usize>>;

/// Counts reported after building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IndexStats {
    /// Distinct identities kept in the index
    pub indexed: usize,
    /// Distinct identities removed as too popular
    pub pruned: usize,
}

/// Build the position index for `b`.
///
/// Identities occurring more often than the policy's limit for `b.len()`
/// are dropped entirely.
pub(crate) fn build_index<'a, T, E>(
    b: &'a [T],
    equivalence: &E,
    popularity: &PopularityPolicy,
) -> (PositionIndex<E::Key>, IndexStats)
where
    E: Equivalence<'a, T>,
{
    let mut index: PositionIndex<E::Key> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        index.entry(equivalence.key(item)).or_default().push(j);
    }

    let mut pruned = 0;
    if let Some(limit) = popularity.limit(b.len()) {
        let before = index.len();
        index.retain(|_, positions| positions.len() <= limit);
        pruned = before - index.len();
        if pruned > 0 {
            tracing::debug!(b_len = b.len(), limit, pruned, "dropped popular elements from index");
        }
    }

    let stats = IndexStats {
        indexed: index.len(),
        pruned,
    };
    (index, stats)
}
