//! Longest-common-run search
//!
//! [`Diff::longest_match`] finds the best run inside one window;
//! [`Diff::find_matches`] applies it over an explicit worklist of windows
//! so that call-stack depth never depends on the input.

use super::equivalence::Equivalence;
use super::Diff;
use crate::model::{Match, Quad};
use std::collections::HashMap;

impl<'a, T, E> Diff<'a, T, E>
where
    T: 'a,
    E: Equivalence<'a, T>,
{
    /// Longest run of equal elements inside `window`.
    ///
    /// Candidate runs come only from indexed positions; among equally long
    /// runs the first one found scanning A left to right wins. The winner is
    /// then extended one element at a time in both directions while it stays
    /// inside the window, which also picks up elements missing from the
    /// index. Returns a zero-length match at the window origin when nothing
    /// matches.
    pub(crate) fn longest_match(&self, window: Quad) -> Match {
        let (a, b) = (self.a, self.b);
        let Quad {
            a_start,
            a_end,
            b_start,
            b_end,
        } = window;

        let mut best = Match::new(a_start, b_start, 0);
        // Run length ending at (i - 1, j), keyed by j.
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();
        let mut next_run_lengths: HashMap<usize, usize> = HashMap::new();

        for i in a_start..a_end {
            next_run_lengths.clear();
            if let Some(positions) = self.index.get(&self.equivalence.key(&a[i])) {
                let first = positions.partition_point(|&j| j < b_start);
                for &j in positions[first..].iter().take_while(|&&j| j < b_end) {
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .map_or(1, |len| len + 1);
                    next_run_lengths.insert(j, k);
                    if k > best.length {
                        best = Match::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }
            std::mem::swap(&mut run_lengths, &mut next_run_lengths);
        }

        while best.a_start > a_start
            && best.b_start > b_start
            && self
                .equivalence
                .equivalent(&a[best.a_start - 1], &b[best.b_start - 1])
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.length += 1;
        }
        while best.a_end() < a_end
            && best.b_end() < b_end
            && self.equivalence.equivalent(&a[best.a_end()], &b[best.b_end()])
        {
            best.length += 1;
        }

        best
    }

    /// Every run found by divide-and-conquer over the whole input, unsorted.
    ///
    /// Each run splits its window into a left and a right sub-window; only
    /// sub-windows that are non-empty on both axes are searched further.
    pub(crate) fn find_matches(&self) -> Vec<Match> {
        let mut worklist = vec![Quad::new(0, self.a.len(), 0, self.b.len())];
        let mut found = Vec::new();
        let mut windows = 0usize;

        while let Some(window) = worklist.pop() {
            windows += 1;
            let run = self.longest_match(window);
            if run.is_empty() {
                continue;
            }
            found.push(run);
            if window.a_start < run.a_start && window.b_start < run.b_start {
                worklist.push(Quad::new(
                    window.a_start,
                    run.a_start,
                    window.b_start,
                    run.b_start,
                ));
            }
            if run.a_end() < window.a_end && run.b_end() < window.b_end {
                worklist.push(Quad::new(
                    run.a_end(),
                    window.a_end,
                    run.b_end(),
                    window.b_end,
                ));
            }
        }

        tracing::trace!(windows, matches = found.len(), "match search finished");
        found
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Match, Quad};
    use crate::Diff;

    #[test]
    fn test_longest_match_over_full_window() {
        let a = [1, 2, 3, 4, 5, 6];
        let b = [2, 3, 5, 7];
        let diff = Diff::new(&a, &b);
        assert_eq!(
            diff.longest_match(Quad::new(0, a.len(), 0, b.len())),
            Match::new(1, 0, 2)
        );
    }

    #[test]
    fn test_longest_match_first_of_equal_length_wins() {
        // "ab" occurs twice in B; the scan meets a[0] = 'a' first and the
        // earliest B position reaches length 2 first.
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "xabyab".chars().collect();
        let diff = Diff::new(&a, &b);
        assert_eq!(
            diff.longest_match(Quad::new(0, 2, 0, 6)),
            Match::new(0, 1, 2)
        );
    }

    #[test]
    fn test_longest_match_respects_window() {
        let a = ["q", "a", "b", "x", "c", "d"];
        let b = ["a", "b", "y", "c", "d", "f"];
        let diff = Diff::new(&a, &b);
        assert_eq!(
            diff.longest_match(Quad::new(3, 6, 2, 6)),
            Match::new(4, 3, 2)
        );
        assert_eq!(
            diff.longest_match(Quad::new(0, 1, 0, 6)),
            Match::new(0, 0, 0)
        );
    }

    #[test]
    fn test_longest_match_without_candidates_is_empty_at_origin() {
        let a = ["p", "q"];
        let b = ["r", "s"];
        let diff = Diff::new(&a, &b);
        assert_eq!(
            diff.longest_match(Quad::new(1, 2, 1, 2)),
            Match::new(1, 1, 0)
        );
    }

    #[test]
    fn test_extension_recovers_pruned_elements() {
        // 300 blank lines in B make "" popular (limit 4), so it is never an
        // anchor, but the blank neighbours of the anchored "x" still join
        // the run through extension.
        let mut b: Vec<&str> = vec![""; 300];
        b[150] = "x";
        let a = vec!["", "x", ""];
        let diff = Diff::new(&a, &b);
        assert_eq!(
            diff.longest_match(Quad::new(0, 3, 0, 300)),
            Match::new(0, 149, 3)
        );
    }

    #[test]
    fn test_find_matches_on_reversed_input() {
        let a: Vec<u32> = (0..5000).collect();
        let b: Vec<u32> = (0..5000).rev().collect();
        let diff = Diff::new(&a, &b);
        let matches = diff.find_matches();
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|m| m.length == 1));
    }

    /// Run lengths of a perfect binary tree of `depth` levels, in order:
    /// every subtree's root run is strictly longer than anything beside it.
    fn nested_run_lengths(depth: usize) -> Vec<usize> {
        if depth == 0 {
            return Vec::new();
        }
        let side = nested_run_lengths(depth - 1);
        let mut lengths = side.clone();
        lengths.push(depth);
        lengths.extend(side);
        lengths
    }

    #[test]
    fn test_find_matches_splits_into_nested_windows() {
        // Shared runs separated by markers that differ between A and B, so
        // each window's longest run sits in its middle and both sub-windows
        // stay non-empty down to the leaves.
        let lengths = nested_run_lengths(10);
        let (mut a, mut b) = (Vec::new(), Vec::new());
        let mut next = 0u32;
        for (k, &len) in lengths.iter().enumerate() {
            a.push(1_000_000 + k as u32);
            b.push(2_000_000 + k as u32);
            for _ in 0..len {
                a.push(next);
                b.push(next);
                next += 1;
            }
        }
        a.push(1_000_000 + lengths.len() as u32);
        b.push(2_000_000 + lengths.len() as u32);

        let diff = Diff::new(&a, &b);
        let mut matches = diff.find_matches();
        assert_eq!(matches.len(), 1023);

        matches.sort();
        let found: Vec<usize> = matches.iter().map(|m| m.length).collect();
        assert_eq!(found, lengths);
        assert!(matches.iter().all(|m| m.a_start == m.b_start));
    }

    #[test]
    fn test_find_matches_on_empty_input() {
        let empty: [u8; 0] = [];
        assert!(Diff::new(&empty, &[1u8, 2]).find_matches().is_empty());
        assert!(Diff::new(&[1u8], &empty).find_matches().is_empty());
    }
}
