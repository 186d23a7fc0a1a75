//! Sequence diff engine.
//!
//! A [`Diff`] borrows two sequences, indexes the second one once, and then
//! answers [`Diff::spans`] / [`Diff::blocks`] on demand. Each call runs the
//! same pipeline:
//!
//! ```text
//! index (built once) -> find_matches -> normalize_matches -> spans_for_matches -> blocks
//! ```
//!
//! ## Entry points
//!
//! ```
//! use seqdiff_core::Diff;
//!
//! let a = ["foo", "bar", "baz", "quux"];
//! let b = ["foo", "baz", "bar", "quux"];
//! let diff = Diff::new(&a, &b);
//! let rendered: Vec<String> = diff
//!     .blocks()
//!     .iter()
//!     .map(|block| format!("{} {}", block.tag, block.items().join(" ")))
//!     .collect();
//! assert_eq!(rendered, ["= foo", "+ baz", "= bar", "- baz", "= quux"]);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs always produce identical spans.
//! - **Partition**: spans cover both sequences contiguously, in order.
//! - **Bounded stack**: windows are processed from an explicit worklist.

pub mod equivalence;
mod index;
mod matcher;
mod normalize;
mod spans;

use crate::config::DiffOptions;
use crate::core_types::schema::{OP_DIFF_BLOCKS, OP_DIFF_NEW, OP_DIFF_SPANS};
use crate::errors::{DiffError, ExError, ExErrorKind, Result};
use crate::model::{Block, Match, Span};
use crate::{log_op_end, log_op_error, log_op_start};
use equivalence::{ByKey, ByValue, Equivalence};
use index::{build_index, PositionIndex};
use normalize::normalize_matches;
use spans::spans_for_matches;
use std::hash::Hash;
use std::time::Instant;

/// Diff engine over two borrowed sequences.
///
/// `E` decides element identity: [`ByValue`] for directly comparable
/// elements, [`ByKey`] for a caller-supplied key function.
pub struct Diff<'a, T, E>
where
    T: 'a,
    E: Equivalence<'a, T>,
{
    a: &'a [T],
    b: &'a [T],
    equivalence: E,
    index: PositionIndex<E::Key>,
}

impl<'a, T> Diff<'a, T, ByValue>
where
    T: Eq + Hash + 'a,
{
    /// Diff two sequences of directly comparable elements.
    ///
    /// Elements that are very frequent in a long `b` are left out of the
    /// index (see [`PopularityPolicy`](crate::config::PopularityPolicy)).
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_options(a, b, ByValue, DiffOptions::pruned())
    }
}

impl<'a, T, K, F> Diff<'a, T, ByKey<F>>
where
    T: 'a,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    /// Diff two sequences whose elements are equal when their keys are.
    ///
    /// No popularity pruning is applied.
    pub fn with_key(a: &'a [T], b: &'a [T], key_fn: F) -> Self {
        Self::with_options(a, b, ByKey::new(key_fn), DiffOptions::unpruned())
    }
}

impl<'a, T, E> Diff<'a, T, E>
where
    T: 'a,
    E: Equivalence<'a, T>,
{
    /// Build an engine with an explicit equivalence strategy and options.
    ///
    /// Construction never fails; options are expected to be validated
    /// already (see [`DiffOptions::validate`]). A zero popularity divisor
    /// simply disables pruning.
    pub fn with_options(a: &'a [T], b: &'a [T], equivalence: E, options: DiffOptions) -> Self {
        log_op_start!(OP_DIFF_NEW, a_len = a.len(), b_len = b.len());
        let start = Instant::now();

        let (index, stats) = build_index(b, &equivalence, &options.popularity);

        log_op_end!(
            OP_DIFF_NEW,
            duration_ms = start.elapsed().as_millis() as u64,
            indexed = stats.indexed,
            pruned = stats.pruned
        );

        Self {
            a,
            b,
            equivalence,
            index,
        }
    }

    /// The first (old) sequence
    pub fn a(&self) -> &'a [T] {
        self.a
    }

    /// The second (new) sequence
    pub fn b(&self) -> &'a [T] {
        self.b
    }

    /// Normalized matching runs, sorted and coalesced, ending with the
    /// zero-length sentinel `(len(A), len(B), 0)`.
    pub fn matches(&self) -> Vec<Match> {
        normalize_matches(self.find_matches(), self.a.len(), self.b.len())
    }

    /// Ordered edit spans turning A into B.
    ///
    /// Index ranges only; use [`Diff::blocks`] for the items.
    pub fn spans(&self) -> Vec<Span> {
        log_op_start!(OP_DIFF_SPANS, a_len = self.a.len(), b_len = self.b.len());
        let start = Instant::now();

        let spans = spans_for_matches(&self.matches());

        log_op_end!(
            OP_DIFF_SPANS,
            duration_ms = start.elapsed().as_millis() as u64,
            span_count = spans.len()
        );
        spans
    }

    /// Ordered edit blocks turning A into B, borrowing items from both inputs.
    ///
    /// # Panics
    ///
    /// Panics if a computed span does not fit the inputs. That would be an
    /// engine defect; it is logged as an `ERR_INTERNAL` `end_error` event
    /// first.
    pub fn blocks(&self) -> Vec<Block<'a, T>> {
        log_op_start!(OP_DIFF_BLOCKS, a_len = self.a.len(), b_len = self.b.len());
        let start = Instant::now();

        let spans = spans_for_matches(&self.matches());
        let mut blocks = Vec::with_capacity(spans.len());
        for span in &spans {
            match self.block_for(span) {
                Ok(block) => blocks.push(block),
                Err(err) => {
                    let defect = invalid_span_defect(err);
                    log_op_error!(
                        OP_DIFF_BLOCKS,
                        defect.clone(),
                        duration_ms = start.elapsed().as_millis() as u64
                    );
                    panic!("{defect}");
                }
            }
        }

        log_op_end!(
            OP_DIFF_BLOCKS,
            duration_ms = start.elapsed().as_millis() as u64,
            block_count = blocks.len()
        );
        blocks
    }

    /// Materialize one span against this engine's inputs.
    ///
    /// End indices equal to a sequence's length are valid.
    ///
    /// # Errors
    ///
    /// `SpanOutOfBounds` if either range is inverted or ends past its
    /// sequence.
    pub fn block_for(&self, span: &Span) -> Result<Block<'a, T>> {
        let (a, b) = (self.a, self.b);
        let out_of_bounds = || DiffError::SpanOutOfBounds {
            span: span.to_string(),
            a_len: a.len(),
            b_len: b.len(),
        };
        let a_items = a.get(span.a_range()).ok_or_else(out_of_bounds)?;
        let b_items = b.get(span.b_range()).ok_or_else(out_of_bounds)?;
        Ok(Block::new(span.tag, a_items, b_items))
    }
}

/// Wrap a bounds failure on the engine's own span as an internal error.
fn invalid_span_defect(err: DiffError) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(OP_DIFF_BLOCKS)
        .with_message("engine produced a span outside its inputs")
        .with_source(err.into())
}

impl<'a, T, E> std::fmt::Debug for Diff<'a, T, E>
where
    T: 'a,
    E: Equivalence<'a, T> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diff")
            .field("a_len", &self.a.len())
            .field("b_len", &self.b.len())
            .field("equivalence", &self.equivalence)
            .field("indexed", &self.index.len())
            .finish()
    }
}
