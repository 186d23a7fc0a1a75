//! seqdiff core - longest-matching-block sequence diff engine
//!
//! This crate compares two ordered sequences and reports the edits
//! (equal / insert / delete / replace) that turn the first into the second,
//! using the recursive longest-common-run strategy of classic line diff
//! tools. It provides:
//! - [`Diff`], one generic engine with two façades: [`Diff::new`] for
//!   directly comparable elements and [`Diff::with_key`] for a key function
//! - Tagged index spans ([`Span`]) and borrowed item blocks ([`Block`])
//! - Configurable popularity pruning ([`config::DiffOptions`])
//! - Structured logging via `tracing` and a canonical error facility
//! - Plain-text rendering and summaries for presentation layers
//!
//! ```
//! use seqdiff_core::{render, Diff};
//!
//! let a = [1, 2, 3, 4, 5, 6];
//! let b = [2, 3, 5, 7];
//! let diff = Diff::new(&a, &b);
//! assert_eq!(
//!     render::block_lines(&diff.blocks(), " "),
//!     ["- 1", "= 2 3", "- 4", "= 5", "% 7"]
//! );
//! ```

pub use seqdiff_core_types as core_types;

pub mod config;
pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod summary;

// Re-export commonly used types
pub use config::{DiffOptions, PopularityPolicy};
pub use engine::equivalence::{ByKey, ByValue, Equivalence};
pub use engine::Diff;
pub use errors::{DiffError, ExError, ExErrorKind, Result};
pub use model::{Block, Match, Quad, Span, Tag};
pub use summary::{render_summary, DiffSummary};
