//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Sequence sizes
pub const FIELD_A_LEN: &str = "a_len";
pub const FIELD_B_LEN: &str = "b_len";

// Result sizes
pub const FIELD_SPAN_COUNT: &str = "span_count";
pub const FIELD_BLOCK_COUNT: &str = "block_count";

// Index construction
pub const FIELD_INDEXED: &str = "indexed";
pub const FIELD_PRUNED: &str = "pruned";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_DIFF_NEW: &str = "diff.new";
pub const OP_DIFF_SPANS: &str = "diff.spans";
pub const OP_DIFF_BLOCKS: &str = "diff.blocks";
