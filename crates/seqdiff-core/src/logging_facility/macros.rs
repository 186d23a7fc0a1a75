//! Operation boundary macros
//!
//! Every event carries `component` (the calling module), `op` and `event`;
//! extra `key = value` fields are passed straight through to `tracing`.

/// Log the `start` boundary of an operation.
///
/// ```
/// # use seqdiff_core::log_op_start;
/// log_op_start!("diff.spans");
/// log_op_start!("diff.spans", a_len = 4, b_len = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the `end` boundary of an operation; `duration_ms` is required.
///
/// ```
/// # use seqdiff_core::log_op_end;
/// log_op_end!("diff.spans", duration_ms = 3, span_count = 5);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log the `end_error` boundary of an operation.
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind and stable code land in `err.kind` / `err.code`.
///
/// ```
/// # use seqdiff_core::{log_op_error, errors::DiffError};
/// log_op_error!("tag_conversion", DiffError::InvalidTag { value: 9 }, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
