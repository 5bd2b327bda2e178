//! Canonical logging macros
//!
//! Every operation boundary emits the same field set: `component`, `op`,
//! `event`, plus `duration_ms` on completion and `err.kind`/`err.code` on
//! failure.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use cmdseq_core::log_op_start;
/// log_op_start!("execute");
/// log_op_start!("execute", requested_len = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__macro_support::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::__macro_support::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use cmdseq_core::log_op_end;
/// log_op_end!("execute", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::__macro_support::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::__macro_support::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// # Example
///
/// ```
/// # use cmdseq_core::{log_op_error, errors::CmdSeqError};
/// let err = CmdSeqError::UnknownCommand { name: "nope".to_string() };
/// log_op_error!("resolve", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__macro_support::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__macro_support::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::__macro_support::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
