//! Operation boundary macros
//!
//! Every public operation logs exactly one `start` and one terminal event
//! (`end` or `end_error`). Extra `key = value` fields are passed straight
//! through to `tracing`.

/// Log the start of an operation
///
/// ```
/// # use publisher_core::log_op_start;
/// log_op_start!("translate_edition");
/// log_op_start!("translate_edition", content_item_id = "item-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::publisher_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use publisher_core::log_op_end;
/// log_op_end!("translate_edition", duration_ms = 3);
/// log_op_end!("save_edition", duration_ms = 3, edition_id = "e1");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::publisher_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log a failed operation with its canonical error kind and code
///
/// Takes the error by value; pass a clone to keep returning the original.
///
/// ```
/// # use publisher_core::{log_op_error, errors::PublisherError};
/// let err = PublisherError::EditionNotFound { edition_id: "e1".to_string() };
/// log_op_error!("read_edition", err.clone(), duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::publisher_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
