//! Structured logging for publisher operations
//!
//! - one initialization point, `init(profile)`
//! - `log_op_start!`, `log_op_end!` and `log_op_error!` emit the canonical
//!   `component`/`op`/`event` fields from `publisher_core_types::schema`
//! - an in-memory capture layer for asserting on events in tests
//!
//! ```rust
//! use publisher_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
