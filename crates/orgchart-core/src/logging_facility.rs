//! Structured logging facility
//!
//! One initialization point (`init(profile)`) plus the operation macros
//! used around every directory mutation:
//!
//! - `log_op_start!(op, ...)` at entry
//! - `log_op_end!(op, duration_ms = ...)` on success
//! - `log_op_error!(op, err, duration_ms = ...)` on failure
//!
//! All output goes to stderr so that stdout stays reserved for the program's
//! own results.
//!
//! ```rust
//! use orgchart_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
