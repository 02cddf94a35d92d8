//! Orgchart Core - in-memory organisational hierarchy kernel
//!
//! This crate owns every rule about who may report to whom:
//! - Closed role model (`Role`) and the employee entity
//! - The reporting eligibility table, quotas and singleton caps (`policy`)
//! - The directory registry with its reverse reportee index (`ops::Directory`)
//! - Employee construction, linking and read-side projections (`ops`)
//! - Functional command boundary (`apply`) with post-mutation validation
//! - Structured error and logging facilities
//!
//! The crate never writes to a terminal. Callers receive `EmployeeView`
//! values and typed `OrgError`s and decide how to present them.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod rules;
pub mod traversal;

// Re-export commonly used types
pub use apply::{apply, CommandOutcome};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, OrgError, OrgResult};
pub use model::{Employee, EmployeeView, Role};
pub use ops::{Directory, SharedDirectory};
pub use policy::{Ineligibility, ReportingPolicy, RoleLimits, StandardPolicy};
