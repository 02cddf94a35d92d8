//! Functional-boundary apply function
//!
//! `apply()` is the entry point the CLI drives. A command either succeeds and
//! leaves a directory that passes [`validate_directory`], or fails and leaves
//! the directory exactly as it was.
//!
//! ```
//! use orgchart_core::{apply, Command, CommandOutcome, Directory, StandardPolicy};
//!
//! let mut directory = Directory::new();
//! let cmd = Command::EmployeeAdd {
//!     id: "E1".to_string(),
//!     role: "Founder".to_string(),
//!     department: None,
//!     superior_id: None,
//! };
//!
//! let CommandOutcome::Added(view) = apply(&mut directory, cmd, &StandardPolicy::default()).unwrap();
//! assert_eq!(view.id, "E1");
//! ```

use std::time::Instant;

use crate::commands::Command;
use crate::errors::OrgResult;
use crate::log_op_error;
use crate::model::EmployeeView;
use crate::ops::{directory_ops, Directory};
use crate::policy::ReportingPolicy;
use crate::rules::validate_directory;

/// Result of a successfully applied command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added(EmployeeView),
}

/// Apply a command to a directory
///
/// If the command succeeds but the resulting directory fails validation, the
/// employee it committed is taken back out and the validation error returned.
/// The rollback is logged as an `end_error` event for the command.
///
/// # Errors
/// Any error from the underlying operation, or the first invariant
/// violation found by [`validate_directory`].
pub fn apply(
    directory: &mut Directory,
    cmd: Command,
    policy: &dyn ReportingPolicy,
) -> OrgResult<CommandOutcome> {
    let op = cmd.op_name();
    let start = Instant::now();

    let outcome = match cmd {
        Command::EmployeeAdd {
            id,
            role,
            department,
            superior_id,
        } => directory_ops::add_employee(
            directory,
            policy,
            &id,
            &role,
            department.as_deref(),
            superior_id.as_deref(),
        )
        .map(CommandOutcome::Added)?,
    };

    if let Err(e) = validate_directory(directory, policy) {
        let CommandOutcome::Added(ref view) = outcome;
        directory.uncommit(&view.id);
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            employee_id = view.id.as_str()
        );
        return Err(e);
    }

    Ok(outcome)
}
