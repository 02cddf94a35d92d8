//! Command inventory for the `apply()` boundary

/// A directory mutation
///
/// Commands carry raw boundary input (role names as typed, optional
/// department and superior) and are processed by [`crate::apply::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new employee, optionally under a superior
    EmployeeAdd {
        id: String,
        role: String,
        department: Option<String>,
        superior_id: Option<String>,
    },
}

impl Command {
    /// Operation name used in logs and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::EmployeeAdd { .. } => "employee_add",
        }
    }

    /// Id of the employee the command targets
    pub fn employee_id(&self) -> &str {
        match self {
            Command::EmployeeAdd { id, .. } => id,
        }
    }
}
