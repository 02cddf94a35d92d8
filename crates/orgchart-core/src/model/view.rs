use serde::Serialize;

use super::role::Role;

/// Placeholder shown for department-agnostic employees
pub const NO_DEPARTMENT: &str = "N/A";

/// Read-only projection of an employee and its reporting position
///
/// Views are detached copies; holding one never borrows the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    pub id: String,
    pub role: Role,
    pub department: Option<String>,
    pub superior_id: Option<String>,
    pub superior_role: Option<Role>,
    pub reportee_count: usize,
}

impl EmployeeView {
    /// Department, or the `N/A` sentinel
    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or(NO_DEPARTMENT)
    }
}
