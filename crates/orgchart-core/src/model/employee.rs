use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Employee - one person in the organisation
///
/// An Employee knows its superior only by id (a look-up key, never an
/// owning reference). Reportees are not stored here; the `Directory`
/// keeps the reverse index so no employee owns another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Position held
    pub role: Role,

    /// Department name; empty for department-agnostic roles
    pub department: String,

    /// Superior ID (None for top-level employees). Set at most once.
    pub superior_id: Option<String>,

    /// Timestamp when this Employee was created
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new Employee with no superior
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `role` - Position held
    /// * `department` - Department name (empty for department-agnostic roles)
    pub fn new(id: String, role: Role, department: String) -> Self {
        Self {
            id,
            role,
            department,
            superior_id: None,
            created_at: Utc::now(),
        }
    }

    /// Department, or None when the employee is department-agnostic
    pub fn department(&self) -> Option<&str> {
        if self.department.is_empty() {
            None
        } else {
            Some(&self.department)
        }
    }
}
