//! Reporting policy: the eligibility table, quotas and singleton caps
//!
//! The table below is the single source of truth for which role may report
//! to which. Both directions of the relation (who a superior accepts, who a
//! subordinate may report to) are read from it, so they cannot disagree.
//!
//! | Superior   | Accepts                 | Same department |
//! |------------|-------------------------|-----------------|
//! | Founder    | Co-Founder, Director    | no              |
//! | Co-Founder | Director                | no              |
//! | Director   | Manager                 | yes             |
//! | Manager    | Supervisor, Worker      | yes             |
//! | Supervisor | Worker (capacity 4)     | yes             |
//! | Worker     | nobody                  | n/a             |
//!
//! Workers may report to a Manager directly as well as through a
//! Supervisor. The Supervisor capacity only limits the second path.

use serde::Deserialize;

use crate::model::{Employee, Role};

/// Eligibility row: (superior, accepted subordinates, department must match)
const ELIGIBILITY: [(Role, &[Role], bool); 6] = [
    (Role::Founder, &[Role::CoFounder, Role::Director], false),
    (Role::CoFounder, &[Role::Director], false),
    (Role::Director, &[Role::Manager], true),
    (Role::Manager, &[Role::Supervisor, Role::Worker], true),
    (Role::Supervisor, &[Role::Worker], true),
    (Role::Worker, &[], false),
];

/// Subordinate roles a superior role accepts
pub fn accepted_subordinates(superior: Role) -> &'static [Role] {
    ELIGIBILITY
        .iter()
        .find(|(role, _, _)| *role == superior)
        .map(|(_, accepts, _)| *accepts)
        .unwrap_or(&[])
}

/// Superior roles a subordinate role may report to
pub fn accepted_superiors(subordinate: Role) -> Vec<Role> {
    ELIGIBILITY
        .iter()
        .filter(|(_, accepts, _)| accepts.contains(&subordinate))
        .map(|(role, _, _)| *role)
        .collect()
}

/// Whether a link under this superior role requires matching departments
pub fn requires_department_match(superior: Role) -> bool {
    ELIGIBILITY
        .iter()
        .any(|(role, _, same_dept)| *role == superior && *same_dept)
}

/// Numeric limits applied by the standard policy
///
/// Limits are fixed for the lifetime of a directory. Any field missing from
/// a configuration file falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleLimits {
    pub founder_cap: u32,
    pub cofounder_cap: u32,
    pub supervisor_capacity: usize,
}

impl Default for RoleLimits {
    fn default() -> Self {
        Self {
            founder_cap: 1,
            cofounder_cap: 2,
            supervisor_capacity: 4,
        }
    }
}

/// Why a reporting link was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ineligibility {
    /// The superior's role does not accept the subordinate's role
    RoleNotAccepted,
    /// Departments must match under this superior and do not
    DepartmentMismatch {
        superior_department: String,
        department: String,
    },
    /// The superior already holds its maximum number of reportees
    AtCapacity { capacity: usize },
}

impl std::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ineligibility::RoleNotAccepted => write!(f, "role not accepted"),
            Ineligibility::DepartmentMismatch {
                superior_department,
                department,
            } => write!(
                f,
                "department '{}' does not match '{}'",
                department, superior_department
            ),
            Ineligibility::AtCapacity { capacity } => {
                write!(f, "cannot have more than {} reportees", capacity)
            }
        }
    }
}

/// One side of a proposed reporting link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParty<'a> {
    pub role: Role,
    pub department: &'a str,
}

impl<'a> LinkParty<'a> {
    pub fn new(role: Role, department: &'a str) -> Self {
        Self { role, department }
    }

    pub fn of(employee: &'a Employee) -> Self {
        Self::new(employee.role, &employee.department)
    }
}

/// Policy trait deciding reporting links and role quotas
///
/// Implementations must be pure: the same inputs always give the same
/// answer and nothing is mutated. The directory supplies the superior's
/// current reportee count.
pub trait ReportingPolicy {
    /// Decide whether `subordinate` may report to `superior`
    ///
    /// # Errors
    /// Returns the first `Ineligibility` found, checked in the order
    /// role, department, capacity.
    fn check_link(
        &self,
        superior: LinkParty<'_>,
        superior_reportees: usize,
        subordinate: LinkParty<'_>,
    ) -> Result<(), Ineligibility>;

    /// Maximum number of employees that may ever hold `role` (None = unlimited)
    fn singleton_cap(&self, role: Role) -> Option<u32>;

    /// Maximum number of direct reportees for `role` (None = unlimited)
    fn reportee_capacity(&self, role: Role) -> Option<usize>;
}

/// The standard eligibility table with configurable limits
///
/// # Example
/// ```
/// use orgchart_core::policy::{LinkParty, ReportingPolicy, StandardPolicy};
/// use orgchart_core::Role;
///
/// let policy = StandardPolicy::default();
/// let manager = LinkParty::new(Role::Manager, "Eng");
/// let worker = LinkParty::new(Role::Worker, "Eng");
/// assert!(policy.check_link(manager, 0, worker).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPolicy {
    limits: RoleLimits,
}

impl StandardPolicy {
    pub fn new(limits: RoleLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &RoleLimits {
        &self.limits
    }
}

impl ReportingPolicy for StandardPolicy {
    fn check_link(
        &self,
        superior: LinkParty<'_>,
        superior_reportees: usize,
        subordinate: LinkParty<'_>,
    ) -> Result<(), Ineligibility> {
        let accepted = accepted_subordinates(superior.role).contains(&subordinate.role);
        let may_report = accepted_superiors(subordinate.role).contains(&superior.role);
        if !accepted || !may_report {
            return Err(Ineligibility::RoleNotAccepted);
        }

        if requires_department_match(superior.role) && superior.department != subordinate.department
        {
            return Err(Ineligibility::DepartmentMismatch {
                superior_department: superior.department.to_string(),
                department: subordinate.department.to_string(),
            });
        }

        if let Some(capacity) = self.reportee_capacity(superior.role) {
            if superior_reportees >= capacity {
                return Err(Ineligibility::AtCapacity { capacity });
            }
        }

        Ok(())
    }

    fn singleton_cap(&self, role: Role) -> Option<u32> {
        match role {
            Role::Founder => Some(self.limits.founder_cap),
            Role::CoFounder => Some(self.limits.cofounder_cap),
            _ => None,
        }
    }

    fn reportee_capacity(&self, role: Role) -> Option<usize> {
        match role {
            Role::Supervisor => Some(self.limits.supervisor_capacity),
            _ => None,
        }
    }
}
