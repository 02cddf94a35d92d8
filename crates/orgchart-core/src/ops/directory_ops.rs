//! Directory operations
//!
//! `add_employee` is the only mutation: it validates everything first and
//! commits in one infallible step, so a failed call leaves the directory
//! exactly as it was. Every other function here is a pure read.
//!
//! Logging follows the facility contract:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure

use super::employee_ops::{build_employee, validate_id};
use super::projection::project;
use super::store::Directory;
use crate::errors::{OrgError, OrgResult};
use crate::model::{EmployeeView, Role};
use crate::policy::{LinkParty, ReportingPolicy};
use crate::{log_op_end, log_op_error, log_op_start};

/// Add an employee and link it under its superior
///
/// Check order:
/// 1. id is non-empty, then not already registered
/// 2. role names a known role
/// 3. department-scoped roles must name a superior
/// 4. construction rules (singleton caps, department)
/// 5. superior exists and the eligibility policy accepts the link
///
/// Only when every check passes is the employee committed, together with
/// its superior link, the superior's reportee entry and the singleton count.
///
/// # Arguments
/// * `directory` - Mutable reference to the Directory
/// * `policy` - Eligibility policy to consult
/// * `id` - New employee id
/// * `role` - Role name (`Founder`, `CoFounder`/`Co-Founder`, `Director`, ...)
/// * `department` - Department, ignored for Founder/Co-Founder
/// * `superior_id` - Superior to report to; empty counts as absent
///
/// # Returns
/// A view of the newly added employee
///
/// # Errors
/// * `InvalidId` - If id is empty or whitespace-only
/// * `DuplicateId` - If id is already registered
/// * `UnknownRole` - If role is not a known role
/// * `MissingSuperior` - If a department-scoped role has no superior
/// * `SingletonExceeded` - If the role's cap is reached
/// * `MissingDepartment` - If a department-scoped role has no department
/// * `UnknownSuperior` - If the superior is not registered
/// * `IneligibleReport` - If the policy rejects the link
pub fn add_employee(
    directory: &mut Directory,
    policy: &dyn ReportingPolicy,
    id: &str,
    role: &str,
    department: Option<&str>,
    superior_id: Option<&str>,
) -> OrgResult<EmployeeView> {
    log_op_start!("add_employee", employee_id = id, role = role);
    let start = std::time::Instant::now();

    let view = add_employee_impl(directory, policy, id, role, department, superior_id).map_err(
        |e| {
            log_op_error!(
                "add_employee",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                employee_id = id
            );
            e
        },
    )?;

    log_op_end!(
        "add_employee",
        duration_ms = start.elapsed().as_millis() as u64,
        employee_id = id,
        employee_count = directory.len() as u64
    );

    Ok(view)
}

fn add_employee_impl(
    directory: &mut Directory,
    policy: &dyn ReportingPolicy,
    id: &str,
    role: &str,
    department: Option<&str>,
    superior_id: Option<&str>,
) -> OrgResult<EmployeeView> {
    validate_id(id)?;
    if directory.contains(id) {
        return Err(OrgError::DuplicateId {
            employee_id: id.to_string(),
        });
    }

    let role: Role = role.parse()?;

    let superior_id = superior_id.map(str::trim).filter(|s| !s.is_empty());
    if superior_id.is_none() && !role.is_top_level() {
        return Err(OrgError::MissingSuperior {
            employee_id: id.to_string(),
            role,
        });
    }

    let mut employee = build_employee(directory, policy, id, role, department.unwrap_or(""))?;

    if let Some(sid) = superior_id {
        let superior = directory
            .get(sid)
            .ok_or_else(|| OrgError::UnknownSuperior {
                superior_id: sid.to_string(),
            })?;

        policy
            .check_link(
                LinkParty::of(superior),
                directory.reportee_count(sid),
                LinkParty::of(&employee),
            )
            .map_err(|reason| OrgError::IneligibleReport {
                superior_id: sid.to_string(),
                superior_role: superior.role,
                employee_id: id.to_string(),
                role,
                reason,
            })?;

        employee.superior_id = Some(sid.to_string());
    }

    directory.commit(employee);

    directory
        .get(id)
        .map(|e| project(directory, e))
        .ok_or_else(|| OrgError::EmployeeNotFound {
            employee_id: id.to_string(),
        })
}

/// Read an employee as a view
pub fn get_employee(directory: &Directory, id: &str) -> Option<EmployeeView> {
    directory.get(id).map(|e| project(directory, e))
}

/// List employees holding `role`, in insertion order
///
/// Returns an empty list when nobody holds the role.
pub fn list_by_role(directory: &Directory, role: Role) -> Vec<EmployeeView> {
    directory
        .iter()
        .filter(|e| e.role == role)
        .map(|e| project(directory, e))
        .collect()
}

/// List employees by role name, in insertion order
///
/// The name is parsed into the closed [`Role`] set here, at the boundary,
/// so a typo surfaces as `UnknownRole` instead of an empty listing. Callers
/// holding a [`Role`] already use [`list_by_role`], which cannot fail.
///
/// # Errors
/// * `UnknownRole` - If the name is not a known role
pub fn list_by_role_name(directory: &Directory, role: &str) -> OrgResult<Vec<EmployeeView>> {
    let role: Role = role.parse()?;
    Ok(list_by_role(directory, role))
}

/// Every employee in insertion order, with reporting position
pub fn hierarchy_snapshot(directory: &Directory) -> Vec<EmployeeView> {
    directory.iter().map(|e| project(directory, e)).collect()
}

/// Direct reportees of an employee, in the order they were linked
///
/// # Errors
/// * `EmployeeNotFound` - If the employee is not registered
pub fn reportees_of(directory: &Directory, id: &str) -> OrgResult<Vec<EmployeeView>> {
    if !directory.contains(id) {
        return Err(OrgError::EmployeeNotFound {
            employee_id: id.to_string(),
        });
    }

    Ok(directory
        .reportee_ids(id)
        .iter()
        .filter_map(|rid| directory.get(rid))
        .map(|e| project(directory, e))
        .collect())
}

/// Number of registered employees holding `role`
pub fn role_count(directory: &Directory, role: Role) -> usize {
    directory.iter().filter(|e| e.role == role).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::StandardPolicy;

    fn seeded() -> Directory {
        let policy = StandardPolicy::default();
        let mut dir = Directory::new();
        add_employee(&mut dir, &policy, "F1", "Founder", None, None).unwrap();
        add_employee(&mut dir, &policy, "D1", "Director", Some("Eng"), Some("F1")).unwrap();
        add_employee(&mut dir, &policy, "M1", "Manager", Some("Eng"), Some("D1")).unwrap();
        dir
    }

    #[test]
    fn test_add_top_level_founder() {
        let mut dir = Directory::new();
        let view =
            add_employee(&mut dir, &StandardPolicy::default(), "F1", "Founder", None, None)
                .unwrap();

        assert_eq!(view.role, Role::Founder);
        assert!(view.superior_id.is_none());
        assert_eq!(dir.singleton_count(Role::Founder), 1);
    }

    #[test]
    fn test_add_links_superior() {
        let dir = seeded();
        let d1 = get_employee(&dir, "D1").unwrap();
        assert_eq!(d1.superior_id.as_deref(), Some("F1"));
        assert_eq!(d1.superior_role, Some(Role::Founder));
        assert_eq!(d1.reportee_count, 1);
    }

    #[test]
    fn test_add_empty_superior_counts_as_absent() {
        let mut dir = Directory::new();
        let result = add_employee(
            &mut dir,
            &StandardPolicy::default(),
            "W1",
            "Worker",
            Some("Eng"),
            Some(""),
        );
        assert!(matches!(result, Err(OrgError::MissingSuperior { .. })));
    }

    #[test]
    fn test_unknown_role_before_superior_checks() {
        let mut dir = Directory::new();
        let result =
            add_employee(&mut dir, &StandardPolicy::default(), "X1", "Intern", None, None);
        assert!(matches!(result, Err(OrgError::UnknownRole { .. })));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_ineligible_report_carries_reason() {
        let mut dir = seeded();
        let result = add_employee(
            &mut dir,
            &StandardPolicy::default(),
            "W1",
            "Worker",
            Some("Eng"),
            Some("D1"),
        );
        match result {
            Err(OrgError::IneligibleReport {
                superior_role,
                role,
                reason,
                ..
            }) => {
                assert_eq!(superior_role, Role::Director);
                assert_eq!(role, Role::Worker);
                assert_eq!(reason, crate::policy::Ineligibility::RoleNotAccepted);
            }
            other => panic!("expected IneligibleReport, got {:?}", other),
        }
    }

    #[test]
    fn test_reportees_of_in_link_order() {
        let mut dir = seeded();
        let policy = StandardPolicy::default();
        add_employee(&mut dir, &policy, "W2", "Worker", Some("Eng"), Some("M1")).unwrap();
        add_employee(&mut dir, &policy, "S1", "Supervisor", Some("Eng"), Some("M1")).unwrap();

        let ids: Vec<_> = reportees_of(&dir, "M1")
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["W2", "S1"]);
    }

    #[test]
    fn test_reportees_of_unknown() {
        let dir = seeded();
        assert!(matches!(
            reportees_of(&dir, "nope"),
            Err(OrgError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_list_by_role_name() {
        let dir = seeded();
        assert_eq!(list_by_role_name(&dir, "Manager").unwrap().len(), 1);
        assert!(list_by_role_name(&dir, "Worker").unwrap().is_empty());
        assert!(list_by_role_name(&dir, "Boss").is_err());
    }

    #[test]
    fn test_role_count() {
        let dir = seeded();
        assert_eq!(role_count(&dir, Role::Founder), 1);
        assert_eq!(role_count(&dir, Role::Worker), 0);
    }
}
