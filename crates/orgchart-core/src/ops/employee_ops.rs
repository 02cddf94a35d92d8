use super::store::Directory;
use crate::errors::{OrgError, OrgResult};
use crate::model::{Employee, Role};
use crate::policy::ReportingPolicy;

/// Build a new, unlinked Employee of the given role
///
/// Enforces the role-specific construction rules:
/// - singleton-capped roles (Founder, Co-Founder) may not exceed their cap
///   once this employee is committed
/// - department-scoped roles need a non-empty department
/// - department-agnostic roles drop any department given
///
/// Nothing is mutated. The singleton counter moves only when the directory
/// commits the employee, so a failure later in the add leaves it untouched.
///
/// # Errors
/// * `SingletonExceeded` - If the role's cap is already reached
/// * `MissingDepartment` - If a department-scoped role has no department
pub fn build_employee(
    directory: &Directory,
    policy: &dyn ReportingPolicy,
    id: &str,
    role: Role,
    department: &str,
) -> OrgResult<Employee> {
    if let Some(cap) = policy.singleton_cap(role) {
        if directory.singleton_count(role) + 1 > cap {
            return Err(OrgError::SingletonExceeded { role, cap });
        }
    }

    let department = if role.requires_department() {
        let trimmed = department.trim();
        if trimmed.is_empty() {
            return Err(OrgError::MissingDepartment {
                employee_id: id.to_string(),
                role,
            });
        }
        trimmed.to_string()
    } else {
        String::new()
    };

    Ok(Employee::new(id.to_string(), role, department))
}

/// Validate a candidate employee id
///
/// # Errors
/// * `InvalidId` - If the id is empty or whitespace-only
pub fn validate_id(id: &str) -> OrgResult<()> {
    if id.trim().is_empty() {
        return Err(OrgError::InvalidId {
            reason: "Employee id cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{RoleLimits, StandardPolicy};

    #[test]
    fn test_build_worker() {
        let dir = Directory::new();
        let emp = build_employee(&dir, &StandardPolicy::default(), "W1", Role::Worker, "Eng")
            .unwrap();

        assert_eq!(emp.id, "W1");
        assert_eq!(emp.department, "Eng");
        assert!(emp.superior_id.is_none());
    }

    #[test]
    fn test_build_founder_drops_department() {
        let dir = Directory::new();
        let emp = build_employee(&dir, &StandardPolicy::default(), "F1", Role::Founder, "Eng")
            .unwrap();
        assert_eq!(emp.department, "");
    }

    #[test]
    fn test_build_does_not_count() {
        let dir = Directory::new();
        let policy = StandardPolicy::default();

        build_employee(&dir, &policy, "F1", Role::Founder, "").unwrap();
        build_employee(&dir, &policy, "F2", Role::Founder, "").unwrap();
        assert_eq!(dir.singleton_count(Role::Founder), 0);
    }

    #[test]
    fn test_build_second_founder_after_commit() {
        let mut dir = Directory::new();
        let policy = StandardPolicy::default();

        let founder = build_employee(&dir, &policy, "F1", Role::Founder, "").unwrap();
        dir.commit(founder);

        let result = build_employee(&dir, &policy, "F2", Role::Founder, "");
        assert_eq!(
            result,
            Err(OrgError::SingletonExceeded {
                role: Role::Founder,
                cap: 1
            })
        );
    }

    #[test]
    fn test_build_respects_custom_cofounder_cap() {
        let mut dir = Directory::new();
        let policy = StandardPolicy::new(RoleLimits {
            cofounder_cap: 1,
            ..RoleLimits::default()
        });

        let first = build_employee(&dir, &policy, "C1", Role::CoFounder, "").unwrap();
        dir.commit(first);

        assert!(matches!(
            build_employee(&dir, &policy, "C2", Role::CoFounder, ""),
            Err(OrgError::SingletonExceeded { cap: 1, .. })
        ));
    }

    #[test]
    fn test_build_missing_department() {
        let dir = Directory::new();
        let result = build_employee(&dir, &StandardPolicy::default(), "M1", Role::Manager, "  ");
        assert!(matches!(result, Err(OrgError::MissingDepartment { .. })));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("E1").is_ok());
        assert!(matches!(validate_id(""), Err(OrgError::InvalidId { .. })));
        assert!(matches!(validate_id("   "), Err(OrgError::InvalidId { .. })));
    }
}
