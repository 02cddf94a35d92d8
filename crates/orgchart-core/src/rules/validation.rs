use crate::errors::{OrgError, OrgResult};
use crate::ops::Directory;
use crate::policy::ReportingPolicy;

use super::invariants;

/// Validate every structural invariant of the directory
///
/// 1. Every superior link points at a registered employee
/// 2. Department-scoped employees all have a superior
/// 3. The reverse reportee index mirrors the superior links exactly
/// 4. Every link is one the eligibility table allows
/// 5. No superior holds more reportees than its capacity
/// 6. Singleton counters equal the registered role counts and stay within caps
/// 7. No superior chain loops
///
/// Each check is a single pass over the directory.
///
/// # Errors
/// Returns the first violation found. For exhaustive reporting, call the
/// individual invariant functions directly.
pub fn validate_directory(directory: &Directory, policy: &dyn ReportingPolicy) -> OrgResult<()> {
    if let Some((employee_id, superior_id)) = invariants::find_orphans(directory).first() {
        return Err(OrgError::OrphanedEmployee {
            employee_id: employee_id.clone(),
            superior_id: superior_id.clone(),
        });
    }

    if let Some((employee_id, role)) = invariants::find_unanchored(directory).first() {
        return Err(OrgError::MissingSuperior {
            employee_id: employee_id.clone(),
            role: *role,
        });
    }

    if let Some((superior_id, employee_id)) = invariants::find_index_mismatches(directory).first() {
        return Err(OrgError::ReporteeIndexInconsistent {
            superior_id: superior_id.clone(),
            employee_id: employee_id.clone(),
        });
    }

    if let Some(link) = invariants::find_ineligible_links(directory, policy)
        .into_iter()
        .next()
    {
        return Err(OrgError::IneligibleReport {
            superior_id: link.superior_id,
            superior_role: link.superior_role,
            employee_id: link.employee_id,
            role: link.role,
            reason: link.reason,
        });
    }

    if let Some((superior_id, count, capacity)) =
        invariants::find_over_capacity(directory, policy).first()
    {
        return Err(OrgError::CapacityExceeded {
            superior_id: superior_id.clone(),
            count: *count,
            capacity: *capacity,
        });
    }

    if let Some((role, recorded, actual)) = invariants::find_singleton_mismatches(directory).first()
    {
        return Err(OrgError::SingletonCountMismatch {
            role: *role,
            recorded: *recorded,
            actual: *actual,
        });
    }

    if let Some((role, _, cap)) = invariants::find_singleton_overflows(directory, policy).first() {
        return Err(OrgError::SingletonExceeded {
            role: *role,
            cap: *cap,
        });
    }

    if let Some(employee_id) = invariants::find_first_cycle(directory) {
        return Err(OrgError::CycleDetected { employee_id });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, Role};
    use crate::ops::directory_ops::add_employee;
    use crate::policy::StandardPolicy;

    #[test]
    fn test_validate_empty_directory() {
        assert!(validate_directory(&Directory::new(), &StandardPolicy::default()).is_ok());
    }

    #[test]
    fn test_validate_built_directory() {
        let policy = StandardPolicy::default();
        let mut dir = Directory::new();
        add_employee(&mut dir, &policy, "F1", "Founder", None, None).unwrap();
        add_employee(&mut dir, &policy, "C1", "CoFounder", None, Some("F1")).unwrap();
        add_employee(&mut dir, &policy, "D1", "Director", Some("Eng"), Some("C1")).unwrap();

        assert!(validate_directory(&dir, &policy).is_ok());
    }

    #[test]
    fn test_validate_orphan() {
        let mut dir = Directory::new();
        let mut w = Employee::new("W1".to_string(), Role::Worker, "Eng".to_string());
        w.superior_id = Some("ghost".to_string());
        dir.commit(w);

        assert!(matches!(
            validate_directory(&dir, &StandardPolicy::default()),
            Err(OrgError::OrphanedEmployee { .. })
        ));
    }

    #[test]
    fn test_validate_unanchored_worker() {
        let mut dir = Directory::new();
        dir.commit(Employee::new("W1".to_string(), Role::Worker, "Eng".to_string()));

        assert!(matches!(
            validate_directory(&dir, &StandardPolicy::default()),
            Err(OrgError::MissingSuperior { .. })
        ));
    }

    #[test]
    fn test_validate_cycle() {
        let mut dir = Directory::new();
        let mut a = Employee::new("A".to_string(), Role::Manager, "Eng".to_string());
        a.superior_id = Some("B".to_string());
        let mut b = Employee::new("B".to_string(), Role::Manager, "Eng".to_string());
        b.superior_id = Some("A".to_string());
        dir.commit(a);
        dir.commit(b);

        // Manager under Manager is ineligible, which is reported before the loop
        assert!(matches!(
            validate_directory(&dir, &StandardPolicy::default()),
            Err(OrgError::IneligibleReport { .. })
        ));
    }

    #[test]
    fn test_validate_counter_drift() {
        let policy = StandardPolicy::default();
        let mut dir = Directory::new();
        add_employee(&mut dir, &policy, "F1", "Founder", None, None).unwrap();
        dir.singleton_counts.insert(Role::Founder, 0);

        assert!(matches!(
            validate_directory(&dir, &policy),
            Err(OrgError::SingletonCountMismatch { .. })
        ));
    }
}
