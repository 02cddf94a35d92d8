//! Apply atomicity tests
//!
//! 1. Apply returns the new employee on success and the directory validates
//! 2. A failed command leaves the directory unchanged
//! 3. Every failure surfaces as a typed error and the session can continue

mod common;

use orgchart_core::rules::validate_directory;
use orgchart_core::{apply, Command, CommandOutcome, Directory, OrgError, Role, StandardPolicy};

fn add(id: &str, role: &str, dept: Option<&str>, superior: Option<&str>) -> Command {
    Command::EmployeeAdd {
        id: id.to_string(),
        role: role.to_string(),
        department: dept.map(str::to_string),
        superior_id: superior.map(str::to_string),
    }
}

#[test]
fn test_apply_returns_added_view_on_success() {
    // GIVEN a directory with a founder
    let policy = StandardPolicy::default();
    let mut dir = Directory::new();
    apply(&mut dir, add("E1", "Founder", None, None), &policy).unwrap();

    // WHEN a director is applied under the founder
    let CommandOutcome::Added(view) =
        apply(&mut dir, add("E2", "Director", Some("Eng"), Some("E1")), &policy).unwrap();

    // THEN the view reflects the new link and the directory validates
    assert_eq!(view.id, "E2");
    assert_eq!(view.superior_role, Some(Role::Founder));
    assert!(validate_directory(&dir, &policy).is_ok());
}

#[test]
fn test_apply_fails_without_partial_mutation() {
    // GIVEN the Eng line
    let policy = StandardPolicy::default();
    let mut dir = common::eng_line();
    let original = dir.clone();

    // WHEN each kind of invalid add is applied
    let failures = vec![
        add("M1", "Manager", Some("Eng"), Some("D1")),
        add("X1", "Intern", Some("Eng"), Some("M1")),
        add("X2", "Worker", Some("Eng"), None),
        add("X3", "Worker", Some("Eng"), Some("E404")),
        add("X4", "Worker", Some("Sales"), Some("S1")),
        add("X5", "Manager", Some("Eng"), Some("S1")),
        add("X6", "Worker", None, Some("S1")),
        add("F2", "Founder", None, None),
        add("  ", "Worker", Some("Eng"), Some("S1")),
    ];

    for cmd in failures {
        let result = apply(&mut dir, cmd.clone(), &policy);

        // THEN each fails and the directory is untouched
        assert!(result.is_err(), "{:?} unexpectedly succeeded", cmd);
        assert_eq!(dir, original, "{:?} mutated the directory", cmd);
    }
}

#[test]
fn test_apply_surfaces_typed_errors() {
    let policy = StandardPolicy::default();
    let mut dir = common::eng_line();

    assert!(matches!(
        apply(&mut dir, add("M1", "Manager", Some("Eng"), Some("D1")), &policy),
        Err(OrgError::DuplicateId { .. })
    ));
    assert!(matches!(
        apply(&mut dir, add("X1", "Boss", None, None), &policy),
        Err(OrgError::UnknownRole { .. })
    ));
    assert!(matches!(
        apply(&mut dir, add("X1", "Worker", Some("Eng"), None), &policy),
        Err(OrgError::MissingSuperior { .. })
    ));
    assert!(matches!(
        apply(&mut dir, add("X1", "Worker", Some("Eng"), Some("nobody")), &policy),
        Err(OrgError::UnknownSuperior { .. })
    ));
    assert!(matches!(
        apply(&mut dir, add("X1", "Director", Some("Eng"), Some("M1")), &policy),
        Err(OrgError::IneligibleReport { .. })
    ));
    assert!(matches!(
        apply(&mut dir, add("X1", "Worker", Some(""), Some("S1")), &policy),
        Err(OrgError::MissingDepartment { .. })
    ));
    assert!(matches!(
        apply(&mut dir, add("", "Worker", Some("Eng"), Some("S1")), &policy),
        Err(OrgError::InvalidId { .. })
    ));
}

#[test]
fn test_session_continues_after_failure() {
    // GIVEN a failed add
    let policy = StandardPolicy::default();
    let mut dir = Directory::new();
    assert!(apply(&mut dir, add("E2", "Director", Some("Eng"), None), &policy).is_err());

    // WHEN valid commands follow
    apply(&mut dir, add("E1", "Founder", None, None), &policy).unwrap();
    apply(&mut dir, add("E2", "Director", Some("Eng"), Some("E1")), &policy).unwrap();

    // THEN they succeed normally
    assert_eq!(dir.len(), 2);
}
