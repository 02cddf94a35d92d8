use orgchart_core::ops::directory_ops;
use orgchart_core::{Directory, EmployeeView, OrgResult, StandardPolicy};

/// Add an employee under the standard policy
#[allow(dead_code)]
pub fn add(
    dir: &mut Directory,
    id: &str,
    role: &str,
    department: Option<&str>,
    superior_id: Option<&str>,
) -> OrgResult<EmployeeView> {
    directory_ops::add_employee(
        dir,
        &StandardPolicy::default(),
        id,
        role,
        department,
        superior_id,
    )
}

/// Directory holding the Eng line F1 -> D1 -> M1 -> S1
#[allow(dead_code)]
pub fn eng_line() -> Directory {
    let mut dir = Directory::new();
    add(&mut dir, "F1", "Founder", None, None).unwrap();
    add(&mut dir, "D1", "Director", Some("Eng"), Some("F1")).unwrap();
    add(&mut dir, "M1", "Manager", Some("Eng"), Some("D1")).unwrap();
    add(&mut dir, "S1", "Supervisor", Some("Eng"), Some("M1")).unwrap();
    dir
}

/// Ids of a list of views, in order
#[allow(dead_code)]
pub fn ids(views: &[EmployeeView]) -> Vec<String> {
    views.iter().map(|v| v.id.clone()).collect()
}
