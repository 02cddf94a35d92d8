use super::store::Directory;
use crate::model::{Employee, EmployeeView};

/// Project an Employee into a detached read-only view
///
/// The superior's role is looked up through the directory; a dangling
/// superior id (which validation would flag) projects with no role.
pub fn project(directory: &Directory, employee: &Employee) -> EmployeeView {
    let superior_role = employee
        .superior_id
        .as_deref()
        .and_then(|id| directory.get(id))
        .map(|superior| superior.role);

    EmployeeView {
        id: employee.id.clone(),
        role: employee.role,
        department: employee.department().map(str::to_string),
        superior_id: employee.superior_id.clone(),
        superior_role,
        reportee_count: directory.reportee_count(&employee.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn test_project_with_superior() {
        let mut dir = Directory::new();
        dir.commit(Employee::new("F1".to_string(), Role::Founder, String::new()));
        let mut d1 = Employee::new("D1".to_string(), Role::Director, "Eng".to_string());
        d1.superior_id = Some("F1".to_string());
        dir.commit(d1);

        let founder = project(&dir, dir.get("F1").unwrap());
        assert_eq!(founder.department, None);
        assert_eq!(founder.superior_id, None);
        assert_eq!(founder.reportee_count, 1);

        let director = project(&dir, dir.get("D1").unwrap());
        assert_eq!(director.department.as_deref(), Some("Eng"));
        assert_eq!(director.superior_role, Some(Role::Founder));
        assert_eq!(director.reportee_count, 0);
    }
}
