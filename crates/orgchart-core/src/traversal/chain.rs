use std::collections::HashSet;

use crate::errors::{OrgError, OrgResult};
use crate::ops::Directory;

/// Compute the reporting chain from the top of the hierarchy down to `id`
///
/// Follows superior links upward and reverses, so the first element is a
/// top-level employee and the last is `id` itself.
///
/// # Errors
/// * `EmployeeNotFound` - If `id` is not registered
/// * `OrphanedEmployee` - If a superior link points at a missing employee
/// * `CycleDetected` - If the chain loops
pub fn reporting_chain(directory: &Directory, id: &str) -> OrgResult<Vec<String>> {
    if !directory.contains(id) {
        return Err(OrgError::EmployeeNotFound {
            employee_id: id.to_string(),
        });
    }

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(id);

    while let Some(cur) = current {
        if !visited.insert(cur) {
            return Err(OrgError::CycleDetected {
                employee_id: id.to_string(),
            });
        }

        let employee = directory
            .get(cur)
            .ok_or_else(|| OrgError::OrphanedEmployee {
                employee_id: path.last().cloned().unwrap_or_default(),
                superior_id: cur.to_string(),
            })?;

        path.push(cur.to_string());
        current = employee.superior_id.as_deref();
    }

    path.reverse();

    Ok(path)
}
