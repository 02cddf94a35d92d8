use std::collections::{BTreeMap, HashMap};

use crate::model::{Employee, Role};

/// In-memory registry of all employees
///
/// Owns every Employee for the lifetime of the directory. Insertion order is
/// kept in `order` so listings and the hierarchy dump are deterministic.
/// Reportees are tracked in a reverse index (superior id -> reportee ids in
/// link order); employees themselves only hold their superior's id.
///
/// Not thread-safe on its own. Wrap it in `SharedDirectory` when several
/// threads need to add employees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    /// Map of employee ID to Employee
    pub(crate) employees: HashMap<String, Employee>,
    /// Employee IDs in insertion order
    pub(crate) order: Vec<String>,
    /// Superior ID -> direct reportee IDs, in link order
    pub(crate) reportees: HashMap<String, Vec<String>>,
    /// Committed instances of singleton-capped roles
    pub(crate) singleton_counts: BTreeMap<Role, u32>,
}

impl Directory {
    /// Create a new empty Directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an Employee by ID
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Check if an ID is registered
    pub fn contains(&self, id: &str) -> bool {
        self.employees.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate employees in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.order.iter().filter_map(|id| self.employees.get(id))
    }

    /// Direct reportee IDs of an employee, in link order
    pub fn reportee_ids(&self, superior_id: &str) -> &[String] {
        self.reportees
            .get(superior_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of direct reportees of an employee
    pub fn reportee_count(&self, superior_id: &str) -> usize {
        self.reportee_ids(superior_id).len()
    }

    /// Number of committed instances of a singleton-capped role
    pub fn singleton_count(&self, role: Role) -> u32 {
        self.singleton_counts.get(&role).copied().unwrap_or(0)
    }

    /// Commit a fully validated Employee
    ///
    /// Inserts the employee, records it in insertion order, appends it to its
    /// superior's reportee list and bumps the singleton counter for
    /// top-level roles. Callers must have checked uniqueness, eligibility
    /// and caps beforehand; this step cannot fail, so a commit is all or
    /// nothing.
    pub(crate) fn commit(&mut self, employee: Employee) {
        if let Some(ref superior_id) = employee.superior_id {
            self.reportees
                .entry(superior_id.clone())
                .or_default()
                .push(employee.id.clone());
        }
        if employee.role.is_top_level() {
            *self.singleton_counts.entry(employee.role).or_insert(0) += 1;
        }
        self.order.push(employee.id.clone());
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Undo the most recent commit of `id`
    ///
    /// Reverses every step of [`Directory::commit`]. Only the latest commit
    /// can be undone cleanly: the id is expected at the tail of `order` and
    /// of its superior's reportee list.
    pub(crate) fn uncommit(&mut self, id: &str) -> Option<Employee> {
        let employee = self.employees.remove(id)?;

        if let Some(pos) = self.order.iter().rposition(|oid| oid == id) {
            self.order.remove(pos);
        }
        if let Some(ref superior_id) = employee.superior_id {
            if let Some(list) = self.reportees.get_mut(superior_id) {
                if let Some(pos) = list.iter().rposition(|rid| rid == id) {
                    list.remove(pos);
                }
                if list.is_empty() {
                    self.reportees.remove(superior_id);
                }
            }
        }
        if employee.role.is_top_level() {
            if let Some(count) = self.singleton_counts.get_mut(&employee.role) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.singleton_counts.remove(&employee.role);
                }
            }
        }

        Some(employee)
    }
}
