use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::Role;
use crate::ops::Directory;
use crate::policy::{Ineligibility, LinkParty, ReportingPolicy};

/// Find the first employee, in insertion order, whose superior chain loops
///
/// Every employee has at most one superior, so each chain is walked once:
/// ids are marked while on the current walk and retired once it ends.
pub fn find_first_cycle(directory: &Directory) -> Option<String> {
    let mut on_walk: HashSet<&str> = HashSet::new();
    let mut retired: HashSet<&str> = HashSet::new();

    for start in directory.iter() {
        let mut current = Some(start.id.as_str());

        while let Some(id) = current {
            if retired.contains(id) {
                break;
            }
            if !on_walk.insert(id) {
                return Some(start.id.clone());
            }
            current = directory.get(id).and_then(|e| e.superior_id.as_deref());
        }

        retired.extend(on_walk.drain());
    }

    None
}

/// Find employees whose superior id is not registered
///
/// Returns list of (employee_id, superior_id) tuples
pub fn find_orphans(directory: &Directory) -> Vec<(String, String)> {
    directory
        .iter()
        .filter_map(|e| {
            e.superior_id
                .as_ref()
                .filter(|sid| !directory.contains(sid))
                .map(|sid| (e.id.clone(), sid.clone()))
        })
        .collect()
}

/// Find disagreements between superior links and the reverse index
///
/// Checks both directions: every linked employee is listed exactly once
/// under its superior, and every index entry points back at that superior.
///
/// Returns list of (superior_id, employee_id) tuples
pub fn find_index_mismatches(directory: &Directory) -> Vec<(String, String)> {
    let mut listed: HashMap<&str, usize> = HashMap::new();
    let mut stray = Vec::new();

    let mut superiors: Vec<_> = directory.reportees.keys().collect();
    superiors.sort();
    for sid in superiors {
        for rid in directory.reportee_ids(sid) {
            let points_back = directory
                .get(rid)
                .and_then(|r| r.superior_id.as_deref())
                == Some(sid.as_str());
            if points_back {
                *listed.entry(rid.as_str()).or_insert(0) += 1;
            } else {
                stray.push((sid.clone(), rid.clone()));
            }
        }
    }

    let mut mismatches: Vec<_> = directory
        .iter()
        .filter_map(|e| {
            let sid = e.superior_id.as_ref()?;
            let times = listed.get(e.id.as_str()).copied().unwrap_or(0);
            (times != 1).then(|| (sid.clone(), e.id.clone()))
        })
        .collect();
    mismatches.extend(stray);
    mismatches
}

/// Find superiors holding more reportees than their role allows
///
/// Returns list of (superior_id, count, capacity) tuples
pub fn find_over_capacity(
    directory: &Directory,
    policy: &dyn ReportingPolicy,
) -> Vec<(String, usize, usize)> {
    directory
        .iter()
        .filter_map(|e| {
            let capacity = policy.reportee_capacity(e.role)?;
            let count = directory.reportee_count(&e.id);
            (count > capacity).then(|| (e.id.clone(), count, capacity))
        })
        .collect()
}

/// Find singleton counters that disagree with the registered employees
///
/// Returns list of (role, recorded, actual) tuples
pub fn find_singleton_mismatches(directory: &Directory) -> Vec<(Role, u32, u32)> {
    let mut actual: BTreeMap<Role, u32> = BTreeMap::new();
    for employee in directory.iter().filter(|e| e.role.is_top_level()) {
        *actual.entry(employee.role).or_insert(0) += 1;
    }

    Role::ALL
        .iter()
        .filter(|role| role.is_top_level())
        .filter_map(|role| {
            let recorded = directory.singleton_count(*role);
            let registered = actual.get(role).copied().unwrap_or(0);
            (recorded != registered).then_some((*role, recorded, registered))
        })
        .collect()
}

/// Find singleton roles held by more employees than the policy allows
///
/// Returns list of (role, count, cap) tuples
pub fn find_singleton_overflows(
    directory: &Directory,
    policy: &dyn ReportingPolicy,
) -> Vec<(Role, u32, u32)> {
    Role::ALL
        .iter()
        .filter_map(|role| {
            let cap = policy.singleton_cap(*role)?;
            let count = directory.singleton_count(*role);
            (count > cap).then_some((*role, count, cap))
        })
        .collect()
}

/// A reporting link the eligibility table refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IneligibleLink {
    pub superior_id: String,
    pub superior_role: Role,
    pub employee_id: String,
    pub role: Role,
    pub reason: Ineligibility,
}

/// Find links the eligibility table would refuse (ignoring capacity)
pub fn find_ineligible_links(
    directory: &Directory,
    policy: &dyn ReportingPolicy,
) -> Vec<IneligibleLink> {
    directory
        .iter()
        .filter_map(|e| {
            let superior = directory.get(e.superior_id.as_deref()?)?;
            policy
                .check_link(LinkParty::of(superior), 0, LinkParty::of(e))
                .err()
                .filter(|reason| !matches!(reason, Ineligibility::AtCapacity { .. }))
                .map(|reason| IneligibleLink {
                    superior_id: superior.id.clone(),
                    superior_role: superior.role,
                    employee_id: e.id.clone(),
                    role: e.role,
                    reason,
                })
        })
        .collect()
}

/// Find department-scoped employees with no superior
///
/// Returns list of (employee_id, role) tuples
pub fn find_unanchored(directory: &Directory) -> Vec<(String, Role)> {
    directory
        .iter()
        .filter(|e| !e.role.is_top_level() && e.superior_id.is_none())
        .map(|e| (e.id.clone(), e.role))
        .collect()
}
