//! Text and JSON rendering of directory results

use orgchart_core::ops::directory_ops::hierarchy_snapshot;
use orgchart_core::{Directory, EmployeeView};
use serde::Serialize;

const HIERARCHY_HEADER: &str = "=== EMPLOYEE HIERARCHY ===";
const HIERARCHY_FOOTER: &str = "===========================";

/// Confirmation printed after a successful add
pub fn added_message(view: &EmployeeView) -> String {
    match &view.superior_id {
        Some(superior_id) => format!(
            "Employee '{}' ({}) added under '{}'.",
            view.id, view.role, superior_id
        ),
        None => format!("Employee '{}' added successfully.", view.id),
    }
}

/// One employee with its superior and direct reportees
///
/// `E4 (Worker - Sales) → superior: E3 (Supervisor), reportees: None`
pub fn employee_line(directory: &Directory, view: &EmployeeView) -> String {
    let superior = match (&view.superior_id, view.superior_role) {
        (Some(id), Some(role)) => format!("{} ({})", id, role),
        (Some(id), None) => id.clone(),
        (None, _) => "None".to_string(),
    };

    let reportees = directory.reportee_ids(&view.id);
    let reportees = if reportees.is_empty() {
        "None".to_string()
    } else {
        format!("[{}]", reportees.join(", "))
    };

    format!(
        "{} ({} - {}) → superior: {}, reportees: {}",
        view.id,
        view.role,
        view.department_label(),
        superior,
        reportees
    )
}

/// Final hierarchy dump, one line per employee in insertion order
pub fn hierarchy_table(directory: &Directory) -> String {
    let mut out = format!("\n{}\n", HIERARCHY_HEADER);
    for view in hierarchy_snapshot(directory) {
        out.push_str(&employee_line(directory, &view));
        out.push('\n');
    }
    out.push_str(HIERARCHY_FOOTER);
    out.push('\n');
    out
}

#[derive(Serialize)]
struct HierarchyEntry<'a> {
    #[serde(flatten)]
    view: EmployeeView,
    reportees: &'a [String],
}

/// Final hierarchy dump as a pretty-printed JSON array
pub fn hierarchy_json(directory: &Directory) -> serde_json::Result<String> {
    let entries: Vec<_> = hierarchy_snapshot(directory)
        .into_iter()
        .map(|view| {
            let reportees = directory.reportee_ids(&view.id);
            HierarchyEntry { view, reportees }
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
