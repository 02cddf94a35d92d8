use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::directory_ops;
use super::store::Directory;
use crate::errors::OrgResult;
use crate::model::{EmployeeView, Role};
use crate::policy::{ReportingPolicy, StandardPolicy};

/// Thread-safe handle to a Directory
///
/// One mutex guards the registry together with its singleton counters, and
/// `add_employee` holds it for the whole check-build-commit sequence, so two
/// adds never interleave. Clones share the same directory.
#[derive(Clone)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
    policy: Arc<dyn ReportingPolicy + Send + Sync>,
}

impl SharedDirectory {
    /// Create an empty shared directory governed by `policy`
    pub fn new(policy: impl ReportingPolicy + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Directory::new())),
            policy: Arc::new(policy),
        }
    }

    /// Add an employee under the directory lock
    ///
    /// # Errors
    /// Same as [`directory_ops::add_employee`].
    pub fn add_employee(
        &self,
        id: &str,
        role: &str,
        department: Option<&str>,
        superior_id: Option<&str>,
    ) -> OrgResult<EmployeeView> {
        let mut directory = self.lock();
        directory_ops::add_employee(
            &mut directory,
            self.policy.as_ref(),
            id,
            role,
            department,
            superior_id,
        )
    }

    pub fn get_employee(&self, id: &str) -> Option<EmployeeView> {
        directory_ops::get_employee(&self.lock(), id)
    }

    pub fn list_by_role(&self, role: Role) -> Vec<EmployeeView> {
        directory_ops::list_by_role(&self.lock(), role)
    }

    pub fn hierarchy_snapshot(&self) -> Vec<EmployeeView> {
        directory_ops::hierarchy_snapshot(&self.lock())
    }

    // A panic while the lock is held cannot leave a half-applied add:
    // commits are infallible and happen last.
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedDirectory {
    fn default() -> Self {
        Self::new(StandardPolicy::default())
    }
}

impl std::fmt::Debug for SharedDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedDirectory")
            .field("employees", &self.lock().len())
            .finish_non_exhaustive()
    }
}
