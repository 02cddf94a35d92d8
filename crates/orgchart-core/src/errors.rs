use orgchart_core_types::{CommandId, SessionId};
use thiserror::Error;

use crate::model::Role;
use crate::policy::Ineligibility;

/// Result type alias using OrgError
pub type OrgResult<T> = std::result::Result<T, OrgError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    UnknownRole,
    MissingDepartment,

    // Registry
    AlreadyExists,
    NotFound,
    SingletonExceeded,

    // Reporting links
    MissingSuperior,
    IneligibleReport,

    // Integrity (directory validation)
    IntegrityViolation,
    CapacityExceeded,
    CycleDetected,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownRole => "ERR_UNKNOWN_ROLE",
            ExErrorKind::MissingDepartment => "ERR_MISSING_DEPARTMENT",
            ExErrorKind::AlreadyExists => "ERR_DUPLICATE_ID",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::SingletonExceeded => "ERR_SINGLETON_EXCEEDED",
            ExErrorKind::MissingSuperior => "ERR_MISSING_SUPERIOR",
            ExErrorKind::IneligibleReport => "ERR_INELIGIBLE_REPORT",
            ExErrorKind::IntegrityViolation => "ERR_INTEGRITY_VIOLATION",
            ExErrorKind::CapacityExceeded => "ERR_CAPACITY_EXCEEDED",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// session/command correlation the command loop attaches.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    role: Option<Role>,
    session_id: Option<SessionId>,
    command_id: Option<CommandId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            role: None,
            session_id: None,
            command_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add employee ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add role context
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Add session ID context
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Add command ID context
    pub fn with_command_id(mut self, command_id: CommandId) -> Self {
        self.command_id = Some(command_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn command_id(&self) -> Option<CommandId> {
        self.command_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (employee_id: {})", entity_id)?;
        }
        if let Some(command_id) = &self.command_id {
            write!(f, " ({})", command_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for directory operations
///
/// The display strings are the user-facing messages; a command loop can
/// print them verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrgError {
    // ===== Add-employee failures =====
    /// Identifier already registered
    #[error("Employee with ID '{employee_id}' already exists.")]
    DuplicateId { employee_id: String },

    /// Role string does not name a known role
    #[error("Invalid role '{role}'.")]
    UnknownRole { role: String },

    /// Creating another instance would exceed the role's cap
    #[error("Only {cap} {role} instance(s) can be created.")]
    SingletonExceeded { role: Role, cap: u32 },

    /// A department-scoped role was added without a superior
    #[error("'{role}' must report to a valid superior.")]
    MissingSuperior { employee_id: String, role: Role },

    /// Named superior is not registered
    #[error("Invalid entry. No Employee with the id '{superior_id}' found.")]
    UnknownSuperior { superior_id: String },

    /// Eligibility table rejected the link
    #[error("{superior_role} '{superior_id}' cannot have {role} '{employee_id}' as reportee: {reason}.")]
    IneligibleReport {
        superior_id: String,
        superior_role: Role,
        employee_id: String,
        role: Role,
        reason: Ineligibility,
    },

    // ===== Input validation =====
    /// Department-scoped role created with an empty department
    #[error("'{role}' requires a department.")]
    MissingDepartment { employee_id: String, role: Role },

    /// Identifier empty or whitespace-only
    #[error("Invalid employee id: {reason}")]
    InvalidId { reason: String },

    // ===== Lookups =====
    /// Employee not registered (read-side lookups)
    #[error("No Employee with the id '{employee_id}' found.")]
    EmployeeNotFound { employee_id: String },

    // ===== Integrity errors (directory validation) =====
    /// Superior link points at an unregistered employee
    #[error("Employee {employee_id} reports to missing superior {superior_id}")]
    OrphanedEmployee {
        employee_id: String,
        superior_id: String,
    },

    /// Reverse index disagrees with the superior link
    #[error("Reportee index for {superior_id} disagrees with superior link of {employee_id}")]
    ReporteeIndexInconsistent {
        superior_id: String,
        employee_id: String,
    },

    /// A superior holds more reportees than its role allows
    #[error("{superior_id} has {count} reportees, capacity is {capacity}")]
    CapacityExceeded {
        superior_id: String,
        count: usize,
        capacity: usize,
    },

    /// Singleton counter disagrees with the registered employees
    #[error("{role} counter records {recorded} but {actual} are registered")]
    SingletonCountMismatch {
        role: Role,
        recorded: u32,
        actual: u32,
    },

    /// Superior chain loops back on itself
    #[error("Cycle detected in reporting chain of {employee_id}")]
    CycleDetected { employee_id: String },
}

impl From<OrgError> for ExError {
    fn from(err: OrgError) -> Self {
        let message = err.to_string();
        match err {
            OrgError::DuplicateId { employee_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(employee_id)
                .with_message(message),

            OrgError::UnknownRole { .. } => {
                ExError::new(ExErrorKind::UnknownRole).with_message(message)
            }

            OrgError::SingletonExceeded { role, .. } => {
                ExError::new(ExErrorKind::SingletonExceeded)
                    .with_role(role)
                    .with_message(message)
            }

            OrgError::MissingSuperior { employee_id, role } => {
                ExError::new(ExErrorKind::MissingSuperior)
                    .with_entity_id(employee_id)
                    .with_role(role)
                    .with_message(message)
            }

            OrgError::UnknownSuperior { superior_id } => ExError::new(ExErrorKind::NotFound)
                .with_op("find_superior")
                .with_entity_id(superior_id)
                .with_message(message),

            OrgError::IneligibleReport {
                employee_id, role, ..
            } => ExError::new(ExErrorKind::IneligibleReport)
                .with_entity_id(employee_id)
                .with_role(role)
                .with_message(message),

            OrgError::MissingDepartment { employee_id, role } => {
                ExError::new(ExErrorKind::MissingDepartment)
                    .with_entity_id(employee_id)
                    .with_role(role)
                    .with_message(message)
            }

            OrgError::InvalidId { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            OrgError::EmployeeNotFound { employee_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(employee_id)
                .with_message(message),

            OrgError::OrphanedEmployee { employee_id, .. }
            | OrgError::ReporteeIndexInconsistent { employee_id, .. } => {
                ExError::new(ExErrorKind::IntegrityViolation)
                    .with_entity_id(employee_id)
                    .with_message(message)
            }

            OrgError::SingletonCountMismatch { role, .. } => {
                ExError::new(ExErrorKind::IntegrityViolation)
                    .with_role(role)
                    .with_message(message)
            }

            OrgError::CapacityExceeded { superior_id, .. } => {
                ExError::new(ExErrorKind::CapacityExceeded)
                    .with_entity_id(superior_id)
                    .with_message(message)
            }

            OrgError::CycleDetected { employee_id } => ExError::new(ExErrorKind::CycleDetected)
                .with_entity_id(employee_id)
                .with_message(message),
        }
    }
}
