use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::OrgError;

/// Role - the closed set of positions an employee can hold
///
/// Roles are parsed once at the boundary; everything below the boundary
/// compares variants, never strings. The declaration order runs from the
/// top of the organisation down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Founder,
    #[serde(rename = "Co-Founder", alias = "CoFounder")]
    CoFounder,
    Director,
    Manager,
    Supervisor,
    Worker,
}

impl Role {
    /// All roles, top of the organisation first
    pub const ALL: [Role; 6] = [
        Role::Founder,
        Role::CoFounder,
        Role::Director,
        Role::Manager,
        Role::Supervisor,
        Role::Worker,
    ];

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Founder => "Founder",
            Role::CoFounder => "Co-Founder",
            Role::Director => "Director",
            Role::Manager => "Manager",
            Role::Supervisor => "Supervisor",
            Role::Worker => "Worker",
        }
    }

    /// Top-level roles may exist without a superior
    pub fn is_top_level(&self) -> bool {
        matches!(self, Role::Founder | Role::CoFounder)
    }

    /// Department-scoped roles must be created with a non-empty department
    pub fn requires_department(&self) -> bool {
        !self.is_top_level()
    }
}

impl FromStr for Role {
    type Err = OrgError;

    /// Parse a role name (exact match). Both `CoFounder` and `Co-Founder`
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Founder" => Ok(Role::Founder),
            "CoFounder" | "Co-Founder" => Ok(Role::CoFounder),
            "Director" => Ok(Role::Director),
            "Manager" => Ok(Role::Manager),
            "Supervisor" => Ok(Role::Supervisor),
            "Worker" => Ok(Role::Worker),
            other => Err(OrgError::UnknownRole {
                role: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_roles_round_trip_through_display() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_cofounder_spellings() {
        assert_eq!("CoFounder".parse::<Role>().unwrap(), Role::CoFounder);
        assert_eq!("Co-Founder".parse::<Role>().unwrap(), Role::CoFounder);
    }

    #[test]
    fn test_parse_unknown_role() {
        let result = "Intern".parse::<Role>();
        assert!(matches!(result, Err(OrgError::UnknownRole { ref role }) if role == "Intern"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("worker".parse::<Role>().is_err());
        assert!(" Worker".parse::<Role>().is_err());
    }

    #[test]
    fn test_top_level_roles() {
        assert!(Role::Founder.is_top_level());
        assert!(Role::CoFounder.is_top_level());
        assert!(!Role::Director.is_top_level());
        assert!(Role::Worker.requires_department());
        assert!(!Role::Founder.requires_department());
    }

    #[test]
    fn test_serde_uses_display_name_for_cofounder() {
        let json = serde_json::to_string(&Role::CoFounder).unwrap();
        assert_eq!(json, "\"Co-Founder\"");

        let parsed: Role = serde_json::from_str("\"CoFounder\"").unwrap();
        assert_eq!(parsed, Role::CoFounder);
    }
}
