use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::ProfileField;

/// User role as reported by the school API.
///
/// Unknown role strings are kept in [`Role::Other`] so they round-trip
/// unchanged; such users never receive role-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Teacher,
    Parent,
    BranchAdmin,
    SuperAdmin,
    Other(String),
}

impl Role {
    /// The wire/display name of the role.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
            Role::BranchAdmin => "Branch Admin",
            Role::SuperAdmin => "Super Admin",
            Role::Other(name) => name,
        }
    }

    /// The single identifier field that belongs to this role, if any.
    pub fn identifier_field(&self) -> Option<ProfileField> {
        match self {
            Role::Student => Some(ProfileField::AdmissionNumber),
            Role::Parent => Some(ProfileField::ParentNumber),
            Role::Teacher | Role::BranchAdmin | Role::SuperAdmin => Some(ProfileField::StaffId),
            Role::Other(_) => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Student" => Role::Student,
            "Teacher" => Role::Teacher,
            "Parent" => Role::Parent,
            "Branch Admin" => Role::BranchAdmin,
            "Super Admin" => Role::SuperAdmin,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
