//! User and role types
//!
//! Users are created and deleted by administrative action and never
//! otherwise mutated. Email uniqueness is not enforced; when duplicates
//! exist the session gate resolves to the first match.

use crate::id::UserId;
use serde::{Deserialize, Serialize};

/// Role held by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access: record mutation, user management, purge
    #[serde(rename = "super_admin")]
    SuperAdmin,
    /// Read access plus record creation
    #[serde(rename = "normal_user")]
    NormalUser,
}

impl Role {
    /// Wire/display string for this role
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::NormalUser => "normal_user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::NormalUser
    }
}

/// One user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier (store-assigned, immutable)
    pub id: UserId,
    /// Login email (exact-match, case-sensitive)
    pub email: String,
    /// Display name
    pub name: String,
    /// Assigned role
    pub role: Role,
}

impl User {
    /// Build a user from a draft and a store-assigned id
    #[inline]
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            email: draft.email,
            name: draft.name,
            role: draft.role,
        }
    }

    /// Whether this user holds the super-admin role
    #[inline]
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

/// A user's field set prior to id assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Assigned role (defaults to `NormalUser`, as the admin form does)
    pub role: Role,
}

impl UserDraft {
    /// Create a new draft with the default role
    #[inline]
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role: Role::NormalUser,
        }
    }

    /// With role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
