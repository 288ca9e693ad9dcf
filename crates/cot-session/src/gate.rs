//! Session gate
//!
//! Resolves a submitted credential pair against the user collection.
//! Every account shares the single literal credential; a rejection never
//! says whether the email or the password was at fault, so callers cannot
//! enumerate accounts. No lockout or attempt counting exists.

use cot_model::{Role, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The shared literal credential accepted for every account
pub const SHARED_PASSWORD: &str = "password";

/// Authentication failure
///
/// Deliberately detail-free: unknown email and wrong password are
/// indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials did not resolve to an account
    #[error("invalid credentials")]
    Rejected,
}

/// An authenticated user, held for the duration of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    user: User,
}

impl Subject {
    /// Wrap an already-resolved user
    ///
    /// Used by the session cache restore path, which trusts the cached
    /// value without re-validation.
    #[inline]
    #[must_use]
    pub fn from_user(user: User) -> Self {
        Self { user }
    }

    /// The underlying user value
    #[inline]
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The subject's role
    #[inline]
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.role
    }

    /// The subject's display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.user.name
    }
}

/// Resolve a credential pair to an authenticated subject
///
/// Looks up the first user whose email matches exactly, then compares the
/// password against [`SHARED_PASSWORD`].
///
/// # Errors
/// `AuthError::Rejected` when no email matches or the password is wrong,
/// with no distinction between the two.
pub fn authenticate(users: &[User], email: &str, password: &str) -> Result<Subject, AuthError> {
    let user = users.iter().find(|u| u.email == email);
    match user {
        Some(user) if password == SHARED_PASSWORD => {
            info!(email = %user.email, role = %user.role, "login accepted");
            Ok(Subject::from_user(user.clone()))
        }
        _ => {
            warn!(email, "login rejected");
            Err(AuthError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cot_model::{UserDraft, UserId};

    fn users() -> Vec<User> {
        vec![
            User::from_draft(
                UserId::new(),
                UserDraft::new("admin@matildacloud.com", "Super Admin").with_role(Role::SuperAdmin),
            ),
            User::from_draft(
                UserId::new(),
                UserDraft::new("user@matildacloud.com", "Normal User"),
            ),
        ]
    }

    #[test]
    fn valid_credentials_yield_subject() {
        let users = users();
        let subject = authenticate(&users, "admin@matildacloud.com", "password").unwrap();
        assert_eq!(subject.role(), Role::SuperAdmin);
        assert_eq!(subject.name(), "Super Admin");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let users = users();
        let result = authenticate(&users, "admin@matildacloud.com", "wrong");
        assert_eq!(result, Err(AuthError::Rejected));
    }

    #[test]
    fn unknown_email_is_rejected_identically() {
        let users = users();
        let unknown = authenticate(&users, "nobody@x.com", "password");
        let bad_pass = authenticate(&users, "admin@matildacloud.com", "wrong");
        // Same error for both failure modes.
        assert_eq!(unknown, bad_pass);
    }

    #[test]
    fn first_email_match_wins() {
        let mut users = users();
        users.push(User::from_draft(
            UserId::new(),
            UserDraft::new("user@matildacloud.com", "Impostor").with_role(Role::SuperAdmin),
        ));

        let subject = authenticate(&users, "user@matildacloud.com", "password").unwrap();
        assert_eq!(subject.name(), "Normal User");
    }
}
