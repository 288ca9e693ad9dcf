//! User collection
//!
//! Accounts are created and deleted by administrative action only; there
//! is no update operation. Email lookup returns the first match, so
//! duplicate emails resolve to whichever account was created first.

use crate::error::StoreError;
use cot_model::{User, UserDraft, UserId};
use tracing::debug;

/// Ordered, insertion-order collection of user accounts
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in insertion order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// First user whose email matches exactly (case-sensitive)
    #[inline]
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Create a user from a draft, assigning a fresh id
    pub fn create(&mut self, draft: UserDraft) -> User {
        let user = User::from_draft(UserId::new(), draft);
        debug!(id = %user.id, email = %user.email, role = %user.role, "user created");
        self.users.push(user.clone());
        user
    }

    /// Remove the user with the given id
    ///
    /// # Errors
    /// `StoreError::UserNotFound` if no user has that id.
    pub fn delete(&mut self, id: UserId) -> Result<User, StoreError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        debug!(id = %id, "user deleted");
        Ok(self.users.remove(idx))
    }

    /// Number of users
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cot_model::Role;

    #[test]
    fn create_and_find_by_email() {
        let mut store = UserStore::new();
        store.create(UserDraft::new("admin@matildacloud.com", "Super Admin").with_role(Role::SuperAdmin));
        store.create(UserDraft::new("user@matildacloud.com", "Normal User"));

        let found = store.find_by_email("admin@matildacloud.com").unwrap();
        assert_eq!(found.role, Role::SuperAdmin);
        assert!(store.find_by_email("nobody@x.com").is_none());
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let mut store = UserStore::new();
        store.create(UserDraft::new("admin@matildacloud.com", "Super Admin"));
        assert!(store.find_by_email("Admin@MatildaCloud.com").is_none());
    }

    #[test]
    fn duplicate_emails_resolve_to_first_match() {
        let mut store = UserStore::new();
        let first = store.create(UserDraft::new("dup@matildacloud.com", "First"));
        store.create(UserDraft::new("dup@matildacloud.com", "Second"));

        assert_eq!(store.find_by_email("dup@matildacloud.com").unwrap().id, first.id);
    }

    #[test]
    fn delete_by_id() {
        let mut store = UserStore::new();
        let user = store.create(UserDraft::new("user@matildacloud.com", "Normal User"));

        let removed = store.delete(user.id).unwrap();
        assert_eq!(removed.id, user.id);
        assert!(store.is_empty());

        let missing = UserId::new();
        assert_eq!(store.delete(missing), Err(StoreError::UserNotFound(missing)));
    }
}
