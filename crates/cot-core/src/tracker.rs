//! Tracker facade
//!
//! One session's view of the system: the session gate authorizes a
//! subject, the subject drives store mutations subject to role, and the
//! query engine filters store output for presentation. The facade owns
//! the record store and the session cache for its lifetime; collaborators
//! only ever see borrowed snapshots.

use crate::authz::{allows, Capability};
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use cot_model::{CustomerDraft, CustomerId, CustomerRecord, User, UserDraft, UserId};
use cot_query::{RoleBreakdown, StatusBreakdown, StatusFilter};
use cot_session::{authenticate, MemorySessionCache, SessionCache, Subject};
use cot_store::RecordStore;
use tracing::{info, warn};

/// Customer onboarding tracker
///
/// Constructed at session start, torn down at session end. All operations
/// run synchronously to completion; a mutation is visible to the very
/// next query.
pub struct Tracker {
    store: RecordStore,
    cache: Box<dyn SessionCache>,
    subject: Option<Subject>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("customers", &self.store.customers.len())
            .field("users", &self.store.users.len())
            .field("subject", &self.subject.as_ref().map(Subject::name))
            .finish()
    }
}

impl Tracker {
    /// Create a tracker with an in-process session cache
    #[must_use]
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            store: if config.load_demo_data {
                RecordStore::with_demo_data()
            } else {
                RecordStore::new()
            },
            cache: Box::new(MemorySessionCache::new()),
            subject: None,
        }
    }

    /// Create a tracker backed by the given session cache
    ///
    /// When the configuration asks for it, a previously cached subject is
    /// restored immediately, without re-validation against the current
    /// user collection.
    ///
    /// # Errors
    /// `TrackerError::Cache` if the cache cannot be read during restore.
    pub fn with_cache(
        config: &TrackerConfig,
        cache: Box<dyn SessionCache>,
    ) -> Result<Self, TrackerError> {
        let mut tracker = Self {
            store: if config.load_demo_data {
                RecordStore::with_demo_data()
            } else {
                RecordStore::new()
            },
            cache,
            subject: None,
        };
        if config.restore_session {
            tracker.restore_session()?;
        }
        Ok(tracker)
    }

    // ---- session -----------------------------------------------------

    /// Log in with a credential pair
    ///
    /// On success the subject is held for the session and written to the
    /// cache under the fixed session key.
    ///
    /// # Errors
    /// - `TrackerError::Auth` when the credentials are rejected
    /// - `TrackerError::Cache` when the subject cannot be cached
    pub fn login(&mut self, email: &str, password: &str) -> Result<Subject, TrackerError> {
        let subject = authenticate(self.store.users.list(), email, password)?;
        self.cache.save(&subject)?;
        self.subject = Some(subject.clone());
        Ok(subject)
    }

    /// Restore a cached session, if one exists
    ///
    /// Trust-on-read: the cached subject is accepted without consulting
    /// the user collection.
    ///
    /// # Errors
    /// `TrackerError::Cache` if the cache cannot be read.
    pub fn restore_session(&mut self) -> Result<Option<Subject>, TrackerError> {
        let restored = self.cache.load()?;
        if let Some(subject) = &restored {
            info!(name = %subject.name(), "session restored");
        }
        self.subject = restored.clone();
        Ok(restored)
    }

    /// Log out, dropping the subject and clearing the cached session
    ///
    /// # Errors
    /// `TrackerError::Cache` if the cache cannot be cleared.
    pub fn logout(&mut self) -> Result<(), TrackerError> {
        if let Some(subject) = self.subject.take() {
            info!(name = %subject.name(), "logged out");
        }
        self.cache.clear()?;
        Ok(())
    }

    /// The currently authenticated subject, if any
    #[inline]
    #[must_use]
    pub fn current_subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    // ---- queries -----------------------------------------------------

    /// All customer records in insertion order
    ///
    /// # Errors
    /// `TrackerError::NotAuthenticated` when no subject is logged in.
    pub fn customers(&self) -> Result<&[CustomerRecord], TrackerError> {
        self.authenticated()?;
        Ok(self.store.customers.list())
    }

    /// The visible subset for a search term and status filter
    ///
    /// # Errors
    /// `TrackerError::NotAuthenticated` when no subject is logged in.
    pub fn visible_customers(
        &self,
        term: &str,
        status: StatusFilter,
    ) -> Result<Vec<&CustomerRecord>, TrackerError> {
        self.authenticated()?;
        Ok(cot_query::filter(self.store.customers.list(), term, status))
    }

    /// Customer counts by onboarding status (dashboard header)
    ///
    /// # Errors
    /// `TrackerError::NotAuthenticated` when no subject is logged in.
    pub fn status_breakdown(&self) -> Result<StatusBreakdown, TrackerError> {
        self.authenticated()?;
        Ok(StatusBreakdown::for_customers(self.store.customers.list()))
    }

    /// All user accounts (admin panel)
    ///
    /// # Errors
    /// `TrackerError::AccessDenied` unless the subject may view the admin
    /// panel.
    pub fn users(&self) -> Result<&[User], TrackerError> {
        self.require(Capability::ViewAdminPanel)?;
        Ok(self.store.users.list())
    }

    /// User counts by role (admin panel)
    ///
    /// # Errors
    /// `TrackerError::AccessDenied` unless the subject may view the admin
    /// panel.
    pub fn role_breakdown(&self) -> Result<RoleBreakdown, TrackerError> {
        self.require(Capability::ViewAdminPanel)?;
        Ok(RoleBreakdown::for_users(self.store.users.list()))
    }

    // ---- customer mutations -------------------------------------------

    /// Create a customer record from a draft
    ///
    /// # Errors
    /// `TrackerError::NotAuthenticated` / `AccessDenied` per role.
    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<CustomerRecord, TrackerError> {
        self.require(Capability::CreateCustomer)?;
        Ok(self.store.customers.create(draft))
    }

    /// Replace all fields of an existing customer record
    ///
    /// # Errors
    /// - `TrackerError::NotAuthenticated` / `AccessDenied` per role
    /// - `TrackerError::Store` when the id is unknown
    pub fn update_customer(
        &mut self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<CustomerRecord, TrackerError> {
        self.require(Capability::UpdateCustomer)?;
        Ok(self.store.customers.update(id, draft)?)
    }

    /// Delete a customer record
    ///
    /// # Errors
    /// - `TrackerError::NotAuthenticated` / `AccessDenied` per role
    /// - `TrackerError::Store` when the id is unknown
    pub fn delete_customer(&mut self, id: CustomerId) -> Result<CustomerRecord, TrackerError> {
        self.require(Capability::DeleteCustomer)?;
        Ok(self.store.customers.delete(id)?)
    }

    /// Delete every customer record
    ///
    /// # Errors
    /// `TrackerError::NotAuthenticated` / `AccessDenied` per role.
    pub fn purge_customers(&mut self) -> Result<(), TrackerError> {
        self.require(Capability::PurgeCustomers)?;
        info!("purging all customer records");
        self.store.customers.delete_all();
        Ok(())
    }

    // ---- user mutations -------------------------------------------------

    /// Create a user account
    ///
    /// # Errors
    /// `TrackerError::NotAuthenticated` / `AccessDenied` per role.
    pub fn add_user(&mut self, draft: UserDraft) -> Result<User, TrackerError> {
        self.require(Capability::ManageUsers)?;
        Ok(self.store.users.create(draft))
    }

    /// Delete a user account
    ///
    /// Deleting the account behind the current session does not end the
    /// session; the cached subject stays trusted until logout.
    ///
    /// # Errors
    /// - `TrackerError::NotAuthenticated` / `AccessDenied` per role
    /// - `TrackerError::Store` when the id is unknown
    pub fn remove_user(&mut self, id: UserId) -> Result<User, TrackerError> {
        self.require(Capability::ManageUsers)?;
        Ok(self.store.users.delete(id)?)
    }

    // ---- helpers -------------------------------------------------------

    fn authenticated(&self) -> Result<(), TrackerError> {
        if self.subject.is_some() {
            Ok(())
        } else {
            Err(TrackerError::NotAuthenticated)
        }
    }

    fn require(&self, capability: Capability) -> Result<(), TrackerError> {
        let subject = self.subject.as_ref().ok_or(TrackerError::NotAuthenticated)?;
        let role = subject.role();
        if allows(role, capability) {
            Ok(())
        } else {
            warn!(%role, %capability, "capability denied");
            Err(TrackerError::AccessDenied { role, capability })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cot_model::{OnboardingStatus, Role};

    fn logged_in(email: &str) -> Tracker {
        let mut tracker = Tracker::new(&TrackerConfig::new());
        tracker.login(email, "password").unwrap();
        tracker
    }

    #[test]
    fn operations_require_login() {
        let tracker = Tracker::new(&TrackerConfig::new());
        assert!(matches!(
            tracker.customers(),
            Err(TrackerError::NotAuthenticated)
        ));
        assert!(matches!(
            tracker.visible_customers("", StatusFilter::All),
            Err(TrackerError::NotAuthenticated)
        ));
    }

    #[test]
    fn normal_user_can_view_and_create_only() {
        let mut tracker = logged_in("user@matildacloud.com");
        assert_eq!(tracker.customers().unwrap().len(), 6);

        let record = tracker
            .add_customer(CustomerDraft::new("New Co", "Partner Co"))
            .unwrap();
        assert_eq!(tracker.customers().unwrap().len(), 7);

        let denied = tracker.delete_customer(record.id);
        assert!(matches!(
            denied,
            Err(TrackerError::AccessDenied {
                role: Role::NormalUser,
                capability: Capability::DeleteCustomer,
            })
        ));
        assert!(tracker.users().is_err());
        assert!(tracker.purge_customers().is_err());
    }

    #[test]
    fn super_admin_can_mutate_everything() {
        let mut tracker = logged_in("admin@matildacloud.com");

        let record = tracker
            .add_customer(CustomerDraft::new("New Co", "Partner Co"))
            .unwrap();
        let updated = tracker
            .update_customer(
                record.id,
                record.to_draft().with_status(OnboardingStatus::Blocked),
            )
            .unwrap();
        assert_eq!(updated.onboarding_status, OnboardingStatus::Blocked);

        tracker.delete_customer(record.id).unwrap();
        tracker.purge_customers().unwrap();
        assert!(tracker.customers().unwrap().is_empty());

        let user = tracker
            .add_user(UserDraft::new("new@matildacloud.com", "New User"))
            .unwrap();
        assert_eq!(tracker.users().unwrap().len(), 3);
        tracker.remove_user(user.id).unwrap();
    }

    #[test]
    fn logout_ends_the_session() {
        let mut tracker = logged_in("admin@matildacloud.com");
        assert!(tracker.current_subject().is_some());

        tracker.logout().unwrap();
        assert!(tracker.current_subject().is_none());
        assert!(matches!(
            tracker.customers(),
            Err(TrackerError::NotAuthenticated)
        ));
    }

    #[test]
    fn breakdown_matches_seed_data() {
        let tracker = logged_in("user@matildacloud.com");
        let stats = tracker.status_breakdown().unwrap();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.percent_completed(), 50);
    }
}
