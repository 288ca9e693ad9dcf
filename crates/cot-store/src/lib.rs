//! COT Store - In-memory record store
//!
//! Exclusive owner of the customer and user collections:
//! - [`CustomerStore`]: ordered CRUD over onboarding records
//! - [`UserStore`]: create/delete plus email lookup for the session gate
//! - [`RecordStore`]: both collections under one handle, optionally
//!   pre-loaded with the demo dataset
//!
//! Every operation is synchronous and atomic relative to the others:
//! there is one logical actor, and a mutation is visible to the very next
//! query. Unknown-id update/delete surfaces [`StoreError`] rather than
//! silently no-opping, so callers can decide whether to ignore it.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod customers;
mod error;
pub mod seed;
mod users;

// Re-exports
pub use customers::CustomerStore;
pub use error::StoreError;
pub use users::UserStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Both collections under a single owner
///
/// Constructed at session start and torn down at session end; handed by
/// reference to whichever component needs it, never held as an ambient
/// global.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Customer onboarding records
    pub customers: CustomerStore,
    /// User accounts
    pub users: UserStore,
}

impl RecordStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the demo customers and accounts
    #[must_use]
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        for draft in seed::demo_customers() {
            store.customers.create(draft);
        }
        for draft in seed::demo_users() {
            store.users.create(draft);
        }
        store
    }
}
