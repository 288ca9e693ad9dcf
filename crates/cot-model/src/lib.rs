//! COT Model - Domain types for the Customer Onboarding Tracker
//!
//! Defines the data model shared by every other crate:
//! - [`CustomerRecord`] / [`CustomerDraft`]: the onboarding record and its
//!   pre-id field set
//! - [`User`] / [`UserDraft`]: accounts with a two-role permission model
//! - Status enums with the exact wire strings of the original dataset
//! - The field-visibility policy gating the onboarded-environment tag
//!
//! All types here are plain values: no interior mutability, no I/O. The
//! store crate owns the collections; query and policy functions operate on
//! borrowed snapshots.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod customer;
mod id;
pub mod policy;
mod user;

// Re-exports
pub use customer::{
    CustomerDraft, CustomerRecord, Environment, JobStatus, OnboardingStatus, ParseStatusError,
};
pub use id::{CustomerId, UserId};
pub use policy::{environment_applicable, DraftError};
pub use user::{Role, User, UserDraft};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the tracker model
    pub use crate::{
        CustomerDraft, CustomerId, CustomerRecord, Environment, JobStatus, OnboardingStatus, Role,
        User, UserDraft, UserId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
