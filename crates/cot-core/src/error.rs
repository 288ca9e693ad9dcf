//! Error types for the tracker facade
//!
//! Everything here is an expected, recoverable outcome reported as an
//! ordinary return value. The presentation layer decides whether a
//! `Store(NotFound)` is surfaced or treated as a silent no-op.

use crate::authz::Capability;
use cot_model::Role;
use cot_session::{AuthError, CacheError};
use cot_store::StoreError;

/// Main tracker error type
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// No subject is logged in
    #[error("not authenticated")]
    NotAuthenticated,

    /// The subject's role does not hold the required capability
    #[error("access denied: {role} may not {capability}")]
    AccessDenied {
        /// Role of the current subject
        role: Role,
        /// Capability the operation requires
        capability: Capability,
    },

    /// Store lookup failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication failed
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Session cache failed
    #[error("session cache error: {0}")]
    Cache(#[from] CacheError),
}

impl TrackerError {
    /// Whether this error denies access (missing login or capability)
    #[inline]
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::AccessDenied { .. })
    }
}
