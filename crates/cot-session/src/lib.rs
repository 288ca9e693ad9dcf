//! COT Session - Session gate and local session cache
//!
//! - [`authenticate`]: credential-to-subject resolution against the user
//!   collection, with a detail-free [`AuthError::Rejected`] on failure
//! - [`SessionCache`]: the fixed-key side-channel that keeps a subject
//!   across restarts, with in-memory and file-backed implementations
//!
//! The cache restore path never re-invokes the gate; see the cache module
//! for why that trust-on-read behavior is preserved as-is.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod cache;
mod gate;

// Re-exports
pub use cache::{CacheError, FileSessionCache, MemorySessionCache, SessionCache, SESSION_KEY};
pub use gate::{authenticate, AuthError, Subject, SHARED_PASSWORD};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
