//! COT Query - Pure query engine over record snapshots
//!
//! - [`filter`]: the visible subset of the customer list given a free-text
//!   term and a [`StatusFilter`], order-preserving and non-mutating
//! - [`StatusBreakdown`] / [`RoleBreakdown`]: the dashboard and admin
//!   panel counts
//!
//! Nothing in this crate holds state; every function borrows a snapshot
//! passed in by the caller.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod filter;
mod stats;

// Re-exports
pub use filter::{filter, matches_search, StatusFilter};
pub use stats::{RoleBreakdown, StatusBreakdown};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
