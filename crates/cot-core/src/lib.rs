//! COT Core - Customer Onboarding Tracker facade
//!
//! Wires the pieces together for one session:
//! - Authenticates a subject through the session gate
//! - Enforces role capabilities before any store mutation
//! - Filters store snapshots through the query engine for presentation
//! - Mirrors the subject to the session cache across restarts
//!
//! # Example
//!
//! ```rust,ignore
//! use cot_core::{Tracker, TrackerConfig};
//! use cot_query::StatusFilter;
//!
//! let mut tracker = Tracker::new(&TrackerConfig::new());
//! tracker.login("admin@matildacloud.com", "password")?;
//!
//! let blocked = tracker.visible_customers("", "Blocked".parse()?)?;
//! println!("{} blocked customers", blocked.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod authz;
mod config;
mod error;
mod tracker;

// Re-exports
pub use authz::{allows, Capability};
pub use config::TrackerConfig;
pub use error::TrackerError;
pub use tracker::Tracker;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the tracker
    pub use crate::{Capability, Tracker, TrackerConfig, TrackerError};
    pub use cot_model::prelude::*;
    pub use cot_query::StatusFilter;
    pub use cot_session::Subject;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
