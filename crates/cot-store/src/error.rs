//! Error types for the record store
//!
//! Both variants are expected, recoverable outcomes: update/delete by an
//! unknown id leaves the collection untouched and reports `NotFound` to
//! the caller, who may surface it or ignore it.

use cot_model::{CustomerId, UserId};

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No customer record has the given id
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// No user has the given id
    #[error("user not found: {0}")]
    UserNotFound(UserId),
}
