//! Customer collection
//!
//! Owns the ordered customer records. Creation appends and assigns the
//! id; update replaces all fields in place, keeping the record's position;
//! every mutation is synchronous and immediately visible to re-query.

use crate::error::StoreError;
use cot_model::{CustomerDraft, CustomerId, CustomerRecord};
use tracing::debug;

/// Ordered, insertion-order collection of customer records
#[derive(Debug, Clone, Default)]
pub struct CustomerStore {
    records: Vec<CustomerRecord>,
}

impl CustomerStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order
    ///
    /// The slice borrows the live collection; callers that need the data
    /// to survive a later mutation must clone it.
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[CustomerRecord] {
        &self.records
    }

    /// Look up a record by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: CustomerId) -> Option<&CustomerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Create a record from a draft, assigning a fresh id
    ///
    /// Appends to the end of the collection and returns the full record.
    /// Never fails: there are no uniqueness constraints to violate.
    pub fn create(&mut self, draft: CustomerDraft) -> CustomerRecord {
        let record = CustomerRecord::from_draft(CustomerId::new(), draft);
        debug!(id = %record.id, customer = %record.customer, "customer created");
        self.records.push(record.clone());
        record
    }

    /// Replace all fields of the record with the given id
    ///
    /// The record keeps its position in the ordered sequence and its id.
    ///
    /// # Errors
    /// `StoreError::CustomerNotFound` if no record has that id; the
    /// collection is left untouched.
    pub fn update(&mut self, id: CustomerId, draft: CustomerDraft) -> Result<CustomerRecord, StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::CustomerNotFound(id))?;
        *slot = CustomerRecord::from_draft(id, draft);
        debug!(id = %id, "customer updated");
        Ok(slot.clone())
    }

    /// Remove the record with the given id
    ///
    /// # Errors
    /// `StoreError::CustomerNotFound` if no record has that id.
    pub fn delete(&mut self, id: CustomerId) -> Result<CustomerRecord, StoreError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::CustomerNotFound(id))?;
        debug!(id = %id, "customer deleted");
        Ok(self.records.remove(idx))
    }

    /// Remove every record unconditionally
    pub fn delete_all(&mut self) {
        debug!(count = self.records.len(), "all customers deleted");
        self.records.clear();
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
