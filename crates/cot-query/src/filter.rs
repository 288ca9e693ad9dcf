//! Record filtering
//!
//! The visible subset of the customer list: a case-insensitive substring
//! search over three name fields, ANDed with an optional status filter.
//! Pure and stable: input order is preserved and nothing is mutated.

use cot_model::{CustomerRecord, OnboardingStatus, ParseStatusError};
use serde::{Deserialize, Serialize};

/// Status filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    /// The "all" sentinel: every status passes
    All,
    /// Only records with exactly this status pass
    Only(OnboardingStatus),
}

impl StatusFilter {
    /// Whether a status passes this filter
    #[inline]
    #[must_use]
    pub fn matches(&self, status: OnboardingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == *wanted,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Whether a record matches the free-text search term
///
/// Case-insensitive substring over customer name, partner, and initial
/// requester, combined with OR. The empty term matches everything.
#[must_use]
pub fn matches_search(record: &CustomerRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.customer.to_lowercase().contains(&needle)
        || record.partner.to_lowercase().contains(&needle)
        || record.initial_requester.to_lowercase().contains(&needle)
}

/// Produce the visible subset of `records`
///
/// Final predicate is `matches_search AND status filter`. Relative order
/// of the input is preserved; the input is never mutated, so identical
/// inputs always yield identical output.
#[must_use]
pub fn filter<'a>(
    records: &'a [CustomerRecord],
    term: &str,
    status: StatusFilter,
) -> Vec<&'a CustomerRecord> {
    records
        .iter()
        .filter(|r| matches_search(r, term) && status.matches(r.onboarding_status))
        .collect()
}
