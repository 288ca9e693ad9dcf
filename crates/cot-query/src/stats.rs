//! Dashboard statistics
//!
//! Per-status customer counts and per-role user counts, computed over
//! borrowed snapshots. Percentages are integer, rounded, and zero when
//! the collection is empty.

use cot_model::{CustomerRecord, OnboardingStatus, Role, User};
use serde::{Deserialize, Serialize};

/// Customer counts by onboarding status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// All customers
    pub total: usize,
    /// Customers with status Completed
    pub completed: usize,
    /// Customers with status In Progress
    pub in_progress: usize,
    /// Customers with status Blocked
    pub blocked: usize,
}

impl StatusBreakdown {
    /// Count statuses across a record snapshot
    #[must_use]
    pub fn for_customers(records: &[CustomerRecord]) -> Self {
        let mut breakdown = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.onboarding_status {
                OnboardingStatus::Completed => breakdown.completed += 1,
                OnboardingStatus::InProgress => breakdown.in_progress += 1,
                OnboardingStatus::Blocked => breakdown.blocked += 1,
            }
        }
        breakdown
    }

    /// Completed share of the total, as a rounded whole percent
    #[inline]
    #[must_use]
    pub fn percent_completed(&self) -> u32 {
        percent(self.completed, self.total)
    }

    /// In-progress share of the total, as a rounded whole percent
    #[inline]
    #[must_use]
    pub fn percent_in_progress(&self) -> u32 {
        percent(self.in_progress, self.total)
    }

    /// Blocked share of the total, as a rounded whole percent
    #[inline]
    #[must_use]
    pub fn percent_blocked(&self) -> u32 {
        percent(self.blocked, self.total)
    }
}

/// User counts by role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBreakdown {
    /// All users
    pub total: usize,
    /// Users with the super-admin role
    pub super_admins: usize,
    /// Users with the normal-user role
    pub normal_users: usize,
}

impl RoleBreakdown {
    /// Count roles across a user snapshot
    #[must_use]
    pub fn for_users(users: &[User]) -> Self {
        let mut breakdown = Self {
            total: users.len(),
            ..Self::default()
        };
        for user in users {
            match user.role {
                Role::SuperAdmin => breakdown.super_admins += 1,
                Role::NormalUser => breakdown.normal_users += 1,
            }
        }
        breakdown
    }
}

/// Rounded whole percent, zero when the total is zero
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
}
