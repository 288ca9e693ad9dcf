//! Demo dataset
//!
//! The six customer records and two accounts the tracker ships with.
//! Field values are the original demo data; ids are assigned by the
//! store when the drafts are loaded.

use cot_model::{
    CustomerDraft, Environment, JobStatus, OnboardingStatus, Role, UserDraft,
};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    // All call sites use valid calendar literals.
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date literal")
}

/// Drafts for the six demo customers, in seed order
#[must_use]
pub fn demo_customers() -> Vec<CustomerDraft> {
    vec![
        CustomerDraft::new("Academy of General Dentistry", "TechPartner A")
            .with_status(OnboardingStatus::InProgress)
            .with_requester("John Smith")
            .with_handover("Sarah Johnson")
            .with_opportunity("OPP-2024-001")
            .with_deep_discovery(true)
            .with_accounts(5)
            .with_clouds("AWS", "Azure")
            .with_discovery_date(date(2024, 1, 15))
            .with_jobs(
                JobStatus::InProgress,
                JobStatus::Completed,
                JobStatus::NotStarted,
                JobStatus::NotStarted,
            )
            .with_notes("Initial setup in progress"),
        CustomerDraft::new("Epharma", "CloudTech Solutions")
            .with_status(OnboardingStatus::Completed)
            .with_requester("Fabio")
            .with_handover("Chida")
            .with_opportunity("OPP-2024-002")
            .with_deep_discovery(true)
            .with_accounts(12)
            .with_clouds("GCP", "AWS")
            .with_onboarded_date(date(2025, 7, 11))
            .with_discovery_date(date(2024, 2, 20))
            .with_jobs(
                JobStatus::Completed,
                JobStatus::Completed,
                JobStatus::Completed,
                JobStatus::InProgress,
            )
            .with_notes("Informed Chida for final handover")
            .with_environment(Environment::MatildaOptimize),
        CustomerDraft::new("BCDR AerieHub", "DataFlow Inc")
            .with_status(OnboardingStatus::Blocked)
            .with_requester("Mike Wilson")
            .with_handover("Alex Chen")
            .with_opportunity("OPP-2024-003")
            .with_accounts(3)
            .with_clouds("Azure", "GCP")
            .with_jobs(
                JobStatus::Blocked,
                JobStatus::NotStarted,
                JobStatus::NotStarted,
                JobStatus::NotStarted,
            )
            .with_notes("Waiting for security clearance"),
        CustomerDraft::new("Cogna", "InnovateTech")
            .with_status(OnboardingStatus::Completed)
            .with_requester("Lisa Brown")
            .with_handover("David Kim")
            .with_opportunity("OPP-2024-004")
            .with_deep_discovery(true)
            .with_accounts(8)
            .with_clouds("AWS", "Azure")
            .with_onboarded_date(date(2024, 12, 15))
            .with_discovery_date(date(2024, 3, 10))
            .with_jobs(
                JobStatus::Completed,
                JobStatus::Completed,
                JobStatus::Completed,
                JobStatus::Completed,
            )
            .with_notes("Migration completed successfully")
            .with_environment(Environment::RapidAssessments),
        CustomerDraft::new("Global Finance Corp", "FinTech Solutions")
            .with_status(OnboardingStatus::InProgress)
            .with_requester("Michael Chen")
            .with_handover("Emma Wilson")
            .with_opportunity("OPP-2024-005")
            .with_deep_discovery(true)
            .with_accounts(15)
            .with_clouds("AWS", "Azure")
            .with_discovery_date(date(2024, 3, 25))
            .with_jobs(
                JobStatus::InProgress,
                JobStatus::InProgress,
                JobStatus::NotStarted,
                JobStatus::NotStarted,
            )
            .with_notes("Large enterprise migration in progress"),
        CustomerDraft::new("Healthcare Plus", "MedTech Partners")
            .with_status(OnboardingStatus::Completed)
            .with_requester("Dr. Sarah Lee")
            .with_handover("James Rodriguez")
            .with_opportunity("OPP-2024-006")
            .with_deep_discovery(true)
            .with_accounts(7)
            .with_clouds("GCP", "AWS")
            .with_onboarded_date(date(2024, 11, 20))
            .with_discovery_date(date(2024, 2, 10))
            .with_jobs(
                JobStatus::Completed,
                JobStatus::Completed,
                JobStatus::Completed,
                JobStatus::Completed,
            )
            .with_notes("Healthcare compliance requirements met")
            .with_environment(Environment::MatildaOptimizeAu),
    ]
}

/// Drafts for the two demo accounts
#[must_use]
pub fn demo_users() -> Vec<UserDraft> {
    vec![
        UserDraft::new("admin@matildacloud.com", "Super Admin").with_role(Role::SuperAdmin),
        UserDraft::new("user@matildacloud.com", "Normal User"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_customers_two_users() {
        assert_eq!(demo_customers().len(), 6);
        assert_eq!(demo_users().len(), 2);
    }

    #[test]
    fn completed_customers_carry_environments() {
        for draft in demo_customers() {
            if draft.onboarding_status == OnboardingStatus::Completed {
                assert!(draft.onboarded_environment.is_some(), "{}", draft.customer);
            } else {
                assert!(draft.onboarded_environment.is_none(), "{}", draft.customer);
            }
        }
    }

    #[test]
    fn seed_drafts_validate() {
        for draft in demo_customers() {
            assert_eq!(draft.validate(), Ok(()), "{}", draft.customer);
        }
    }
}
