//! Field visibility policy
//!
//! Derives, from a record's onboarding status, whether the onboarded
//! environment field applies. The store never enforces this: it is the
//! form-building collaborator's job to call [`CustomerDraft::validate`]
//! before persisting and [`CustomerDraft::normalized`] when the status
//! makes the field inapplicable.

use crate::customer::{CustomerDraft, OnboardingStatus};

/// Whether the onboarded-environment field applies for a given status
///
/// True only for `Completed`; in every other state the field is not
/// applicable and form collaborators must treat it as absent.
#[inline]
#[must_use]
pub fn environment_applicable(status: OnboardingStatus) -> bool {
    status == OnboardingStatus::Completed
}

/// Draft validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Customer name left blank
    #[error("customer name is required")]
    MissingCustomer,

    /// Partner name left blank
    #[error("partner is required")]
    MissingPartner,

    /// Status is Completed but no environment was selected
    #[error("onboarded environment is required when status is Completed")]
    MissingEnvironment,
}

impl CustomerDraft {
    /// Validate a draft the way the entry form does before submission
    ///
    /// # Errors
    /// - `DraftError::MissingCustomer` / `MissingPartner` for blank
    ///   mandatory names
    /// - `DraftError::MissingEnvironment` when the status is `Completed`
    ///   and no environment tag is set
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.customer.trim().is_empty() {
            return Err(DraftError::MissingCustomer);
        }
        if self.partner.trim().is_empty() {
            return Err(DraftError::MissingPartner);
        }
        if environment_applicable(self.onboarding_status) && self.onboarded_environment.is_none() {
            return Err(DraftError::MissingEnvironment);
        }
        Ok(())
    }

    /// Clear the environment tag when the status makes it inapplicable
    ///
    /// A draft may carry an environment left over from a previous
    /// `Completed` state; normalization drops it for any other status.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !environment_applicable(self.onboarding_status) {
            self.onboarded_environment = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Environment;

    #[test]
    fn environment_applies_only_when_completed() {
        assert!(environment_applicable(OnboardingStatus::Completed));
        assert!(!environment_applicable(OnboardingStatus::InProgress));
        assert!(!environment_applicable(OnboardingStatus::Blocked));
    }

    #[test]
    fn validate_requires_names() {
        let draft = CustomerDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingCustomer));

        let draft = CustomerDraft::new("Epharma", "");
        assert_eq!(draft.validate(), Err(DraftError::MissingPartner));
    }

    #[test]
    fn validate_requires_environment_for_completed() {
        let draft = CustomerDraft::new("Epharma", "CloudTech Solutions")
            .with_status(OnboardingStatus::Completed);
        assert_eq!(draft.validate(), Err(DraftError::MissingEnvironment));

        let draft = draft.with_environment(Environment::MatildaOptimize);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn validate_allows_missing_environment_otherwise() {
        let draft = CustomerDraft::new("BCDR AerieHub", "DataFlow Inc")
            .with_status(OnboardingStatus::Blocked);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn normalized_clears_stale_environment() {
        let draft = CustomerDraft::new("Cogna", "InnovateTech")
            .with_status(OnboardingStatus::Blocked)
            .with_environment(Environment::RapidAssessments);

        let normalized = draft.clone().normalized();
        assert!(normalized.onboarded_environment.is_none());

        // Completed drafts keep theirs.
        let completed = draft
            .with_status(OnboardingStatus::Completed)
            .normalized();
        assert_eq!(
            completed.onboarded_environment,
            Some(Environment::RapidAssessments)
        );
    }
}
