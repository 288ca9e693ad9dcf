//! Customer record types
//!
//! Defines the onboarding record, its status enums, and the draft type
//! used for create/update input:
//! - Overall onboarding status (three states, no transition graph)
//! - Per-pipeline job statuses (four independent fields)
//! - Onboarded environment tag (closed set of three environments)
//! - [`CustomerDraft`] with every field explicit and defaulted

use crate::id::CustomerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Overall onboarding status of a customer
///
/// Any state is reachable from any other via a direct update; the tracker
/// deliberately imposes no transition validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnboardingStatus {
    /// Onboarding work underway
    #[serde(rename = "In Progress")]
    InProgress,
    /// Customer fully onboarded
    Completed,
    /// Onboarding stalled on an external dependency
    Blocked,
}

impl OnboardingStatus {
    /// All status values, in display order
    pub const ALL: [OnboardingStatus; 3] = [
        OnboardingStatus::InProgress,
        OnboardingStatus::Completed,
        OnboardingStatus::Blocked,
    ];

    /// Wire/display string for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStatus::InProgress => "In Progress",
            OnboardingStatus::Completed => "Completed",
            OnboardingStatus::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OnboardingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Progress" => Ok(OnboardingStatus::InProgress),
            "Completed" => Ok(OnboardingStatus::Completed),
            "Blocked" => Ok(OnboardingStatus::Blocked),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Status of one ingestion/analysis pipeline for a customer
///
/// The four job-status fields on a record are independent of each other
/// and of the overall onboarding status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// Pipeline not yet started
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Pipeline running
    #[serde(rename = "In Progress")]
    InProgress,
    /// Pipeline finished
    Completed,
    /// Pipeline stalled
    Blocked,
}

impl JobStatus {
    /// Wire/display string for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "Not Started",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(JobStatus::NotStarted),
            "In Progress" => Ok(JobStatus::InProgress),
            "Completed" => Ok(JobStatus::Completed),
            "Blocked" => Ok(JobStatus::Blocked),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::NotStarted
    }
}

/// Target environment a completed customer was onboarded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// Primary optimize environment
    #[serde(rename = "matilda-optimize")]
    MatildaOptimize,
    /// Short-lived assessment environment
    #[serde(rename = "rapid-assessments")]
    RapidAssessments,
    /// Australian optimize environment
    #[serde(rename = "matilda-optimize.au")]
    MatildaOptimizeAu,
}

impl Environment {
    /// Wire/display string for this environment
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::MatildaOptimize => "matilda-optimize",
            Environment::RapidAssessments => "rapid-assessments",
            Environment::MatildaOptimizeAu => "matilda-optimize.au",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matilda-optimize" => Ok(Environment::MatildaOptimize),
            "rapid-assessments" => Ok(Environment::RapidAssessments),
            "matilda-optimize.au" => Ok(Environment::MatildaOptimizeAu),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Failed to parse a status or environment string
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized value: {0}")]
pub struct ParseStatusError(pub String);

/// One customer onboarding record
///
/// The id is assigned by the store at creation and is immutable; every
/// other field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Record identifier (store-assigned)
    pub id: CustomerId,
    /// Customer name
    pub customer: String,
    /// Partner organisation
    pub partner: String,
    /// Overall onboarding status
    pub onboarding_status: OnboardingStatus,
    /// Person who requested onboarding
    pub initial_requester: String,
    /// Person the engagement was handed over to
    pub handovered_to: String,
    /// Opportunity reference string
    pub opportunity: String,
    /// Whether deep discovery was performed
    pub deep_discovery: bool,
    /// Number of cloud accounts in scope
    pub accounts_count: u32,
    /// Source platform name
    pub source_cloud: String,
    /// Target platform name
    pub target_cloud: String,
    /// Date onboarding completed, if any
    pub onboarded_date: Option<NaiveDate>,
    /// Date discovery completed, if any
    pub discovery_completed_date: Option<NaiveDate>,
    /// Cost pipeline status
    pub cost_jobs: JobStatus,
    /// Metrics pipeline status
    pub metrics_jobs: JobStatus,
    /// ML pipeline status
    pub ml_jobs: JobStatus,
    /// Recommendations pipeline status
    pub recomms_jobs: JobStatus,
    /// Free-text notes
    pub notes: String,
    /// Environment the customer was onboarded into
    ///
    /// Only meaningful when `onboarding_status` is `Completed`; the model
    /// allows it to be set in other states (see the policy module).
    pub onboarded_environment: Option<Environment>,
}

impl CustomerRecord {
    /// Build a record from a draft and a store-assigned id
    #[inline]
    #[must_use]
    pub fn from_draft(id: CustomerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            customer: draft.customer,
            partner: draft.partner,
            onboarding_status: draft.onboarding_status,
            initial_requester: draft.initial_requester,
            handovered_to: draft.handovered_to,
            opportunity: draft.opportunity,
            deep_discovery: draft.deep_discovery,
            accounts_count: draft.accounts_count,
            source_cloud: draft.source_cloud,
            target_cloud: draft.target_cloud,
            onboarded_date: draft.onboarded_date,
            discovery_completed_date: draft.discovery_completed_date,
            cost_jobs: draft.cost_jobs,
            metrics_jobs: draft.metrics_jobs,
            ml_jobs: draft.ml_jobs,
            recomms_jobs: draft.recomms_jobs,
            notes: draft.notes,
            onboarded_environment: draft.onboarded_environment,
        }
    }

    /// Extract the draft portion of this record (everything but the id)
    #[inline]
    #[must_use]
    pub fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            customer: self.customer.clone(),
            partner: self.partner.clone(),
            onboarding_status: self.onboarding_status,
            initial_requester: self.initial_requester.clone(),
            handovered_to: self.handovered_to.clone(),
            opportunity: self.opportunity.clone(),
            deep_discovery: self.deep_discovery,
            accounts_count: self.accounts_count,
            source_cloud: self.source_cloud.clone(),
            target_cloud: self.target_cloud.clone(),
            onboarded_date: self.onboarded_date,
            discovery_completed_date: self.discovery_completed_date,
            cost_jobs: self.cost_jobs,
            metrics_jobs: self.metrics_jobs,
            ml_jobs: self.ml_jobs,
            recomms_jobs: self.recomms_jobs,
            notes: self.notes.clone(),
            onboarded_environment: self.onboarded_environment,
        }
    }
}

/// A customer record's field set prior to id assignment
///
/// Used as input to both create and update. Every field is present with
/// an explicit default matching the blank form: status `InProgress`,
/// clouds `"AWS"`, all pipelines `NotStarted`, counters zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Customer name
    pub customer: String,
    /// Partner organisation
    pub partner: String,
    /// Overall onboarding status
    pub onboarding_status: OnboardingStatus,
    /// Person who requested onboarding
    pub initial_requester: String,
    /// Person the engagement was handed over to
    pub handovered_to: String,
    /// Opportunity reference string
    pub opportunity: String,
    /// Whether deep discovery was performed
    pub deep_discovery: bool,
    /// Number of cloud accounts in scope
    pub accounts_count: u32,
    /// Source platform name
    pub source_cloud: String,
    /// Target platform name
    pub target_cloud: String,
    /// Date onboarding completed, if any
    pub onboarded_date: Option<NaiveDate>,
    /// Date discovery completed, if any
    pub discovery_completed_date: Option<NaiveDate>,
    /// Cost pipeline status
    pub cost_jobs: JobStatus,
    /// Metrics pipeline status
    pub metrics_jobs: JobStatus,
    /// ML pipeline status
    pub ml_jobs: JobStatus,
    /// Recommendations pipeline status
    pub recomms_jobs: JobStatus,
    /// Free-text notes
    pub notes: String,
    /// Environment the customer was onboarded into
    pub onboarded_environment: Option<Environment>,
}

impl CustomerDraft {
    /// Create a blank draft with the form defaults
    #[inline]
    #[must_use]
    pub fn new(customer: impl Into<String>, partner: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            partner: partner.into(),
            ..Self::default()
        }
    }

    /// With onboarding status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: OnboardingStatus) -> Self {
        self.onboarding_status = status;
        self
    }

    /// With initial requester
    #[inline]
    #[must_use]
    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.initial_requester = requester.into();
        self
    }

    /// With handover recipient
    #[inline]
    #[must_use]
    pub fn with_handover(mut self, handovered_to: impl Into<String>) -> Self {
        self.handovered_to = handovered_to.into();
        self
    }

    /// With opportunity reference
    #[inline]
    #[must_use]
    pub fn with_opportunity(mut self, opportunity: impl Into<String>) -> Self {
        self.opportunity = opportunity.into();
        self
    }

    /// With deep-discovery flag
    #[inline]
    #[must_use]
    pub fn with_deep_discovery(mut self, deep_discovery: bool) -> Self {
        self.deep_discovery = deep_discovery;
        self
    }

    /// With account count
    #[inline]
    #[must_use]
    pub fn with_accounts(mut self, count: u32) -> Self {
        self.accounts_count = count;
        self
    }

    /// With source and target platforms
    #[inline]
    #[must_use]
    pub fn with_clouds(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_cloud = source.into();
        self.target_cloud = target.into();
        self
    }

    /// With onboarded date
    #[inline]
    #[must_use]
    pub fn with_onboarded_date(mut self, date: NaiveDate) -> Self {
        self.onboarded_date = Some(date);
        self
    }

    /// With discovery-completed date
    #[inline]
    #[must_use]
    pub fn with_discovery_date(mut self, date: NaiveDate) -> Self {
        self.discovery_completed_date = Some(date);
        self
    }

    /// With all four pipeline statuses
    #[inline]
    #[must_use]
    pub fn with_jobs(
        mut self,
        cost: JobStatus,
        metrics: JobStatus,
        ml: JobStatus,
        recomms: JobStatus,
    ) -> Self {
        self.cost_jobs = cost;
        self.metrics_jobs = metrics;
        self.ml_jobs = ml;
        self.recomms_jobs = recomms;
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// With onboarded environment
    #[inline]
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.onboarded_environment = Some(environment);
        self
    }
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            customer: String::new(),
            partner: String::new(),
            onboarding_status: OnboardingStatus::InProgress,
            initial_requester: String::new(),
            handovered_to: String::new(),
            opportunity: String::new(),
            deep_discovery: false,
            accounts_count: 0,
            source_cloud: "AWS".to_string(),
            target_cloud: "AWS".to_string(),
            onboarded_date: None,
            discovery_completed_date: None,
            cost_jobs: JobStatus::NotStarted,
            metrics_jobs: JobStatus::NotStarted,
            ml_jobs: JobStatus::NotStarted,
            recomms_jobs: JobStatus::NotStarted,
            notes: String::new(),
            onboarded_environment: None,
        }
    }
}
