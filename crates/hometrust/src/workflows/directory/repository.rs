use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, ProApplicationId, ProListingStatus};
use super::verification::ReviewOutcome;

/// Repository record containing the profile, review, and status metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProApplicationRecord {
    pub profile: CandidateProfile,
    pub status: ProListingStatus,
    pub review: Option<ReviewOutcome>,
}

impl ProApplicationRecord {
    pub fn decision_rationale(&self) -> String {
        match &self.review {
            Some(outcome) => outcome.decision.summary(),
            None => "pending review".to_string(),
        }
    }

    pub fn status_view(&self) -> ProApplicationStatusView {
        ProApplicationStatusView {
            application_id: self.profile.application_id.clone(),
            business_name: self.profile.business_name.clone(),
            status: self.status.label(),
            decision_rationale: self.decision_rationale(),
            total_score: self.review.as_ref().map(|outcome| outcome.total_score),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProApplicationRepository: Send + Sync {
    fn insert(&self, record: ProApplicationRecord) -> Result<ProApplicationRecord, RepositoryError>;
    fn update(&self, record: ProApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProApplicationId) -> Result<Option<ProApplicationRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<ProApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound alert hooks (e.g., concierge or e-mail adapters).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: DirectoryAlert) -> Result<(), AlertError>;
}

/// Simple alert payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAlert {
    pub template: String,
    pub application_id: ProApplicationId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ProApplicationStatusView {
    pub application_id: ProApplicationId,
    pub business_name: String,
    pub status: &'static str,
    pub decision_rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<i16>,
}
