use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use super::compliance::{IntakeGuard, IntakeViolation};
use super::domain::{ProApplicationId, ProListingStatus, VerificationSubmission};
use super::repository::{
    AlertError, AlertPublisher, DirectoryAlert, ProApplicationRecord, ProApplicationRepository,
    RepositoryError,
};
use super::verification::{
    ReviewOutcome, VerificationConfig, VerificationDecision, VerificationEngine,
};

/// Service composing the intake guard, repository, and verification rubric.
pub struct ProVerificationService<R, A> {
    guard: Arc<IntakeGuard>,
    repository: Arc<R>,
    alerts: Arc<A>,
    engine: Arc<VerificationEngine>,
}

static PRO_APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ProApplicationId {
    let id = PRO_APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProApplicationId(format!("pro-{id:06}"))
}

impl<R, A> ProVerificationService<R, A>
where
    R: ProApplicationRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, config: VerificationConfig) -> Self {
        Self {
            guard: Arc::new(IntakeGuard::new()),
            repository,
            alerts,
            engine: Arc::new(VerificationEngine::new(config)),
        }
    }

    /// Submit a new application, returning the repository-backed record.
    pub fn submit(
        &self,
        submission: VerificationSubmission,
    ) -> Result<ProApplicationRecord, ProServiceError> {
        let mut profile = self.guard.profile_from_submission(submission)?;
        let application_id = next_application_id();
        profile.application_id = application_id.clone();

        let record = ProApplicationRecord {
            profile,
            status: ProListingStatus::Submitted,
            review: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Review a pending application as of `today` and persist the outcome.
    pub fn evaluate(
        &self,
        application_id: &ProApplicationId,
        today: NaiveDate,
    ) -> Result<ReviewOutcome, ProServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let outcome = self.engine.review(&record.profile, today);
        let business_name = record.profile.business_name.clone();
        let trade_label = record.profile.trade.label();

        record.status = match outcome.decision {
            VerificationDecision::Verified => ProListingStatus::Listed,
            VerificationDecision::Declined(_) => ProListingStatus::Declined,
            _ => ProListingStatus::UnderReview,
        };
        record.review = Some(outcome.clone());

        self.repository.update(record)?;

        if matches!(outcome.decision, VerificationDecision::Verified) {
            let mut details = BTreeMap::new();
            details.insert("business".to_string(), business_name);
            details.insert("trade".to_string(), trade_label.to_string());
            self.alerts.publish(DirectoryAlert {
                template: "pro_listed".to_string(),
                application_id: outcome.application_id.clone(),
                details,
            })?;
        }

        Ok(outcome)
    }

    /// Fetch an application and current status for API responses.
    pub fn get(
        &self,
        application_id: &ProApplicationId,
    ) -> Result<ProApplicationRecord, ProServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the pro verification service.
#[derive(Debug, thiserror::Error)]
pub enum ProServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
