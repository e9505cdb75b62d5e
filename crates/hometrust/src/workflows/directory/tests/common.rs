use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::directory::compliance::IntakeGuard;
use crate::workflows::directory::domain::{
    CandidateProfile, ClientReference, InsuranceCertificate, LicenseRecord, ProApplicationId,
    SuretyBond, TradeCategory, VerificationSubmission,
};
use crate::workflows::directory::repository::{
    AlertError, AlertPublisher, DirectoryAlert, ProApplicationRecord, ProApplicationRepository,
    RepositoryError,
};
use crate::workflows::directory::verification::VerificationEngine;
use crate::workflows::directory::{directory_router, ProVerificationService, VerificationConfig};

/// Fixed review date so license and COI checks stay reproducible.
pub(super) fn review_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

pub(super) fn verification_config() -> VerificationConfig {
    VerificationConfig {
        coi_max_age_days: 183,
        min_liability_limit: 1_000_000,
        min_rehire_rate: 0.75,
        master_tenure_years: 20,
    }
}

pub(super) fn submission() -> VerificationSubmission {
    VerificationSubmission {
        business_name: "Davis Electrical Group".to_string(),
        trade: TradeCategory::Electrical,
        years_in_trade: 22,
        license: Some(LicenseRecord {
            number: "IA-EL-20443".to_string(),
            issuing_state: "IA".to_string(),
            expires_on: NaiveDate::from_ymd_opt(2027, 6, 30).expect("valid date"),
        }),
        insurance: Some(InsuranceCertificate {
            carrier: "Hartwell Mutual".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
            liability_limit: 2_000_000,
        }),
        bond: Some(SuretyBond {
            provider: "Cornerstone Surety".to_string(),
            amount: 50_000,
        }),
        references: vec![
            ClientReference {
                project: "Panel upgrade to 200A".to_string(),
                completed_on: NaiveDate::from_ymd_opt(2025, 11, 8).expect("valid date"),
                would_rehire: true,
            },
            ClientReference {
                project: "Whole-home rewire".to_string(),
                completed_on: NaiveDate::from_ymd_opt(2025, 7, 21).expect("valid date"),
                would_rehire: true,
            },
        ],
    }
}

pub(super) fn unlicensed_submission() -> VerificationSubmission {
    let mut submission = submission();
    submission.license = None;
    submission
}

pub(super) fn expired_license_submission() -> VerificationSubmission {
    let mut submission = submission();
    if let Some(license) = submission.license.as_mut() {
        license.expires_on = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");
    }
    submission
}

pub(super) fn stale_coi_submission() -> VerificationSubmission {
    let mut submission = submission();
    if let Some(insurance) = submission.insurance.as_mut() {
        insurance.issued_on = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    }
    submission
}

pub(super) fn empty_submission() -> VerificationSubmission {
    VerificationSubmission {
        business_name: "Weekend Wrenchers".to_string(),
        trade: TradeCategory::GeneralRepair,
        years_in_trade: 1,
        license: None,
        insurance: None,
        bond: None,
        references: Vec::new(),
    }
}

pub(super) fn candidate_profile(suffix: &str) -> CandidateProfile {
    let mut profile = guard()
        .profile_from_submission(submission())
        .expect("fixture submission passes intake");
    profile.application_id = ProApplicationId(format!("pro-{suffix}"));
    profile
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn verification_engine() -> VerificationEngine {
    VerificationEngine::new(verification_config())
}

pub(super) fn build_service() -> (
    ProVerificationService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service =
        ProVerificationService::new(repository.clone(), alerts.clone(), verification_config());
    (service, repository, alerts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProApplicationId, ProApplicationRecord>>>,
}

impl ProApplicationRepository for MemoryRepository {
    fn insert(&self, record: ProApplicationRecord) -> Result<ProApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.application_id.clone(), record);
        Ok(())
    }

    fn fetch(
        &self,
        id: &ProApplicationId,
    ) -> Result<Option<ProApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ProApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<DirectoryAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<DirectoryAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: DirectoryAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl ProApplicationRepository for ConflictRepository {
    fn insert(
        &self,
        _record: ProApplicationRecord,
    ) -> Result<ProApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ProApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(
        &self,
        _id: &ProApplicationId,
    ) -> Result<Option<ProApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ProApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ProApplicationRepository for UnavailableRepository {
    fn insert(
        &self,
        _record: ProApplicationRecord,
    ) -> Result<ProApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &ProApplicationId,
    ) -> Result<Option<ProApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ProApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn directory_router_with_service(
    service: ProVerificationService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    directory_router(Arc::new(service))
}
