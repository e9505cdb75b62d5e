use super::common::*;
use crate::workflows::directory::compliance::IntakeViolation;
use crate::workflows::directory::domain::{ClientReference, CredentialKind, CredentialValue};
use chrono::NaiveDate;

#[test]
fn guard_rejects_blank_business_names() {
    let guard = guard();
    let mut submission = submission();
    submission.business_name = "   ".to_string();

    match guard.profile_from_submission(submission) {
        Err(IntakeViolation::MissingBusinessName) => {}
        other => panic!("expected missing business name violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_dossiers_with_nothing_to_verify() {
    let guard = guard();

    match guard.profile_from_submission(empty_submission()) {
        Err(IntakeViolation::NoVerifiableCredential) => {}
        other => panic!("expected no verifiable credential violation, got {other:?}"),
    }
}

#[test]
fn guard_rejects_zero_liability_limits() {
    let guard = guard();
    let mut submission = submission();
    if let Some(insurance) = submission.insurance.as_mut() {
        insurance.liability_limit = 0;
    }

    match guard.profile_from_submission(submission) {
        Err(IntakeViolation::ZeroLiabilityLimit) => {}
        other => panic!("expected zero liability violation, got {other:?}"),
    }
}

#[test]
fn guard_records_credentials_for_scoring() {
    let guard = guard();
    let mut submission = submission();
    submission.business_name = "  Davis Electrical Group  ".to_string();

    let profile = guard
        .profile_from_submission(submission)
        .expect("fixture submission passes intake");

    assert_eq!(profile.business_name, "Davis Electrical Group");
    assert_eq!(
        profile.credentials.get(&CredentialKind::License),
        Some(&CredentialValue::Boolean(true))
    );
    assert_eq!(
        profile.credentials.get(&CredentialKind::Insurance),
        Some(&CredentialValue::Count(2_000_000))
    );
    assert_eq!(
        profile.credentials.get(&CredentialKind::Tenure),
        Some(&CredentialValue::Count(22))
    );
    assert_eq!(
        profile.credentials.get(&CredentialKind::References),
        Some(&CredentialValue::Decimal(1.0))
    );
}

#[test]
fn guard_drops_references_without_projects() {
    let guard = guard();
    let mut submission = submission();
    submission.references.push(ClientReference {
        project: "   ".to_string(),
        completed_on: NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),
        would_rehire: false,
    });

    let profile = guard
        .profile_from_submission(submission)
        .expect("fixture submission passes intake");

    assert_eq!(profile.references.len(), 2);
    assert_eq!(
        profile.credentials.get(&CredentialKind::References),
        Some(&CredentialValue::Decimal(1.0))
    );
}
