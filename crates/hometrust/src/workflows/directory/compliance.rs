use std::collections::BTreeMap;

use thiserror::Error;

use super::domain::{
    CandidateProfile, ClientReference, CredentialKind, CredentialValue, ProApplicationId,
    VerificationSubmission,
};

/// Structural problems that make a submission unusable before any review runs.
#[derive(Debug, Error, PartialEq)]
pub enum IntakeViolation {
    #[error("business name is required for a directory listing")]
    MissingBusinessName,
    #[error("license number cannot be blank")]
    BlankLicenseNumber,
    #[error("declared liability limit must be greater than zero")]
    ZeroLiabilityLimit,
    #[error("surety bond amount must be greater than zero")]
    ZeroBondAmount,
    #[error("submission carries nothing to verify: provide a license, insurance, bond, or client reference")]
    NoVerifiableCredential,
}

/// Validates raw submissions and shapes them into candidate profiles.
///
/// Intake rejects only malformed dossiers. Judgements that depend on the
/// review date or on policy floors belong to the verification engine.
#[derive(Debug, Default, Clone)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Convert an inbound submission into a sanitized candidate profile.
    pub fn profile_from_submission(
        &self,
        submission: VerificationSubmission,
    ) -> Result<CandidateProfile, IntakeViolation> {
        let business_name = submission.business_name.trim().to_string();
        if business_name.is_empty() {
            return Err(IntakeViolation::MissingBusinessName);
        }

        if let Some(license) = &submission.license {
            if license.number.trim().is_empty() {
                return Err(IntakeViolation::BlankLicenseNumber);
            }
        }

        if let Some(insurance) = &submission.insurance {
            if insurance.liability_limit == 0 {
                return Err(IntakeViolation::ZeroLiabilityLimit);
            }
        }

        if let Some(bond) = &submission.bond {
            if bond.amount == 0 {
                return Err(IntakeViolation::ZeroBondAmount);
            }
        }

        // References with no project description cannot be followed up on.
        let references: Vec<ClientReference> = submission
            .references
            .into_iter()
            .filter(|reference| !reference.project.trim().is_empty())
            .collect();

        if submission.license.is_none()
            && submission.insurance.is_none()
            && submission.bond.is_none()
            && references.is_empty()
        {
            return Err(IntakeViolation::NoVerifiableCredential);
        }

        let mut credentials = BTreeMap::new();

        credentials.insert(
            CredentialKind::Tenure,
            CredentialValue::Count(u32::from(submission.years_in_trade)),
        );

        if submission.license.is_some() {
            credentials.insert(CredentialKind::License, CredentialValue::Boolean(true));
        }

        if let Some(insurance) = &submission.insurance {
            credentials.insert(
                CredentialKind::Insurance,
                CredentialValue::Count(insurance.liability_limit),
            );
        }

        if let Some(bond) = &submission.bond {
            credentials.insert(CredentialKind::Bond, CredentialValue::Count(bond.amount));
        }

        if !references.is_empty() {
            let rehires = references
                .iter()
                .filter(|reference| reference.would_rehire)
                .count();
            credentials.insert(
                CredentialKind::References,
                CredentialValue::Decimal(rehires as f32 / references.len() as f32),
            );
        }

        Ok(CandidateProfile {
            application_id: ProApplicationId("pending".to_string()),
            business_name,
            trade: submission.trade,
            years_in_trade: submission.years_in_trade,
            credentials,
            license: submission.license,
            insurance: submission.insurance,
            bond: submission.bond,
            references,
        })
    }
}
