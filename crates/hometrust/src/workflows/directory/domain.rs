use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted pro verification applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProApplicationId(pub String);

/// Trades the directory lists pros under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeCategory {
    Electrical,
    Plumbing,
    Hvac,
    Roofing,
    GeneralRepair,
    AccessibilityModification,
    EnergyRetrofit,
}

impl TradeCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electrical => "Electrical",
            Self::Plumbing => "Plumbing",
            Self::Hvac => "HVAC",
            Self::Roofing => "Roofing",
            Self::GeneralRepair => "General Repair",
            Self::AccessibilityModification => "Aging-in-Place Modifications",
            Self::EnergyRetrofit => "Energy Retrofit",
        }
    }

    /// Trades where operating without a state license is disqualifying.
    pub const fn requires_license(self) -> bool {
        match self {
            Self::Electrical | Self::Plumbing | Self::Hvac | Self::Roofing => true,
            Self::GeneralRepair | Self::AccessibilityModification | Self::EnergyRetrofit => false,
        }
    }
}

/// Credential dossier a professional submits to join the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSubmission {
    pub business_name: String,
    pub trade: TradeCategory,
    pub years_in_trade: u8,
    pub license: Option<LicenseRecord>,
    pub insurance: Option<InsuranceCertificate>,
    pub bond: Option<SuretyBond>,
    pub references: Vec<ClientReference>,
}

/// State trade license details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub number: String,
    pub issuing_state: String,
    pub expires_on: NaiveDate,
}

/// Certificate of insurance snapshot. COIs are re-verified on a fixed cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceCertificate {
    pub carrier: String,
    pub issued_on: NaiveDate,
    pub liability_limit: u32,
}

/// Financial guarantee backing project completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuretyBond {
    pub provider: String,
    pub amount: u32,
}

/// Completed-project reference supplied by a past client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReference {
    pub project: String,
    pub completed_on: NaiveDate,
    pub would_rehire: bool,
}

/// Credentials permitted in the review rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CredentialKind {
    License,
    Insurance,
    Bond,
    References,
    Tenure,
}

/// Value representation for a credential so scoring can consume structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CredentialValue {
    Decimal(f32),
    Boolean(bool),
    Count(u32),
    Text(String),
}

/// The sanitized candidate model after intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub application_id: ProApplicationId,
    pub business_name: String,
    pub trade: TradeCategory,
    pub years_in_trade: u8,
    pub credentials: BTreeMap<CredentialKind, CredentialValue>,
    pub license: Option<LicenseRecord>,
    pub insurance: Option<InsuranceCertificate>,
    pub bond: Option<SuretyBond>,
    pub references: Vec<ClientReference>,
}

/// High level status tracked throughout the verification workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProListingStatus {
    Submitted,
    UnderReview,
    Listed,
    Declined,
}

impl ProListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProListingStatus::Submitted => "submitted",
            ProListingStatus::UnderReview => "under_review",
            ProListingStatus::Listed => "listed",
            ProListingStatus::Declined => "declined",
        }
    }
}
