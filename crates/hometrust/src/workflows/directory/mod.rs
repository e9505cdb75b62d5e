//! Credential intake and rubric review behind the verified-only pro directory.

pub(crate) mod compliance;
pub mod domain;
pub mod repository;
pub mod roster;
pub mod router;
pub mod service;
pub(crate) mod verification;

#[cfg(test)]
mod tests;

pub use domain::{
    CandidateProfile, ClientReference, CredentialKind, CredentialValue, InsuranceCertificate,
    LicenseRecord, ProApplicationId, ProListingStatus, SuretyBond, TradeCategory,
    VerificationSubmission,
};
pub use repository::{
    AlertError, AlertPublisher, DirectoryAlert, ProApplicationRecord, ProApplicationRepository,
    ProApplicationStatusView, RepositoryError,
};
pub use roster::{ProListingView, ProProfile, ProRoster};
pub use router::directory_router;
pub use service::{ProServiceError, ProVerificationService};
pub use verification::{DeclineReason, ReviewOutcome, VerificationConfig, VerificationDecision};
