mod config;
mod policy;
mod rules;

pub use config::VerificationConfig;
pub use policy::{DeclineReason, VerificationDecision};

use chrono::NaiveDate;
use policy::decide_outcome;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, CredentialKind, ProApplicationId};

/// Stateless reviewer that applies the verification rubric to a candidate.
///
/// Review is date-sensitive: license expiry and COI staleness are judged
/// against the `today` the caller supplies, so outcomes stay reproducible.
pub struct VerificationEngine {
    config: VerificationConfig,
}

impl VerificationEngine {
    pub fn new(config: VerificationConfig) -> Self {
        Self { config }
    }

    pub fn review(&self, profile: &CandidateProfile, today: NaiveDate) -> ReviewOutcome {
        let (components, total_score, signals) =
            rules::score_candidate(profile, &self.config, today);

        let decision = decide_outcome(profile, &self.config, &signals);

        ReviewOutcome {
            application_id: profile.application_id.clone(),
            decision,
            total_score,
            components,
        }
    }
}

/// Discrete contribution to a review, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComponent {
    pub credential: CredentialKind,
    pub score: i16,
    pub notes: String,
}

/// Review output describing the composite score and decision trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub application_id: ProApplicationId,
    pub decision: VerificationDecision,
    pub total_score: i16,
    pub components: Vec<ReviewComponent>,
}
