use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::{CandidateProfile, TradeCategory};
use super::config::VerificationConfig;
use super::rules::ReviewSignals;

/// Listing outcome for a reviewed candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VerificationDecision {
    Verified,
    ConditionalListing { required_actions: Vec<String> },
    Declined(DeclineReason),
    ManualReview { reasons: Vec<String> },
}

impl VerificationDecision {
    pub fn summary(&self) -> String {
        match self {
            VerificationDecision::Verified => "pro verified for listing".to_string(),
            VerificationDecision::ConditionalListing { required_actions } => {
                if required_actions.is_empty() {
                    "conditional listing".to_string()
                } else {
                    format!("conditional listing: {}", required_actions.join(", "))
                }
            }
            VerificationDecision::Declined(reason) => reason.summary(),
            VerificationDecision::ManualReview { reasons } => {
                if reasons.is_empty() {
                    "requires manual review".to_string()
                } else {
                    format!("manual review required: {}", reasons.join("; "))
                }
            }
        }
    }
}

/// Enumerates decline reasons so candidates get a concrete remediation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclineReason {
    MissingLicense {
        trade: TradeCategory,
    },
    ExpiredLicense {
        expired_on: NaiveDate,
    },
    UninsuredOperation,
    InsufficientCoverage {
        required: u32,
        declared: u32,
    },
}

impl DeclineReason {
    pub fn summary(&self) -> String {
        match self {
            DeclineReason::MissingLicense { trade } => {
                format!("declined: no {} license on file", trade.label())
            }
            DeclineReason::ExpiredLicense { expired_on } => {
                format!("declined: license expired on {expired_on}")
            }
            DeclineReason::UninsuredOperation => {
                "declined: no certificate of insurance on file".to_string()
            }
            DeclineReason::InsufficientCoverage { required, declared } => {
                format!("declined: liability coverage ${declared} below required ${required}")
            }
        }
    }
}

pub(crate) fn decide_outcome(
    profile: &CandidateProfile,
    config: &VerificationConfig,
    signals: &ReviewSignals,
) -> VerificationDecision {
    if signals.missing_required_license {
        return VerificationDecision::Declined(DeclineReason::MissingLicense {
            trade: profile.trade,
        });
    }

    if let Some(expired_on) = signals.expired_license {
        return VerificationDecision::Declined(DeclineReason::ExpiredLicense { expired_on });
    }

    if signals.uninsured {
        return VerificationDecision::Declined(DeclineReason::UninsuredOperation);
    }

    if let Some(declared) = signals.coverage_shortfall {
        return VerificationDecision::Declined(DeclineReason::InsufficientCoverage {
            required: config.min_liability_limit,
            declared,
        });
    }

    if signals.stale_coi_age_days.is_some() {
        return VerificationDecision::ConditionalListing {
            required_actions: vec![format!(
                "Submit a certificate of insurance issued within the last {} days",
                config.coi_max_age_days
            )],
        };
    }

    if let Some(rate) = signals.rehire_rate {
        if rate < config.min_rehire_rate {
            return VerificationDecision::ManualReview {
                reasons: vec![format!(
                    "rehire rate {:.0}% below the {:.0}% floor",
                    rate * 100.0,
                    config.min_rehire_rate * 100.0
                )],
            };
        }
    }

    if !signals.bonded && profile.references.is_empty() {
        return VerificationDecision::ManualReview {
            reasons: vec!["no bond or client history to back the work".to_string()],
        };
    }

    VerificationDecision::Verified
}
