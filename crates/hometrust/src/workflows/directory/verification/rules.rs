use chrono::NaiveDate;

use super::super::domain::{CandidateProfile, CredentialKind, CredentialValue};
use super::config::VerificationConfig;
use super::ReviewComponent;

pub(crate) struct ReviewSignals {
    pub missing_required_license: bool,
    pub expired_license: Option<NaiveDate>,
    pub uninsured: bool,
    pub coverage_shortfall: Option<u32>,
    pub stale_coi_age_days: Option<i64>,
    pub rehire_rate: Option<f32>,
    pub bonded: bool,
}

pub(crate) fn score_candidate(
    profile: &CandidateProfile,
    config: &VerificationConfig,
    today: NaiveDate,
) -> (Vec<ReviewComponent>, i16, ReviewSignals) {
    let mut components = Vec::new();
    let mut total_score: i16 = 0;

    let mut missing_required_license = false;
    let mut expired_license = None;
    match &profile.license {
        Some(license) if license.expires_on < today => {
            if profile.trade.requires_license() {
                expired_license = Some(license.expires_on);
                components.push(ReviewComponent {
                    credential: CredentialKind::License,
                    score: -40,
                    notes: format!(
                        "license {} expired on {}",
                        license.number, license.expires_on
                    ),
                });
                total_score -= 40;
            } else {
                components.push(ReviewComponent {
                    credential: CredentialKind::License,
                    score: -5,
                    notes: format!("voluntary license lapsed on {}", license.expires_on),
                });
                total_score -= 5;
            }
        }
        Some(license) => {
            let score = if profile.trade.requires_license() { 30 } else { 15 };
            components.push(ReviewComponent {
                credential: CredentialKind::License,
                score,
                notes: format!(
                    "license {} current through {}",
                    license.number, license.expires_on
                ),
            });
            total_score += score;
        }
        None if profile.trade.requires_license() => {
            missing_required_license = true;
            components.push(ReviewComponent {
                credential: CredentialKind::License,
                score: -40,
                notes: format!("no license on file for {}", profile.trade.label()),
            });
            total_score -= 40;
        }
        None => {}
    }

    let mut uninsured = false;
    let mut coverage_shortfall = None;
    let mut stale_coi_age_days = None;
    match &profile.insurance {
        Some(certificate) => {
            let age_days = (today - certificate.issued_on).num_days();
            if certificate.liability_limit < config.min_liability_limit {
                coverage_shortfall = Some(certificate.liability_limit);
                components.push(ReviewComponent {
                    credential: CredentialKind::Insurance,
                    score: -30,
                    notes: format!(
                        "declared liability ${} below required ${}",
                        certificate.liability_limit, config.min_liability_limit
                    ),
                });
                total_score -= 30;
            } else if age_days > config.coi_max_age_days {
                stale_coi_age_days = Some(age_days);
                components.push(ReviewComponent {
                    credential: CredentialKind::Insurance,
                    score: -10,
                    notes: format!(
                        "certificate of insurance is {age_days} days old; re-verification window is {} days",
                        config.coi_max_age_days
                    ),
                });
                total_score -= 10;
            } else {
                components.push(ReviewComponent {
                    credential: CredentialKind::Insurance,
                    score: 25,
                    notes: format!(
                        "COI from {} within the {}-day window",
                        certificate.carrier, config.coi_max_age_days
                    ),
                });
                total_score += 25;
            }
        }
        None => {
            uninsured = true;
            components.push(ReviewComponent {
                credential: CredentialKind::Insurance,
                score: -35,
                notes: "no certificate of insurance on file".to_string(),
            });
            total_score -= 35;
        }
    }

    let bonded = profile.bond.is_some();
    match &profile.bond {
        Some(bond) => {
            components.push(ReviewComponent {
                credential: CredentialKind::Bond,
                score: 10,
                notes: format!("surety bond of ${} from {}", bond.amount, bond.provider),
            });
            total_score += 10;
        }
        None => {
            components.push(ReviewComponent {
                credential: CredentialKind::Bond,
                score: -5,
                notes: "no surety bond backing project completion".to_string(),
            });
            total_score -= 5;
        }
    }

    let mut rehire_rate = None;
    if profile.references.is_empty() {
        components.push(ReviewComponent {
            credential: CredentialKind::References,
            score: -10,
            notes: "no completed client references submitted".to_string(),
        });
        total_score -= 10;
    } else {
        let rate = profile
            .credentials
            .get(&CredentialKind::References)
            .and_then(|value| match value {
                CredentialValue::Decimal(rate) => Some(*rate),
                _ => None,
            })
            .unwrap_or_else(|| {
                profile
                    .references
                    .iter()
                    .filter(|reference| reference.would_rehire)
                    .count() as f32
                    / profile.references.len() as f32
            });
        rehire_rate = Some(rate);
        if rate >= config.min_rehire_rate {
            components.push(ReviewComponent {
                credential: CredentialKind::References,
                score: 20,
                notes: format!(
                    "{:.0}% of {} client reference(s) would rehire",
                    rate * 100.0,
                    profile.references.len()
                ),
            });
            total_score += 20;
        } else {
            components.push(ReviewComponent {
                credential: CredentialKind::References,
                score: -20,
                notes: format!(
                    "rehire rate {:.0}% below required {:.0}%",
                    rate * 100.0,
                    config.min_rehire_rate * 100.0
                ),
            });
            total_score -= 20;
        }
    }

    let tenure_years = profile
        .credentials
        .get(&CredentialKind::Tenure)
        .and_then(|value| match value {
            CredentialValue::Count(years) => Some(*years as u8),
            _ => None,
        })
        .unwrap_or(profile.years_in_trade);

    if tenure_years >= config.master_tenure_years {
        components.push(ReviewComponent {
            credential: CredentialKind::Tenure,
            score: 15,
            notes: format!("{tenure_years} years in trade earns master-level standing"),
        });
        total_score += 15;
    } else if tenure_years >= 5 {
        components.push(ReviewComponent {
            credential: CredentialKind::Tenure,
            score: 5,
            notes: format!("{tenure_years} years in trade"),
        });
        total_score += 5;
    }

    let signals = ReviewSignals {
        missing_required_license,
        expired_license,
        uninsured,
        coverage_shortfall,
        stale_coi_age_days,
        rehire_rate,
        bonded,
    };

    (components, total_score, signals)
}
