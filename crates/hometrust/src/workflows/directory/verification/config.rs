use serde::{Deserialize, Serialize};

/// Dials that shape how candidate dossiers are reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Certificates of insurance older than this are treated as stale.
    pub coi_max_age_days: i64,
    /// Minimum general liability coverage a listed pro must carry, in dollars.
    pub min_liability_limit: u32,
    /// Share of references that must report they would rehire, 0.0 through 1.0.
    pub min_rehire_rate: f32,
    /// Years in trade at which a pro earns the master-level tenure credit.
    pub master_tenure_years: u8,
}
