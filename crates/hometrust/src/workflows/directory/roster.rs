use serde::Serialize;

use super::domain::TradeCategory;

const VERIFICATION_BADGES: &[&str] = &["Licensed", "Bonded", "Insured"];

/// Directory listing for a professional who cleared verification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProProfile {
    pub business_name: &'static str,
    pub trade: TradeCategory,
    pub headline_credential: &'static str,
    pub rating: f32,
    pub years_in_trade: u8,
    pub badges: &'static [&'static str],
}

impl ProProfile {
    pub fn to_view(&self) -> ProListingView {
        ProListingView {
            business_name: self.business_name,
            trade: self.trade,
            trade_label: self.trade.label(),
            headline_credential: self.headline_credential,
            rating: self.rating,
            years_in_trade: self.years_in_trade,
            badges: self.badges,
        }
    }
}

/// The published roster. Only pros that cleared verification appear here,
/// and every entry carries the full badge set.
#[derive(Debug, Clone)]
pub struct ProRoster {
    pros: Vec<ProProfile>,
}

impl ProRoster {
    pub fn standard() -> Self {
        Self {
            pros: vec![
                ProProfile {
                    business_name: "Davis Electrical Group",
                    trade: TradeCategory::Electrical,
                    headline_credential: "Master Electrician",
                    rating: 4.9,
                    years_in_trade: 22,
                    badges: VERIFICATION_BADGES,
                },
                ProProfile {
                    business_name: "Riverbend Plumbing Co.",
                    trade: TradeCategory::Plumbing,
                    headline_credential: "Master Plumber",
                    rating: 4.8,
                    years_in_trade: 17,
                    badges: VERIFICATION_BADGES,
                },
                ProProfile {
                    business_name: "Summit Roof & Gutter",
                    trade: TradeCategory::Roofing,
                    headline_credential: "Certified Roofing Contractor",
                    rating: 4.7,
                    years_in_trade: 12,
                    badges: VERIFICATION_BADGES,
                },
                ProProfile {
                    business_name: "Cedar Ridge Access Builders",
                    trade: TradeCategory::AccessibilityModification,
                    headline_credential: "CAPS Remodeler",
                    rating: 4.8,
                    years_in_trade: 9,
                    badges: VERIFICATION_BADGES,
                },
            ],
        }
    }

    pub fn pros(&self) -> &[ProProfile] {
        &self.pros
    }

    pub fn for_trade(&self, trade: TradeCategory) -> Vec<&ProProfile> {
        self.pros.iter().filter(|pro| pro.trade == trade).collect()
    }

    pub fn views(&self) -> Vec<ProListingView> {
        self.pros.iter().map(ProProfile::to_view).collect()
    }
}

impl Default for ProRoster {
    fn default() -> Self {
        Self::standard()
    }
}

/// Serializable roster entry for directory responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProListingView {
    pub business_name: &'static str,
    pub trade: TradeCategory,
    pub trade_label: &'static str,
    pub headline_credential: &'static str,
    pub rating: f32,
    pub years_in_trade: u8,
    pub badges: &'static [&'static str],
}
