use super::super::domain::Tier;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TierBreakdownEntry {
    pub tier: Tier,
    pub tier_label: &'static str,
    pub description: &'static str,
    pub style_token: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriageResultView {
    pub phrase: String,
    pub tier: Tier,
    pub tier_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
    /// Aesthetic items carry the "Permission to Ignore" badge.
    pub ignorable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriageSummaryView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline_tier_label: Option<&'static str>,
    pub tier_breakdown: Vec<TierBreakdownEntry>,
    pub results: Vec<TriageResultView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionLevel {
    Urgent,
    Steady,
    Clear,
}

impl AttentionLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Act Now",
            Self::Steady => "Plan Ahead",
            Self::Clear => "All Clear",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriageInsights {
    pub attention_level: AttentionLevel,
    pub attention_label: &'static str,
    pub critical_count: usize,
    pub functional_count: usize,
    pub aesthetic_count: usize,
    pub unmatched_count: usize,
    /// Share of the list the homeowner has permission to ignore.
    pub ignorable_pct: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

/// Static explainer card for one tier, mirroring the marketing site's tier
/// panel.
#[derive(Debug, Clone, Serialize)]
pub struct TierCardView {
    pub tier: Tier,
    pub slug: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub style_token: &'static str,
}

pub fn tier_cards() -> Vec<TierCardView> {
    Tier::by_priority()
        .into_iter()
        .map(|tier| TierCardView {
            tier,
            slug: tier.slug(),
            label: tier.label(),
            description: tier.description(),
            style_token: tier.style_token(),
        })
        .collect()
}
