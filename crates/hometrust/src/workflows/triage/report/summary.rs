use super::super::domain::{Tier, TriageResult};
use super::views::{TierBreakdownEntry, TriageInsights, TriageResultView, TriageSummaryView};

/// Aggregates the classification results for one submitted project list.
#[derive(Debug, Default, Clone)]
pub struct TriageReport {
    results: Vec<TriageResult>,
}

impl TriageReport {
    pub fn new(results: Vec<TriageResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[TriageResult] {
        &self.results
    }

    pub fn count_for(&self, tier: Tier) -> usize {
        self.results
            .iter()
            .filter(|result| result.tier == tier)
            .count()
    }

    /// The most urgent tier present across all phrases. `None` only when the
    /// report holds no phrases at all.
    pub fn headline_tier(&self) -> Option<Tier> {
        self.results.iter().map(|result| result.tier).min()
    }

    pub fn summary(&self) -> TriageSummaryView {
        let tier_breakdown = Tier::by_priority()
            .into_iter()
            .filter_map(|tier| {
                let count = self.count_for(tier);
                (count > 0).then_some(TierBreakdownEntry {
                    tier,
                    tier_label: tier.label(),
                    description: tier.description(),
                    style_token: tier.style_token(),
                    count,
                })
            })
            .collect();

        let results = self.results.iter().map(TriageResult::to_view).collect();

        let headline_tier = self.headline_tier();

        TriageSummaryView {
            headline_tier,
            headline_tier_label: headline_tier.map(Tier::label),
            tier_breakdown,
            results,
        }
    }
}

impl TriageSummaryView {
    pub fn insights(&self) -> TriageInsights {
        super::generate_insights(self)
    }
}

impl TriageResult {
    pub fn to_view(&self) -> TriageResultView {
        TriageResultView {
            phrase: self.phrase.clone(),
            tier: self.tier,
            tier_label: self.tier.label(),
            matched_keyword: self.matched_keyword.clone(),
            ignorable: self.tier == Tier::Aesthetic,
        }
    }
}
