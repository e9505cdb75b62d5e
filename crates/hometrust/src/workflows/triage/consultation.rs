use serde::Serialize;

use super::classifier::TriageClassifier;
use super::domain::Tier;

/// Errors raised while assembling an expert-call briefing.
#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("no project phrases were provided for the consultation")]
    EmptyProjectList,
}

/// Briefing metadata handed to the expert ahead of a booked call.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationContext {
    pub headline_tier: Tier,
    pub headline_tier_label: &'static str,
    pub task_count: usize,
    pub critical_count: usize,
    pub functional_count: usize,
    pub aesthetic_count: usize,
    /// The phrase the call should open with: the first item carrying the
    /// headline tier.
    pub opening_focus: String,
}

impl ConsultationContext {
    pub fn summary(&self) -> String {
        format!(
            "expert sync covering {} task{}, leading with \"{}\" ({})",
            self.task_count,
            if self.task_count == 1 { "" } else { "s" },
            self.opening_focus,
            self.headline_tier_label
        )
    }
}

/// Classify a raw project list and distill it into call-prep context. A list
/// with no usable phrases cannot seed a consultation.
pub fn build_context(
    classifier: &TriageClassifier,
    projects: &str,
) -> Result<ConsultationContext, ConsultationError> {
    let results = classifier.classify_list(projects);

    let headline_tier = results
        .iter()
        .map(|result| result.tier)
        .min()
        .ok_or(ConsultationError::EmptyProjectList)?;

    let count_for = |tier: Tier| {
        results
            .iter()
            .filter(|result| result.tier == tier)
            .count()
    };

    let opening_focus = results
        .iter()
        .find(|result| result.tier == headline_tier)
        .map(|result| result.phrase.clone())
        .unwrap_or_default();

    Ok(ConsultationContext {
        headline_tier,
        headline_tier_label: headline_tier.label(),
        task_count: results.len(),
        critical_count: count_for(Tier::Critical),
        functional_count: count_for(Tier::Functional),
        aesthetic_count: count_for(Tier::Aesthetic),
        opening_focus,
    })
}
