use super::super::domain::Tier;
use super::views::{AttentionLevel, TriageInsights, TriageSummaryView};

pub(crate) fn generate_insights(summary: &TriageSummaryView) -> TriageInsights {
    let total = summary.results.len();
    let count_for = |tier: Tier| {
        summary
            .results
            .iter()
            .filter(|result| result.tier == tier)
            .count()
    };

    let critical_count = count_for(Tier::Critical);
    let functional_count = count_for(Tier::Functional);
    let aesthetic_count = count_for(Tier::Aesthetic);
    let unmatched_count = summary
        .results
        .iter()
        .filter(|result| result.matched_keyword.is_none())
        .count();

    let ignorable_pct = if total > 0 {
        aesthetic_count as f32 / total as f32
    } else {
        0.0
    };

    let attention_level = if critical_count > 0 {
        AttentionLevel::Urgent
    } else if functional_count > 0 {
        AttentionLevel::Steady
    } else {
        AttentionLevel::Clear
    };

    let focus_phrase = summary.headline_tier.and_then(|headline| {
        summary
            .results
            .iter()
            .find(|result| result.tier == headline)
            .map(|result| result.phrase.clone())
    });

    let mut observations = Vec::new();
    if critical_count > 0 {
        observations.push(format!(
            "{} item{} can turn into structural rot, mold, or a safety hazard if deferred",
            critical_count,
            if critical_count == 1 { "" } else { "s" }
        ));
    }

    if functional_count > 0 {
        observations.push(format!(
            "{} system repair{} affecting daily comfort (HVAC, water, power)",
            functional_count,
            if functional_count == 1 { "" } else { "s" }
        ));
    }

    if aesthetic_count > 0 {
        observations.push(format!(
            "You have permission to ignore {} purely visual item{}",
            aesthetic_count,
            if aesthetic_count == 1 { "" } else { "s" }
        ));
    }

    if unmatched_count > 0 {
        observations.push(format!(
            "{} phrase{} matched no watch list and defaulted to the aesthetic tier",
            unmatched_count,
            if unmatched_count == 1 { "" } else { "s" }
        ));
    }

    if observations.is_empty() {
        observations.push("Nothing on the list needs attention right now".to_string());
    }

    let mut recommended_actions = Vec::new();
    match attention_level {
        AttentionLevel::Urgent => {
            if let Some(phrase) = &focus_phrase {
                recommended_actions.push(format!(
                    "Dispatch a verified pro for \"{phrase}\" this week"
                ));
            }
            recommended_actions.push(
                "Book a free 10-minute expert sync before attempting any DIY fix".to_string(),
            );
        }
        AttentionLevel::Steady => {
            recommended_actions.push(
                "Schedule system repairs before they escalate into structural damage".to_string(),
            );
        }
        AttentionLevel::Clear => {
            if aesthetic_count > 0 {
                recommended_actions.push(
                    "Batch the visual projects into a single handyperson visit".to_string(),
                );
            }
        }
    }

    TriageInsights {
        attention_level,
        attention_label: attention_level.label(),
        critical_count,
        functional_count,
        aesthetic_count,
        unmatched_count,
        ignorable_pct,
        focus_phrase,
        observations,
        recommended_actions,
    }
}
