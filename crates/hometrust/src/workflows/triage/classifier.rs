use super::domain::{KeywordTable, Tier, TriageResult};

/// Splits a homeowner's raw project list into candidate phrases. Commas and
/// newlines both delimit; blank fragments are dropped.
pub fn split_phrases(input: &str) -> Vec<&str> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

/// Assigns one tier to one phrase. Pure and total: any input, including the
/// empty string, produces a result without I/O or failure.
#[derive(Debug, Clone, Default)]
pub struct TriageClassifier {
    table: KeywordTable,
}

impl TriageClassifier {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(KeywordTable::standard())
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Classify a single phrase.
    ///
    /// Tiers are scanned in priority order and, within a tier, keywords in
    /// table order; the first keyword contained in the lowercased phrase
    /// wins. A phrase that matches nothing defaults to the aesthetic tier
    /// with no recorded keyword.
    pub fn classify(&self, phrase: &str) -> TriageResult {
        let phrase = phrase.trim();
        let haystack = phrase.to_lowercase();

        for tier in Tier::by_priority() {
            for entry in self
                .table
                .entries()
                .iter()
                .filter(|entry| entry.tier == tier)
            {
                if let Some(keyword) = entry
                    .keywords
                    .iter()
                    .find(|keyword| haystack.contains(keyword.as_str()))
                {
                    return TriageResult {
                        phrase: phrase.to_string(),
                        tier,
                        matched_keyword: Some(keyword.clone()),
                    };
                }
            }
        }

        TriageResult {
            phrase: phrase.to_string(),
            tier: Tier::Aesthetic,
            matched_keyword: None,
        }
    }

    /// Split a raw project list and classify every surviving phrase.
    pub fn classify_list(&self, input: &str) -> Vec<TriageResult> {
        split_phrases(input)
            .into_iter()
            .map(|phrase| self.classify(phrase))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::triage::domain::KeywordEntry;

    #[test]
    fn leaking_sink_is_critical() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("Leaking sink");
        assert_eq!(result.tier, Tier::Critical);
        assert_eq!(result.matched_keyword.as_deref(), Some("leak"));
        assert_eq!(result.phrase, "Leaking sink");
    }

    #[test]
    fn ac_not_cooling_is_functional() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("AC not cooling");
        assert_eq!(result.tier, Tier::Functional);
        assert_eq!(result.matched_keyword.as_deref(), Some("ac"));
    }

    #[test]
    fn cabinet_painting_is_aesthetic() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("Paint kitchen cabinets");
        assert_eq!(result.tier, Tier::Aesthetic);
        assert_eq!(result.matched_keyword.as_deref(), Some("paint"));
    }

    #[test]
    fn porch_light_is_functional_despite_replace() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("Replace porch light bulb");
        assert_eq!(result.tier, Tier::Functional);
        assert_eq!(result.matched_keyword.as_deref(), Some("light"));
    }

    #[test]
    fn unmatched_phrase_defaults_to_aesthetic() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("Squeaky door hinge");
        assert_eq!(result.tier, Tier::Aesthetic);
        assert_eq!(result.matched_keyword, None);
    }

    #[test]
    fn empty_input_defaults_without_panicking() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("");
        assert_eq!(result.tier, Tier::Aesthetic);
        assert_eq!(result.matched_keyword, None);
        assert_eq!(result.phrase, "");
    }

    #[test]
    fn classification_ignores_case_but_keeps_phrase_casing() {
        let classifier = TriageClassifier::standard();
        let shouting = classifier.classify("LEAKING SINK");
        let typed = classifier.classify("Leaking sink");
        assert_eq!(shouting.tier, typed.tier);
        assert_eq!(shouting.matched_keyword, typed.matched_keyword);
        assert_eq!(shouting.phrase, "LEAKING SINK");
    }

    #[test]
    fn higher_tier_wins_when_multiple_tiers_match() {
        let classifier = TriageClassifier::standard();
        let result = classifier.classify("Water leak ruined the cabinet paint");
        assert_eq!(result.tier, Tier::Critical);
        assert_eq!(result.matched_keyword.as_deref(), Some("leak"));
    }

    #[test]
    fn first_keyword_in_table_order_breaks_ties() {
        let table = KeywordTable::new(vec![KeywordEntry {
            tier: Tier::Functional,
            keywords: vec!["furnace".to_string(), "heat".to_string()],
        }]);
        let classifier = TriageClassifier::new(table);
        let result = classifier.classify("Furnace heat exchanger rattles");
        assert_eq!(result.matched_keyword.as_deref(), Some("furnace"));
    }

    #[test]
    fn classify_is_deterministic() {
        let classifier = TriageClassifier::standard();
        let first = classifier.classify("Gutter full of leaves");
        let second = classifier.classify("Gutter full of leaves");
        assert_eq!(first, second);
    }

    #[test]
    fn split_phrases_handles_commas_newlines_and_blanks() {
        let phrases = split_phrases("Leaking sink, Paint kitchen\n , ,Outlet dead\n");
        assert_eq!(phrases, vec!["Leaking sink", "Paint kitchen", "Outlet dead"]);
        assert!(split_phrases("").is_empty());
        assert!(split_phrases(" , ,\n").is_empty());
    }

    #[test]
    fn classify_list_orders_results_by_input_order() {
        let classifier = TriageClassifier::standard();
        let results = classifier.classify_list("Leaking sink, Paint kitchen");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].tier, Tier::Critical);
        assert_eq!(results[1].tier, Tier::Aesthetic);
    }
}
