use serde::{Deserialize, Serialize};

/// Maintenance tiers ordered by urgency. Declaration order is priority order,
/// so `Ord` sorts critical work first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Critical,
    Functional,
    Aesthetic,
}

impl Tier {
    pub const fn by_priority() -> [Self; 3] {
        [Self::Critical, Self::Functional, Self::Aesthetic]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Tier 1: Protect the House",
            Self::Functional => "Tier 2: System Health",
            Self::Aesthetic => "Tier 3: Aesthetic (Optional)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Critical => "Prevents structural rot, mold, or safety hazards.",
            Self::Functional => "Essential daily comforts (HVAC, Water, Power).",
            Self::Aesthetic => "Purely visual. You have permission to ignore these.",
        }
    }

    /// Presentation token consumed by the web client's tier cards.
    pub const fn style_token(self) -> &'static str {
        match self {
            Self::Critical => "border-red-200 bg-red-50 text-red-700",
            Self::Functional => "border-blue-200 bg-blue-50 text-blue-700",
            Self::Aesthetic => "border-emerald-200 bg-emerald-50 text-emerald-700",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Functional => "functional",
            Self::Aesthetic => "aesthetic",
        }
    }
}

/// Ordered keyword list for a single tier. Order matters: the first keyword
/// contained in a phrase is the one recorded on the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub tier: Tier,
    pub keywords: Vec<String>,
}

/// The per-tier watch lists driving classification. Built once at startup and
/// shared read-only across requests.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

const CRITICAL_KEYWORDS: &[&str] = &[
    "leak",
    "roof",
    "water",
    "mold",
    "flood",
    "sewage",
    "gas",
    "spark",
    "foundation",
    "rot",
];

// "light" precedes "ac" so fixture phrases like "replace porch light" record
// the lighting keyword rather than the "ac" hidden inside "replace".
const FUNCTIONAL_KEYWORDS: &[&str] = &[
    "hvac",
    "furnace",
    "heat",
    "light",
    "outlet",
    "power",
    "faucet",
    "toilet",
    "appliance",
    "ac",
    "cool",
];

const AESTHETIC_KEYWORDS: &[&str] = &[
    "paint",
    "cabinet",
    "decor",
    "cosmetic",
    "wallpaper",
    "landscap",
    "trim",
    "shelv",
];

impl KeywordTable {
    /// The production watch lists backing the public triage tool.
    pub fn standard() -> Self {
        let owned = |keywords: &[&str]| keywords.iter().map(|kw| kw.to_string()).collect();

        Self {
            entries: vec![
                KeywordEntry {
                    tier: Tier::Critical,
                    keywords: owned(CRITICAL_KEYWORDS),
                },
                KeywordEntry {
                    tier: Tier::Functional,
                    keywords: owned(FUNCTIONAL_KEYWORDS),
                },
                KeywordEntry {
                    tier: Tier::Aesthetic,
                    keywords: owned(AESTHETIC_KEYWORDS),
                },
            ],
        }
    }

    /// Build a table from caller-supplied entries. Keywords are trimmed and
    /// lowercased; blank keywords and emptied entries are dropped.
    pub fn new(entries: Vec<KeywordEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| KeywordEntry {
                tier: entry.tier,
                keywords: entry
                    .keywords
                    .into_iter()
                    .map(|keyword| keyword.trim().to_lowercase())
                    .filter(|keyword| !keyword.is_empty())
                    .collect(),
            })
            .filter(|entry| !entry.keywords.is_empty())
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn keywords_for(&self, tier: Tier) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.tier == tier)
            .flat_map(|entry| entry.keywords.iter().map(String::as_str))
            .collect()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Outcome of classifying one phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// The trimmed phrase as the homeowner typed it.
    pub phrase: String,
    pub tier: Tier,
    /// The table keyword that fired, absent when the phrase fell through to
    /// the aesthetic default.
    pub matched_keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_order_by_priority() {
        assert!(Tier::Critical < Tier::Functional);
        assert!(Tier::Functional < Tier::Aesthetic);
        assert_eq!(
            Tier::by_priority(),
            [Tier::Critical, Tier::Functional, Tier::Aesthetic]
        );
    }

    #[test]
    fn tier_serializes_to_slug() {
        let json = serde_json::to_string(&Tier::Critical).expect("serialize tier");
        assert_eq!(json, "\"critical\"");
        assert_eq!(Tier::Critical.slug(), "critical");
    }

    #[test]
    fn standard_table_covers_every_tier() {
        let table = KeywordTable::standard();
        for tier in Tier::by_priority() {
            assert!(
                !table.keywords_for(tier).is_empty(),
                "tier {tier:?} has no keywords"
            );
        }
    }

    #[test]
    fn new_normalizes_and_drops_blank_keywords() {
        let table = KeywordTable::new(vec![
            KeywordEntry {
                tier: Tier::Critical,
                keywords: vec!["  LEAK  ".to_string(), "".to_string(), "  ".to_string()],
            },
            KeywordEntry {
                tier: Tier::Functional,
                keywords: vec!["   ".to_string()],
            },
        ]);

        assert_eq!(table.keywords_for(Tier::Critical), vec!["leak"]);
        assert!(table.keywords_for(Tier::Functional).is_empty());
        assert_eq!(table.entries().len(), 1);
    }
}
