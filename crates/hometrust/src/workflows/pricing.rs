use serde::Serialize;

/// One row of the "No-Surprise Pricing" grid. `match_terms` tie free-form
/// project phrases back to the offer.
#[derive(Debug, Clone)]
pub struct FlatRateOffer {
    pub job: &'static str,
    /// Whole-dollar "From $" price.
    pub price: u32,
    pub detail: &'static str,
    pub match_terms: Vec<&'static str>,
}

impl FlatRateOffer {
    pub fn to_view(&self) -> FlatRateOfferView {
        FlatRateOfferView {
            job: self.job,
            price: self.price,
            detail: self.detail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlatRateOfferView {
    pub job: &'static str,
    pub price: u32,
    pub detail: &'static str,
}

#[derive(Debug, Clone)]
pub struct PriceCatalog {
    offers: Vec<FlatRateOffer>,
}

impl PriceCatalog {
    /// The published small-job price grid.
    pub fn standard() -> Self {
        Self {
            offers: vec![
                FlatRateOffer {
                    job: "Handyperson Task",
                    price: 158,
                    detail: "Up to 2 hours",
                    match_terms: vec!["handyperson", "handyman"],
                },
                FlatRateOffer {
                    job: "Leaky Faucet Fix",
                    price: 226,
                    detail: "Parts included",
                    match_terms: vec!["faucet"],
                },
                FlatRateOffer {
                    job: "Outlet Replacement",
                    price: 185,
                    detail: "Safety checked",
                    match_terms: vec!["outlet"],
                },
                FlatRateOffer {
                    job: "Gutter Cleaning",
                    price: 199,
                    detail: "Single story",
                    match_terms: vec!["gutter"],
                },
            ],
        }
    }

    pub fn offers(&self) -> &[FlatRateOffer] {
        &self.offers
    }

    pub fn views(&self) -> Vec<FlatRateOfferView> {
        self.offers.iter().map(FlatRateOffer::to_view).collect()
    }

    /// First offer whose match term appears in the phrase. Phrases outside
    /// the grid get no quote rather than a guessed one.
    pub fn match_phrase(&self, phrase: &str) -> Option<&FlatRateOffer> {
        let haystack = phrase.trim().to_lowercase();
        self.offers.iter().find(|offer| {
            offer
                .match_terms
                .iter()
                .any(|term| haystack.contains(term))
        })
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faucet_phrase_quotes_flat_rate() {
        let catalog = PriceCatalog::standard();
        let offer = catalog
            .match_phrase("Leaky faucet under sink")
            .expect("faucet offer");
        assert_eq!(offer.job, "Leaky Faucet Fix");
        assert_eq!(offer.price, 226);
        assert_eq!(offer.detail, "Parts included");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = PriceCatalog::standard();
        let offer = catalog.match_phrase("GUTTERS need cleaning").expect("offer");
        assert_eq!(offer.price, 199);
    }

    #[test]
    fn phrases_outside_grid_get_no_quote() {
        let catalog = PriceCatalog::standard();
        assert!(catalog.match_phrase("Install a new roof").is_none());
        assert!(catalog.match_phrase("").is_none());
    }

    #[test]
    fn standard_grid_has_four_offers() {
        let catalog = PriceCatalog::standard();
        assert_eq!(catalog.offers().len(), 4);
        let views = catalog.views();
        assert_eq!(views[0].job, "Handyperson Task");
        assert_eq!(views[0].price, 158);
    }
}
