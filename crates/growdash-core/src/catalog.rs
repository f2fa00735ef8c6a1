//! Fixed structural catalog data.
//!
//! Everything in this module is authored, not sampled: the seller roster
//! (name, country, category) and the ordered recommendation list assigned
//! to sellers positionally. Sampled metrics live in [`crate::generate`],
//! keeping the determinism contract auditable.

use crate::model::{Category, Country};

/// One fixed roster entry; identifiers are unique across the roster.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub country: Country,
    pub category: Category,
}

/// The fixed ten-seller roster shown on the Goal tab.
pub const SELLERS: &[CatalogEntry] = &[
    CatalogEntry {
        name: "TechGiant_SG",
        country: Country::Sg,
        category: Category::Electronics,
    },
    CatalogEntry {
        name: "ElectroMax_ID",
        country: Country::Id,
        category: Category::Electronics,
    },
    CatalogEntry {
        name: "FashionHub_MY",
        country: Country::My,
        category: Category::Fashion,
    },
    CatalogEntry {
        name: "BeautyPro_VN",
        country: Country::Vn,
        category: Category::Beauty,
    },
    CatalogEntry {
        name: "HomeDecor_TH",
        country: Country::Th,
        category: Category::Home,
    },
    CatalogEntry {
        name: "SportsPro_PH",
        country: Country::Ph,
        category: Category::Sports,
    },
    CatalogEntry {
        name: "GadgetWorld_SG",
        country: Country::Sg,
        category: Category::Electronics,
    },
    CatalogEntry {
        name: "StyleMax_MY",
        country: Country::My,
        category: Category::Fashion,
    },
    CatalogEntry {
        name: "KitchenPro_TH",
        country: Country::Th,
        category: Category::Home,
    },
    CatalogEntry {
        name: "HealthPlus_ID",
        country: Country::Id,
        category: Category::Health,
    },
];

/// Recommendation texts, assigned to sellers by position (not computed
/// from the sampled metrics).
pub const RECOMMENDATIONS: &[&str] = &[
    "Expand the product line",
    "Improve listing quality",
    "Raise the compliance score",
    "Increase advertising spend",
    "Improve customer service",
    "Expand into new categories",
    "Optimize pricing strategy",
    "Strengthen brand image",
    "Deepen inventory coverage",
    "Improve logistics efficiency",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_has_ten_unique_sellers() {
        assert_eq!(SELLERS.len(), 10);
        let names: HashSet<&str> = SELLERS.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), SELLERS.len());
    }

    #[test]
    fn test_one_recommendation_per_seller() {
        assert_eq!(RECOMMENDATIONS.len(), SELLERS.len());
    }

    #[test]
    fn test_names_encode_country() {
        for entry in SELLERS {
            assert!(
                entry.name.ends_with(entry.country.as_str()),
                "{} does not end with {}",
                entry.name,
                entry.country.as_str()
            );
        }
    }
}
