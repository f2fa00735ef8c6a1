//! Deterministic sampling of seller metrics.
//!
//! `generate(seed)` is a pure function of the seed: the same seed always
//! yields bit-identical tables. All ranges are fixed constants, so
//! generation cannot fail.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog;
use crate::model::{ComplianceRisk, Seller, SellerAiAnalysis, SellerDataset, Tier};

/// Seed embedded in the dashboard by default.
pub const DEFAULT_SEED: u64 = 42;

const TIER_WEIGHTS: &[(Tier, f64)] = &[
    (Tier::T0, 0.10),
    (Tier::T1, 0.20),
    (Tier::T2, 0.40),
    (Tier::T3, 0.30),
];

const RISK_WEIGHTS: &[(ComplianceRisk, f64)] = &[
    (ComplianceRisk::Low, 0.6),
    (ComplianceRisk::Medium, 0.3),
    (ComplianceRisk::High, 0.1),
];

/// Draws one item from a non-empty cumulative weight table.
fn pick_weighted<T: Copy>(rng: &mut StdRng, weights: &[(T, f64)]) -> T {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let mut u = rng.gen_range(0.0..total);
    for &(item, w) in weights {
        if u < w {
            return item;
        }
        u -= w;
    }
    // Floating-point round-off can leave u just past the final bucket.
    weights[weights.len() - 1].0
}

impl SellerDataset {
    /// Generates the seller and analysis tables from a fixed seed.
    ///
    /// Structural data (names, countries, categories, recommendation texts)
    /// comes from [`crate::catalog`]; only the numeric metrics and the
    /// tier/risk buckets are sampled.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let sellers: Vec<Seller> = catalog::SELLERS
            .iter()
            .map(|entry| Seller {
                name: entry.name.to_string(),
                country: entry.country,
                category: entry.category,
                gmv: rng.gen_range(20_000..200_000),
                growth_rate: rng.gen_range(-5.0..25.0),
                compliance_score: rng.gen_range(60..95),
                active_days: rng.gen_range(30..365),
                tier: pick_weighted(&mut rng, TIER_WEIGHTS),
            })
            .collect();

        let analyses: Vec<SellerAiAnalysis> = catalog::SELLERS
            .iter()
            .zip(catalog::RECOMMENDATIONS.iter().copied())
            .map(|(entry, recommendation)| SellerAiAnalysis {
                seller: entry.name.to_string(),
                growth_score: rng.gen_range(60..95),
                product_gap_count: rng.gen_range(0..15),
                compliance_risk: pick_weighted(&mut rng, RISK_WEIGHTS),
                sentiment: rng.gen_range(3.0..5.0),
                revenue_potential: rng.gen_range(10_000..80_000),
                recommendation,
            })
            .collect();

        debug!(seed, sellers = sellers.len(), "generated seller dataset");
        SellerDataset { sellers, analyses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(SellerDataset::generate(42), SellerDataset::generate(42));
        assert_eq!(SellerDataset::generate(7), SellerDataset::generate(7));
    }

    #[test]
    fn test_different_seeds_differ() {
        // Structural fields are identical; sampled metrics should not be.
        let a = SellerDataset::generate(1);
        let b = SellerDataset::generate(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_table_lengths() {
        let ds = SellerDataset::generate(42);
        assert_eq!(ds.sellers.len(), 10);
        assert_eq!(ds.analyses.len(), 10);
    }

    #[test]
    fn test_fields_within_declared_ranges() {
        for seed in [0, 1, 42, 999] {
            let ds = SellerDataset::generate(seed);
            for s in &ds.sellers {
                assert!((20_000..200_000).contains(&s.gmv), "gmv {}", s.gmv);
                assert!(
                    (-5.0..25.0).contains(&s.growth_rate),
                    "growth {}",
                    s.growth_rate
                );
                assert!(
                    (60..95).contains(&s.compliance_score),
                    "compliance {}",
                    s.compliance_score
                );
                assert!(
                    (30..365).contains(&s.active_days),
                    "active days {}",
                    s.active_days
                );
            }
            for a in &ds.analyses {
                assert!((60..95).contains(&a.growth_score));
                assert!((0..15).contains(&a.product_gap_count));
                assert!((3.0..5.0).contains(&a.sentiment));
                assert!((10_000..80_000).contains(&a.revenue_potential));
            }
        }
    }

    #[test]
    fn test_seed_42_scenario() {
        let ds = SellerDataset::generate(42);
        let first = &ds.sellers[0];
        assert_eq!(first.name, "TechGiant_SG");
        assert_eq!(first.category, crate::model::Category::Electronics);
        assert!(Tier::all().contains(&first.tier));
    }

    #[test]
    fn test_tier_weights_converge() {
        // Statistical property: over many reseeded generations the tier
        // frequencies approach [0.1, 0.2, 0.4, 0.3].
        let mut counts = [0usize; 4];
        let mut total = 0usize;
        for seed in 0..1000 {
            let ds = SellerDataset::generate(seed);
            for s in &ds.sellers {
                let idx = match s.tier {
                    Tier::T0 => 0,
                    Tier::T1 => 1,
                    Tier::T2 => 2,
                    Tier::T3 => 3,
                };
                counts[idx] += 1;
                total += 1;
            }
        }
        let expected = [0.10, 0.20, 0.40, 0.30];
        for (i, &count) in counts.iter().enumerate() {
            let freq = count as f64 / total as f64;
            assert!(
                (freq - expected[i]).abs() < 0.03,
                "tier index {} frequency {} too far from {}",
                i,
                freq,
                expected[i]
            );
        }
    }

    #[test]
    fn test_risk_weights_converge() {
        let mut low = 0usize;
        let mut total = 0usize;
        for seed in 0..1000 {
            let ds = SellerDataset::generate(seed);
            for a in &ds.analyses {
                if a.compliance_risk == ComplianceRisk::Low {
                    low += 1;
                }
                total += 1;
            }
        }
        let freq = low as f64 / total as f64;
        assert!((freq - 0.6).abs() < 0.03, "low-risk frequency {}", freq);
    }
}
