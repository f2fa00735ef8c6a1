//! Seller entities, dataset joins, and derived read-only views.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

/// Marketplace country of a seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Sg,
    My,
    Th,
    Id,
    Vn,
    Ph,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Sg => "SG",
            Country::My => "MY",
            Country::Th => "TH",
            Country::Id => "ID",
            Country::Vn => "VN",
            Country::Ph => "PH",
        }
    }
}

/// Product category of a seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Electronics,
    Fashion,
    Beauty,
    Home,
    Sports,
    Health,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Electronics,
            Category::Fashion,
            Category::Beauty,
            Category::Home,
            Category::Sports,
            Category::Health,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Beauty => "Beauty",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Health => "Health",
        }
    }
}

/// Seller segment, T0 (highest priority) through T3 (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    T0,
    T1,
    T2,
    T3,
}

impl Tier {
    pub fn all() -> &'static [Tier] {
        &[Tier::T0, Tier::T1, Tier::T2, Tier::T3]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::T0 => "T0",
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
        }
    }
}

/// Compliance risk bucket assigned per seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplianceRisk {
    Low,
    Medium,
    High,
}

impl ComplianceRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceRisk::Low => "Low",
            ComplianceRisk::Medium => "Medium",
            ComplianceRisk::High => "High",
        }
    }
}

/// One marketplace merchant tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seller {
    /// Unique identifier, encodes brand + country (e.g. "TechGiant_SG").
    pub name: String,
    pub country: Country,
    pub category: Category,
    /// Gross Merchandise Value in dollars, in `[20_000, 200_000)`.
    pub gmv: u32,
    /// Week-over-week growth rate in percent, in `[-5.0, 25.0)`.
    pub growth_rate: f64,
    /// Compliance score, in `[60, 95)`.
    pub compliance_score: u8,
    /// Days since launch, in `[30, 365)`.
    pub active_days: u16,
    pub tier: Tier,
}

/// AI-derived analysis row, one-to-one with [`Seller`] by `seller` name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerAiAnalysis {
    pub seller: String,
    /// AI growth score, in `[60, 95)`.
    pub growth_score: u8,
    /// Number of detected product gaps, in `[0, 15)`.
    pub product_gap_count: u8,
    pub compliance_risk: ComplianceRisk,
    /// Voice-of-seller sentiment, in `[3.0, 5.0)`.
    pub sentiment: f64,
    /// Estimated additional revenue in dollars, in `[10_000, 80_000)`.
    pub revenue_potential: u32,
    /// Fixed recommendation text, assigned positionally from the catalog.
    pub recommendation: &'static str,
}

/// One seller joined with its analysis row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedSeller<'a> {
    pub seller: &'a Seller,
    pub analysis: &'a SellerAiAnalysis,
}

/// Error type for seller/analysis table divergence.
///
/// Generation always produces matching tables, so a join can only fail if
/// one table was edited independently of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// Tables differ in row count.
    LengthMismatch { sellers: usize, analyses: usize },
    /// A seller name appears more than once in either table.
    DuplicateKey(String),
    /// A seller has no matching analysis row.
    MissingAnalysis(String),
}

impl std::fmt::Display for DataIntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataIntegrityError::LengthMismatch { sellers, analyses } => write!(
                f,
                "seller table has {} rows but analysis table has {}",
                sellers, analyses
            ),
            DataIntegrityError::DuplicateKey(name) => {
                write!(f, "duplicate seller identifier: {}", name)
            }
            DataIntegrityError::MissingAnalysis(name) => {
                write!(f, "no analysis row for seller: {}", name)
            }
        }
    }
}

impl std::error::Error for DataIntegrityError {}

/// The two generated tables, immutable after generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerDataset {
    pub sellers: Vec<Seller>,
    pub analyses: Vec<SellerAiAnalysis>,
}

impl SellerDataset {
    /// Inner join of sellers and analyses on seller name.
    ///
    /// Total for any dataset produced by [`SellerDataset::generate`];
    /// fails loudly instead of dropping rows if the tables ever diverge.
    pub fn joined(&self) -> Result<Vec<JoinedSeller<'_>>, DataIntegrityError> {
        self.join_inner().inspect_err(|e| {
            warn!(error = %e, "seller/analysis join failed");
        })
    }

    fn join_inner(&self) -> Result<Vec<JoinedSeller<'_>>, DataIntegrityError> {
        if self.sellers.len() != self.analyses.len() {
            return Err(DataIntegrityError::LengthMismatch {
                sellers: self.sellers.len(),
                analyses: self.analyses.len(),
            });
        }

        let mut by_name: HashMap<&str, &SellerAiAnalysis> =
            HashMap::with_capacity(self.analyses.len());
        for analysis in &self.analyses {
            if by_name.insert(analysis.seller.as_str(), analysis).is_some() {
                return Err(DataIntegrityError::DuplicateKey(analysis.seller.clone()));
            }
        }

        let mut seen: HashMap<&str, ()> = HashMap::with_capacity(self.sellers.len());
        let mut rows = Vec::with_capacity(self.sellers.len());
        for seller in &self.sellers {
            if seen.insert(seller.name.as_str(), ()).is_some() {
                return Err(DataIntegrityError::DuplicateKey(seller.name.clone()));
            }
            let analysis = by_name
                .get(seller.name.as_str())
                .ok_or_else(|| DataIntegrityError::MissingAnalysis(seller.name.clone()))?;
            rows.push(JoinedSeller { seller, analysis });
        }
        Ok(rows)
    }

    /// Top `n` sellers by growth rate, descending.
    ///
    /// Ties are broken ascending by seller name so the order is stable
    /// across identical datasets.
    pub fn top_by_growth(&self, n: usize) -> Vec<&Seller> {
        let mut ranked: Vec<&Seller> = self.sellers.iter().collect();
        ranked.sort_by(|a, b| {
            b.growth_rate
                .partial_cmp(&a.growth_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(n);
        ranked
    }

    /// Seller counts per category, in fixed category order.
    pub fn category_distribution(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|&c| (c, self.sellers.iter().filter(|s| s.category == c).count()))
            .collect()
    }

    /// Seller counts per tier, in T0..T3 order.
    pub fn tier_distribution(&self) -> Vec<(Tier, usize)> {
        Tier::all()
            .iter()
            .map(|&t| (t, self.sellers.iter().filter(|s| s.tier == t).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> SellerDataset {
        SellerDataset::generate(42)
    }

    #[test]
    fn test_join_returns_all_rows() {
        let ds = sample_dataset();
        let joined = ds.joined().unwrap();
        assert_eq!(joined.len(), 10);
        for row in &joined {
            assert_eq!(row.seller.name, row.analysis.seller);
            assert!(!row.seller.name.is_empty());
            assert!(!row.analysis.recommendation.is_empty());
        }
    }

    #[test]
    fn test_join_fails_on_length_mismatch() {
        let mut ds = sample_dataset();
        ds.analyses.pop();
        assert_eq!(
            ds.joined(),
            Err(DataIntegrityError::LengthMismatch {
                sellers: 10,
                analyses: 9
            })
        );
    }

    #[test]
    fn test_join_fails_on_missing_analysis() {
        let mut ds = sample_dataset();
        ds.analyses[3].seller = "Ghost_XX".to_string();
        let err = ds.joined().unwrap_err();
        assert!(matches!(err, DataIntegrityError::MissingAnalysis(_)));
    }

    #[test]
    fn test_join_fails_on_duplicate_key() {
        let mut ds = sample_dataset();
        let dup = ds.analyses[0].seller.clone();
        ds.analyses[1].seller = dup;
        let err = ds.joined().unwrap_err();
        assert!(matches!(err, DataIntegrityError::DuplicateKey(_)));
    }

    #[test]
    fn test_top_by_growth_is_sorted_descending() {
        let ds = sample_dataset();
        let top = ds.top_by_growth(3);
        assert_eq!(top.len(), 3);
        assert!(top[0].growth_rate >= top[1].growth_rate);
        assert!(top[1].growth_rate >= top[2].growth_rate);
    }

    #[test]
    fn test_top_by_growth_breaks_ties_by_name() {
        let ds = sample_dataset();
        let mut tied = ds.clone();
        for seller in &mut tied.sellers {
            seller.growth_rate = 10.0;
        }
        let top: Vec<&str> = tied
            .top_by_growth(10)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let mut expected: Vec<&str> = tied.sellers.iter().map(|s| s.name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(top, expected);
    }

    #[test]
    fn test_distributions_cover_all_sellers() {
        let ds = sample_dataset();
        let by_category: usize = ds.category_distribution().iter().map(|(_, n)| n).sum();
        let by_tier: usize = ds.tier_distribution().iter().map(|(_, n)| n).sum();
        assert_eq!(by_category, 10);
        assert_eq!(by_tier, 10);
    }
}
