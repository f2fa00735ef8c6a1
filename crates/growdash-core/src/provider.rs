//! Generate-once dataset provider.
//!
//! The dashboard's two states are "ungenerated" and "generated" with a
//! one-way transition on first access. The whole table set is published
//! atomically through a `OnceLock`, so concurrent readers never observe a
//! partially generated dataset.

use std::sync::OnceLock;

use tracing::info;

use crate::generate::DEFAULT_SEED;
use crate::model::SellerDataset;

/// Owns the seed and the lazily generated dataset.
pub struct SellerDataProvider {
    seed: u64,
    dataset: OnceLock<SellerDataset>,
}

impl Default for SellerDataProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl SellerDataProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            dataset: OnceLock::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the dataset, generating it on first call.
    ///
    /// Repeated calls within one process return the identical tables
    /// without re-sampling.
    pub fn ensure_generated(&self) -> &SellerDataset {
        self.dataset.get_or_init(|| {
            info!(seed = self.seed, "generating seller dataset");
            SellerDataset::generate(self.seed)
        })
    }

    /// Returns the dataset if it has been generated already.
    pub fn get(&self) -> Option<&SellerDataset> {
        self.dataset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ungenerated_until_first_access() {
        let provider = SellerDataProvider::new(42);
        assert!(provider.get().is_none());
        provider.ensure_generated();
        assert!(provider.get().is_some());
    }

    #[test]
    fn test_repeated_access_is_memoized() {
        let provider = SellerDataProvider::new(42);
        let first = provider.ensure_generated();
        let second = provider.ensure_generated();
        // Same allocation, not merely equal content.
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_memoized_tables_match_regeneration() {
        let provider = SellerDataProvider::new(42);
        let cached = provider.ensure_generated();
        assert_eq!(cached, &SellerDataset::generate(42));
    }
}
