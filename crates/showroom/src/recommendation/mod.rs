//! Preference-driven vehicle recommendations.
//!
//! A request flows through four stages: the raw payload is normalized into a
//! [`PreferenceSet`], every catalog entry is scored independently, candidates are
//! ranked best-first, and the top entries are shaped for display.

pub mod catalog;
mod display;
pub mod domain;
pub mod preferences;
pub mod ranking;
pub mod router;
pub mod scoring;

pub use catalog::{CatalogError, CatalogRecordParseError, VehicleCatalog};
pub use domain::{
    BodyStylePreference, BodyType, ColorPreference, PreferenceSet, PriceRange, Priority,
    ScoreComponent, ScoredCandidate, ScoringRule, SeatingCapacity, TowingCapacity, VehicleSpec,
};
pub use preferences::{
    FlagInput, InvalidPreferenceError, NumericInput, PreferencePayload, PriceRangePayload,
};
pub use ranking::{AssetDirectory, CatalogEntryView, Recommendation, VehicleAsset};
pub use router::recommendation_router;

use crate::config::DEFAULT_RESULT_LIMIT;
use std::sync::Arc;
use tracing::debug;

/// Stateless recommender over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<VehicleCatalog>,
    assets: AssetDirectory,
    limit: usize,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<VehicleCatalog>) -> Self {
        Self {
            catalog,
            assets: AssetDirectory::storefront(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_assets(mut self, assets: AssetDirectory) -> Self {
        self.assets = assets;
        self
    }

    /// Zero is treated as one; a recommendation request always asks for something.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    pub fn assets(&self) -> &AssetDirectory {
        &self.assets
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Every catalog entry scored, in catalog order.
    pub fn score_all(&self, preferences: &PreferenceSet) -> Vec<ScoredCandidate<'_>> {
        self.catalog
            .iter()
            .map(|vehicle| scoring::score_vehicle(vehicle, preferences))
            .collect()
    }

    /// The top-ranked candidates for an already validated preference set.
    pub fn rank(&self, preferences: &PreferenceSet) -> Vec<ScoredCandidate<'_>> {
        ranking::rank(self.score_all(preferences), self.limit)
    }

    /// Validates a raw payload and returns display-ready recommendations.
    ///
    /// An empty catalog yields an empty list; choosing a fallback is up to the caller.
    pub fn recommend(
        &self,
        payload: &PreferencePayload,
    ) -> Result<Vec<Recommendation>, InvalidPreferenceError> {
        let preferences = payload.normalize()?;
        let ranked = self.rank(&preferences);
        debug!(
            catalog = self.catalog.len(),
            returned = ranked.len(),
            priority = ?preferences.priority,
            "recommendations scored"
        );
        Ok(ranking::present(&ranked, &self.assets))
    }

    pub fn catalog_listing(&self) -> Vec<CatalogEntryView> {
        self.catalog
            .iter()
            .map(|vehicle| CatalogEntryView::from_vehicle(vehicle, &self.assets))
            .collect()
    }
}
