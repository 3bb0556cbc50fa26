use serde::Serialize;

use super::super::display;
use super::super::domain::{ScoredCandidate, VehicleSpec};
use super::assets::AssetDirectory;

/// Display-ready recommendation returned to the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub base_price: String,
    pub range: String,
    pub acceleration: String,
    pub top_speed: String,
    pub score: u32,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_budget_note: Option<String>,
}

impl Recommendation {
    pub fn from_candidate(candidate: &ScoredCandidate<'_>, assets: &AssetDirectory) -> Self {
        let vehicle = candidate.vehicle;
        Self {
            id: assets.id_for(&vehicle.model_name),
            name: vehicle.display_name(),
            image: assets.image_for(&vehicle.model_name),
            base_price: display::usd(u64::from(vehicle.base_price_usd)),
            range: display::miles(vehicle.range_miles),
            acceleration: display::seconds(vehicle.zero_to_sixty_seconds),
            top_speed: display::mph(vehicle.top_speed_mph),
            score: candidate.score,
            reasons: candidate.reasons.clone(),
            over_budget_note: candidate.over_budget_note.clone(),
        }
    }

    /// Fixed suggestion shown when scoring produced nothing to rank.
    pub fn fallback() -> Self {
        Self {
            id: "model-3".to_string(),
            name: "Model 3".to_string(),
            image: Some("/images/model-3.jpg".to_string()),
            base_price: "$38,990".to_string(),
            range: "272 mi".to_string(),
            acceleration: "5.8s".to_string(),
            top_speed: "125 mph".to_string(),
            score: 0,
            reasons: vec!["Our most popular all-round electric sedan".to_string()],
            over_budget_note: None,
        }
    }
}

/// Catalog listing entry for browsing without preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryView {
    pub id: String,
    pub model: String,
    pub variant: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub base_price: String,
    pub range: String,
    pub acceleration: String,
    pub top_speed: String,
    pub efficiency: String,
    pub seating: String,
    pub body_type: String,
    pub towing: String,
    pub full_self_driving: bool,
    pub drive_type: String,
    pub warranty: String,
}

impl CatalogEntryView {
    pub fn from_vehicle(vehicle: &VehicleSpec, assets: &AssetDirectory) -> Self {
        let towing = match vehicle.towing.pounds() {
            Some(pounds) => format!("{} lbs", display::thousands(u64::from(pounds))),
            None => "N/A".to_string(),
        };

        Self {
            id: assets.id_for(&vehicle.model_name),
            model: vehicle.model_name.clone(),
            variant: vehicle.variant_name.clone(),
            name: vehicle.display_name(),
            image: assets.image_for(&vehicle.model_name),
            base_price: display::usd(u64::from(vehicle.base_price_usd)),
            range: display::miles(vehicle.range_miles),
            acceleration: display::seconds(vehicle.zero_to_sixty_seconds),
            top_speed: display::mph(vehicle.top_speed_mph),
            efficiency: format!("{} Wh/mi", vehicle.energy_consumption_wh_per_mile),
            seating: vehicle.seating.to_string(),
            body_type: vehicle.body_type.label().to_string(),
            towing,
            full_self_driving: vehicle.full_self_driving_available,
            drive_type: vehicle.drive_type.clone(),
            warranty: vehicle.warranty_summary.clone(),
        }
    }
}
