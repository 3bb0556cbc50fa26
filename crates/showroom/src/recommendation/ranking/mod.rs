mod assets;
mod presenter;

pub use assets::{AssetDirectory, VehicleAsset};
pub use presenter::{CatalogEntryView, Recommendation};

use super::domain::ScoredCandidate;

/// Orders candidates best-first and keeps the top `limit`.
///
/// Ordering uses the unclamped running total so a penalised vehicle still sorts
/// below others even when both display a score of zero. The sort is stable, so
/// equal totals keep catalog order.
pub fn rank(mut candidates: Vec<ScoredCandidate<'_>>, limit: usize) -> Vec<ScoredCandidate<'_>> {
    candidates.sort_by(|left, right| right.raw_score.cmp(&left.raw_score));
    candidates.truncate(limit);
    candidates
}

pub fn present(candidates: &[ScoredCandidate<'_>], assets: &AssetDirectory) -> Vec<Recommendation> {
    candidates
        .iter()
        .map(|candidate| Recommendation::from_candidate(candidate, assets))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::domain::{
        BodyType, SeatingCapacity, TowingCapacity, VehicleSpec,
    };

    fn vehicle(model: &str, variant: &str) -> VehicleSpec {
        VehicleSpec {
            model_name: model.to_string(),
            variant_name: variant.to_string(),
            base_price_usd: 51_490,
            range_miles: 285,
            top_speed_mph: 155,
            zero_to_sixty_seconds: 3.5,
            energy_consumption_wh_per_mile: 290,
            seating: SeatingCapacity::single(5),
            body_type: BodyType::Suv,
            towing: TowingCapacity::Rated(3_500),
            full_self_driving_available: true,
            drive_type: "AWD".to_string(),
            warranty_summary: String::new(),
        }
    }

    fn candidate(vehicle: &VehicleSpec, raw_score: i32) -> ScoredCandidate<'_> {
        ScoredCandidate {
            vehicle,
            raw_score,
            score: raw_score.max(0) as u32,
            reasons: Vec::new(),
            over_budget_note: None,
            components: Vec::new(),
        }
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let vehicles: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|variant| vehicle("Model Y", variant))
            .collect();
        let candidates = vec![
            candidate(&vehicles[0], 40),
            candidate(&vehicles[1], 90),
            candidate(&vehicles[2], 65),
            candidate(&vehicles[3], 80),
        ];

        let ranked = rank(candidates, 3);
        let names: Vec<_> = ranked.iter().map(|c| c.vehicle.variant_name.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "C"]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let first = vehicle("Model Y", "First");
        let second = vehicle("Model Y", "Second");
        let third = vehicle("Model Y", "Third");

        let ranked = rank(
            vec![
                candidate(&first, 55),
                candidate(&second, 70),
                candidate(&third, 55),
            ],
            3,
        );
        let names: Vec<_> = ranked.iter().map(|c| c.vehicle.variant_name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn negative_totals_order_below_zero_even_when_clamped() {
        let mild = vehicle("Model Y", "Mild");
        let severe = vehicle("Model Y", "Severe");

        let ranked = rank(vec![candidate(&severe, -60), candidate(&mild, -5)], 3);
        assert_eq!(ranked[0].vehicle.variant_name, "Mild");
        assert!(ranked.iter().all(|c| c.score == 0));
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        assert!(rank(Vec::new(), 3).is_empty());
    }

    #[test]
    fn presenter_formats_display_fields() {
        let spec = vehicle("Model Y", "Performance");
        let mut scored = candidate(&spec, 85);
        scored.reasons = vec!["Fits your budget".to_string()];

        let shaped = present(&[scored], &AssetDirectory::storefront());
        assert_eq!(
            shaped,
            vec![Recommendation {
                id: "model-y".to_string(),
                name: "Model Y Performance".to_string(),
                image: Some("/images/model-y.jpg".to_string()),
                base_price: "$51,490".to_string(),
                range: "285 mi".to_string(),
                acceleration: "3.5s".to_string(),
                top_speed: "155 mph".to_string(),
                score: 85,
                reasons: vec!["Fits your budget".to_string()],
                over_budget_note: None,
            }]
        );

        let json = serde_json::to_value(&shaped[0]).expect("serializes");
        assert_eq!(json["basePrice"], "$51,490");
        assert_eq!(json["topSpeed"], "155 mph");
        assert!(json.get("overBudgetNote").is_none());
    }

    #[test]
    fn catalog_view_reports_not_applicable_towing() {
        let mut spec = vehicle("Model 3", "Standard");
        spec.towing = TowingCapacity::NotApplicable;
        spec.seating = SeatingCapacity::new(vec![5, 7]).expect("valid seating");

        let view = CatalogEntryView::from_vehicle(&spec, &AssetDirectory::storefront());
        assert_eq!(view.towing, "N/A");
        assert_eq!(view.seating, "5/7");
        assert_eq!(view.efficiency, "290 Wh/mi");
        assert_eq!(view.body_type, "SUV");
    }
}
