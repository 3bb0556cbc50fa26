mod rules;

use super::domain::{PreferenceSet, ScoreComponent, ScoredCandidate, VehicleSpec};

/// Reasons retained per candidate; later rules lose their slot.
pub const MAX_REASONS: usize = 3;

/// Scores one vehicle against one preference set.
///
/// Pure and deterministic: rules fold left to right over a running total that may
/// go negative; only the reported `score` is clamped at zero.
pub fn score_vehicle<'a>(
    vehicle: &'a VehicleSpec,
    preferences: &PreferenceSet,
) -> ScoredCandidate<'a> {
    let mut raw_score: i32 = 0;
    let mut reasons = Vec::new();
    let mut over_budget_note = None;
    let mut components = Vec::with_capacity(rules::RULES.len());

    for (rule, apply) in rules::RULES {
        let outcome = apply(vehicle, preferences);
        raw_score += outcome.delta;

        if let Some(reason) = &outcome.reason {
            if reasons.len() < MAX_REASONS {
                reasons.push(reason.clone());
            }
        }
        if outcome.note.is_some() {
            over_budget_note = outcome.note;
        }

        components.push(ScoreComponent {
            rule,
            delta: outcome.delta,
            reason: outcome.reason,
        });
    }

    ScoredCandidate {
        vehicle,
        raw_score,
        score: raw_score.max(0) as u32,
        reasons,
        over_budget_note,
        components,
    }
}
