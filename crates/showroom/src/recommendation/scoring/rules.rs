use super::super::display;
use super::super::domain::{PreferenceSet, Priority, ScoringRule, VehicleSpec};

/// Contribution of a single rule. `note` is only ever set by the budget rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RuleOutcome {
    pub delta: i32,
    pub reason: Option<String>,
    pub note: Option<String>,
}

impl RuleOutcome {
    fn delta(delta: i32) -> Self {
        Self {
            delta,
            ..Self::default()
        }
    }

    fn with_reason(delta: i32, reason: String) -> Self {
        Self {
            delta,
            reason: Some(reason),
            note: None,
        }
    }
}

pub(crate) type Rule = fn(&VehicleSpec, &PreferenceSet) -> RuleOutcome;

/// Application order matters: earlier reasons win the three display slots.
pub(crate) const RULES: [(ScoringRule, Rule); 7] = [
    (ScoringRule::Budget, budget),
    (ScoringRule::RangeCoverage, range_coverage),
    (ScoringRule::Priority, priority),
    (ScoringRule::Seating, seating),
    (ScoringRule::BodyStyle, body_style),
    (ScoringRule::Towing, towing),
    (ScoringRule::FullSelfDriving, full_self_driving),
];

pub(crate) const FSD_REASON: &str = "Full Self-Driving capability available";

// Multipliers are compared in integer space: 0.8x = 4/5, 1.15x = 115/100.
pub(crate) fn budget(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    let price = u64::from(vehicle.base_price_usd);
    let max = u64::from(preferences.price_range.max);

    if price <= max {
        let bonus = if price * 5 < max * 4 { 5 } else { 0 };
        RuleOutcome::with_reason(
            30 + bonus,
            format!(
                "Fits your budget at {} (up to {})",
                display::usd(price),
                display::usd(max)
            ),
        )
    } else if price * 100 <= max * 115 {
        RuleOutcome {
            delta: 15,
            reason: None,
            note: Some(format!(
                "{} over your {} budget",
                display::usd(price - max),
                display::usd(max)
            )),
        }
    } else {
        RuleOutcome::delta(-30)
    }
}

// 2.5x = 5/2, 1.5x = 3/2.
pub(crate) fn range_coverage(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    let range = u64::from(vehicle.range_miles);
    let daily = u64::from(preferences.daily_distance_miles);

    if range * 2 >= daily * 5 {
        RuleOutcome::with_reason(
            25,
            format!(
                "{} of range covers your {} daily drive with room to spare",
                display::miles(vehicle.range_miles),
                display::miles(preferences.daily_distance_miles)
            ),
        )
    } else if range * 2 >= daily * 3 {
        RuleOutcome::delta(15)
    } else {
        RuleOutcome::delta(-10)
    }
}

pub(crate) fn priority(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    match preferences.priority {
        Priority::Performance => {
            let seconds = vehicle.zero_to_sixty_seconds;
            if seconds < 3.5 {
                RuleOutcome::with_reason(
                    20,
                    format!("0-60 mph in {} for thrilling performance", display::seconds(seconds)),
                )
            } else if seconds < 4.5 {
                RuleOutcome::delta(10)
            } else {
                RuleOutcome::delta(0)
            }
        }
        Priority::Efficiency => {
            let consumption = vehicle.energy_consumption_wh_per_mile;
            if consumption < 260 {
                RuleOutcome::with_reason(
                    20,
                    format!("Efficient at {consumption} Wh/mi to keep charging costs low"),
                )
            } else {
                RuleOutcome::delta(0)
            }
        }
        Priority::Balanced => RuleOutcome::delta(0),
    }
}

pub(crate) fn seating(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    let seats = vehicle.seating.effective();
    let passengers = preferences.passenger_count;

    if seats < passengers {
        return RuleOutcome::delta(-50);
    }

    if seats > 5 && passengers > 5 {
        RuleOutcome::with_reason(
            15,
            format!("Seats up to {seats}, enough for your party of {passengers}"),
        )
    } else {
        RuleOutcome::delta(15)
    }
}

pub(crate) fn body_style(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    if preferences.body_style.matches(&vehicle.body_type) {
        RuleOutcome::with_reason(
            10,
            format!("Matches your preferred {} body style", vehicle.body_type.label()),
        )
    } else {
        RuleOutcome::delta(0)
    }
}

pub(crate) fn towing(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    match (preferences.towing_required, vehicle.towing.pounds()) {
        (true, Some(pounds)) => RuleOutcome::with_reason(
            15,
            format!("Tows up to {} lbs", display::thousands(u64::from(pounds))),
        ),
        _ => RuleOutcome::delta(0),
    }
}

pub(crate) fn full_self_driving(vehicle: &VehicleSpec, preferences: &PreferenceSet) -> RuleOutcome {
    if preferences.fsd_required && vehicle.full_self_driving_available {
        RuleOutcome::with_reason(10, FSD_REASON.to_string())
    } else {
        RuleOutcome::delta(0)
    }
}
