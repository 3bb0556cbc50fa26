use std::fmt;

use serde::{Deserialize, Serialize};

/// Specification of one purchasable vehicle variant as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub model_name: String,
    pub variant_name: String,
    pub base_price_usd: u32,
    pub range_miles: u32,
    pub top_speed_mph: u32,
    pub zero_to_sixty_seconds: f32,
    pub energy_consumption_wh_per_mile: u32,
    pub seating: SeatingCapacity,
    pub body_type: BodyType,
    pub towing: TowingCapacity,
    pub full_self_driving_available: bool,
    pub drive_type: String,
    pub warranty_summary: String,
}

impl VehicleSpec {
    /// Model and variant joined for display, e.g. `Model 3 Standard`.
    pub fn display_name(&self) -> String {
        if self.variant_name.is_empty() {
            self.model_name.clone()
        } else {
            format!("{} {}", self.model_name, self.variant_name)
        }
    }
}

/// Alternative seat counts a variant can be configured with (`5/7` in the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingCapacity(Vec<u8>);

impl SeatingCapacity {
    /// Returns `None` when no configuration is given or any configuration seats nobody.
    pub fn new(options: Vec<u8>) -> Option<Self> {
        if options.is_empty() || options.contains(&0) {
            return None;
        }
        Some(Self(options))
    }

    pub fn single(seats: u8) -> Self {
        Self(vec![seats.max(1)])
    }

    pub fn options(&self) -> &[u8] {
        &self.0
    }

    /// The largest configuration; this is what passenger fit is judged against.
    pub fn effective(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for SeatingCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&joined)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    Sedan,
    Suv,
    Pickup,
    Other(String),
}

impl BodyType {
    /// Parses a catalog or form label. Unknown labels are kept verbatim.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let body = match trimmed.to_ascii_lowercase().as_str() {
            "sedan" => Self::Sedan,
            "suv" => Self::Suv,
            "pickup" | "pickup truck" | "truck" => Self::Pickup,
            _ => Self::Other(trimmed.to_string()),
        };
        Some(body)
    }

    pub fn label(&self) -> &str {
        match self {
            BodyType::Sedan => "Sedan",
            BodyType::Suv => "SUV",
            BodyType::Pickup => "Pickup",
            BodyType::Other(label) => label,
        }
    }

    pub fn matches(&self, other: &BodyType) -> bool {
        self.label().eq_ignore_ascii_case(other.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowingCapacity {
    Rated(u32),
    NotApplicable,
}

impl TowingCapacity {
    pub fn pounds(self) -> Option<u32> {
        match self {
            TowingCapacity::Rated(lbs) => Some(lbs),
            TowingCapacity::NotApplicable => None,
        }
    }
}

/// Inclusive budget window in whole US dollars. Invariant: `max >= min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyStylePreference {
    Any,
    Only(BodyType),
}

impl BodyStylePreference {
    pub fn matches(&self, body_type: &BodyType) -> bool {
        match self {
            BodyStylePreference::Any => false,
            BodyStylePreference::Only(preferred) => preferred.matches(body_type),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Performance,
    Efficiency,
    #[default]
    Balanced,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "performance" => Some(Self::Performance),
            "efficiency" => Some(Self::Efficiency),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPreference {
    #[default]
    Any,
    Named(String),
}

/// Validated shopping constraints for a single recommendation request.
///
/// `city_highway_ratio` and `color_preference` are carried for callers but no
/// scoring rule reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub price_range: PriceRange,
    pub daily_distance_miles: u32,
    pub passenger_count: u8,
    pub body_style: BodyStylePreference,
    pub priority: Priority,
    pub city_highway_ratio: u8,
    pub towing_required: bool,
    pub fsd_required: bool,
    pub color_preference: ColorPreference,
}

/// Scoring rules in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    Budget,
    RangeCoverage,
    Priority,
    Seating,
    BodyStyle,
    Towing,
    FullSelfDriving,
}

/// Discrete contribution of one rule, kept so a score can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub delta: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Per-vehicle scoring result for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub vehicle: &'a VehicleSpec,
    /// Running total before clamping; ordering uses this value.
    pub raw_score: i32,
    /// `raw_score` clamped at zero.
    pub score: u32,
    /// At most three reasons, in the order their rules fired.
    pub reasons: Vec<String>,
    pub over_budget_note: Option<String>,
    pub components: Vec<ScoreComponent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_seating_is_largest_option() {
        let seating = SeatingCapacity::new(vec![5, 7, 6]).expect("valid seating");
        assert_eq!(seating.effective(), 7);
        assert_eq!(seating.to_string(), "5/7/6");
        assert!(SeatingCapacity::new(Vec::new()).is_none());
        assert!(SeatingCapacity::new(vec![0, 5]).is_none());
    }

    #[test]
    fn body_type_labels_round_trip_case_insensitively() {
        assert_eq!(BodyType::parse("suv"), Some(BodyType::Suv));
        assert_eq!(BodyType::parse(" Pickup Truck "), Some(BodyType::Pickup));
        assert_eq!(BodyType::parse(""), None);

        let hatch = BodyType::parse("Hatchback").expect("custom body type");
        assert_eq!(hatch.label(), "Hatchback");
        assert!(hatch.matches(&BodyType::Other("hatchback".to_string())));
        assert!(!hatch.matches(&BodyType::Sedan));
    }

    #[test]
    fn any_style_never_matches() {
        assert!(!BodyStylePreference::Any.matches(&BodyType::Sedan));
        assert!(BodyStylePreference::Only(BodyType::Suv).matches(&BodyType::Suv));
    }

    #[test]
    fn priority_parses_known_keywords() {
        assert_eq!(Priority::parse("PERFORMANCE"), Some(Priority::Performance));
        assert_eq!(Priority::parse(" efficiency"), Some(Priority::Efficiency));
        assert_eq!(Priority::parse("balanced"), Some(Priority::Balanced));
        assert_eq!(Priority::parse("luxury"), None);
    }
}
