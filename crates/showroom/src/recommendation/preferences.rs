use serde::{Deserialize, Serialize};

use super::domain::{
    BodyStylePreference, BodyType, ColorPreference, PreferenceSet, PriceRange, Priority,
};

const MIN_PASSENGERS: u8 = 1;
const MAX_PASSENGERS: u8 = 7;
const DEFAULT_CITY_HIGHWAY_RATIO: u8 = 50;

/// Rejection raised when a preference payload cannot be turned into a [`PreferenceSet`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidPreferenceError {
    #[error("missing required preference `{0}`")]
    Missing(&'static str),
    #[error("preference `{field}` is malformed: {detail}")]
    Malformed { field: &'static str, detail: String },
}

/// Numbers arrive either as JSON numbers or as form strings such as `"40,000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    fn resolve(&self, field: &'static str) -> Result<f64, InvalidPreferenceError> {
        let value = match self {
            NumericInput::Number(value) => *value,
            NumericInput::Text(raw) => {
                let cleaned: String = raw
                    .trim()
                    .chars()
                    .filter(|ch| !matches!(ch, '$' | ',' | '_'))
                    .collect();
                cleaned
                    .parse::<f64>()
                    .map_err(|_| InvalidPreferenceError::Malformed {
                        field,
                        detail: format!("'{raw}' is not a number"),
                    })?
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(InvalidPreferenceError::Malformed {
                field,
                detail: "value must be finite".to_string(),
            })
        }
    }

    fn resolve_whole(&self, field: &'static str) -> Result<f64, InvalidPreferenceError> {
        let value = self.resolve(field)?.round();
        if value > f64::from(u32::MAX) {
            return Err(InvalidPreferenceError::Malformed {
                field,
                detail: format!("{value} is out of range"),
            });
        }
        Ok(value)
    }

    fn resolve_non_negative(&self, field: &'static str) -> Result<u32, InvalidPreferenceError> {
        let value = self.resolve_whole(field)?;
        if value < 0.0 {
            return Err(InvalidPreferenceError::Malformed {
                field,
                detail: format!("{value} is negative"),
            });
        }
        Ok(value as u32)
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Checkbox values arrive either as JSON booleans or as form strings such as `"on"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagInput {
    Flag(bool),
    Text(String),
}

impl FlagInput {
    fn resolve(&self, field: &'static str) -> Result<bool, InvalidPreferenceError> {
        match self {
            FlagInput::Flag(value) => Ok(*value),
            FlagInput::Text(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" | "" => Ok(false),
                _ => Err(InvalidPreferenceError::Malformed {
                    field,
                    detail: format!("'{raw}' is not a yes/no value"),
                }),
            },
        }
    }
}

impl From<bool> for FlagInput {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRangePayload {
    #[serde(default)]
    pub min: Option<NumericInput>,
    #[serde(default)]
    pub max: Option<NumericInput>,
}

/// Raw preference payload as submitted by the storefront form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencePayload {
    #[serde(default)]
    pub price_range: Option<PriceRangePayload>,
    #[serde(default, alias = "dailyDistanceMiles")]
    pub daily_distance: Option<NumericInput>,
    #[serde(default, alias = "passengerCount")]
    pub passengers: Option<NumericInput>,
    #[serde(default, alias = "bodyStylePreference")]
    pub style: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub towing: Option<FlagInput>,
    #[serde(default)]
    pub fsd: Option<FlagInput>,
    #[serde(default)]
    pub city_highway_ratio: Option<NumericInput>,
    #[serde(default)]
    pub color_preference: Option<String>,
}

impl PreferencePayload {
    pub fn normalize(&self) -> Result<PreferenceSet, InvalidPreferenceError> {
        normalize(self)
    }
}

/// Validates required fields, fills defaults, and clamps ranges.
pub fn normalize(payload: &PreferencePayload) -> Result<PreferenceSet, InvalidPreferenceError> {
    let price_range = normalize_price_range(payload.price_range.as_ref())?;

    let daily_distance_miles = payload
        .daily_distance
        .as_ref()
        .ok_or(InvalidPreferenceError::Missing("dailyDistance"))?
        .resolve_non_negative("dailyDistance")?;

    let passengers = payload
        .passengers
        .as_ref()
        .ok_or(InvalidPreferenceError::Missing("passengers"))?
        .resolve_whole("passengers")?;
    let passenger_count =
        passengers.clamp(f64::from(MIN_PASSENGERS), f64::from(MAX_PASSENGERS)) as u8;

    let body_style = normalize_style(
        payload
            .style
            .as_deref()
            .ok_or(InvalidPreferenceError::Missing("style"))?,
    )?;

    let priority = match payload.priority.as_deref().map(str::trim) {
        None | Some("") => Priority::default(),
        Some(raw) => Priority::parse(raw).ok_or_else(|| InvalidPreferenceError::Malformed {
            field: "priority",
            detail: format!("'{raw}' is not one of Performance, Efficiency, Balanced"),
        })?,
    };

    let city_highway_ratio = match &payload.city_highway_ratio {
        Some(input) => input.resolve("cityHighwayRatio")?.round().clamp(0.0, 100.0) as u8,
        None => DEFAULT_CITY_HIGHWAY_RATIO,
    };

    let color_preference = match payload.color_preference.as_deref().map(str::trim) {
        None | Some("") => ColorPreference::Any,
        Some(raw) if raw.eq_ignore_ascii_case("any") => ColorPreference::Any,
        Some(raw) => ColorPreference::Named(raw.to_string()),
    };

    let towing_required = resolve_flag(payload.towing.as_ref(), "towing")?;
    let fsd_required = resolve_flag(payload.fsd.as_ref(), "fsd")?;

    Ok(PreferenceSet {
        price_range,
        daily_distance_miles,
        passenger_count,
        body_style,
        priority,
        city_highway_ratio,
        towing_required,
        fsd_required,
        color_preference,
    })
}

fn resolve_flag(
    input: Option<&FlagInput>,
    field: &'static str,
) -> Result<bool, InvalidPreferenceError> {
    input.map_or(Ok(false), |flag| flag.resolve(field))
}

fn normalize_price_range(
    payload: Option<&PriceRangePayload>,
) -> Result<PriceRange, InvalidPreferenceError> {
    let max = payload
        .and_then(|range| range.max.as_ref())
        .ok_or(InvalidPreferenceError::Missing("priceRange.max"))?
        .resolve_non_negative("priceRange.max")?;

    let min = match payload.and_then(|range| range.min.as_ref()) {
        Some(input) => input.resolve_non_negative("priceRange.min")?,
        None => 0,
    };

    Ok(PriceRange {
        min: min.min(max),
        max,
    })
}

fn normalize_style(raw: &str) -> Result<BodyStylePreference, InvalidPreferenceError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("any") {
        return Ok(BodyStylePreference::Any);
    }

    BodyType::parse(trimmed)
        .map(BodyStylePreference::Only)
        .ok_or_else(|| InvalidPreferenceError::Malformed {
            field: "style",
            detail: "body style must not be empty".to_string(),
        })
}
