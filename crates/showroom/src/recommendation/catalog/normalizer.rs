//! Lenient field parsers for hand-maintained catalog spreadsheets.

use super::super::domain::{SeatingCapacity, TowingCapacity};

pub(crate) fn whole_number(value: &str) -> Option<u32> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '$' | ','))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<u32>().ok()
}

pub(crate) fn seconds(value: &str) -> Option<f32> {
    let parsed = value.trim().trim_end_matches('s').parse::<f32>().ok()?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// `5`, `5/7`, and `5 / 6 / 7` are all accepted.
pub(crate) fn seating(value: &str) -> Option<SeatingCapacity> {
    let options = value
        .split('/')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;
    SeatingCapacity::new(options)
}

pub(crate) fn towing(value: &str) -> Option<TowingCapacity> {
    let trimmed = value.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" | "na" | "n/a" | "-" | "none" | "not applicable" => {
            Some(TowingCapacity::NotApplicable)
        }
        _ => whole_number(trimmed).map(TowingCapacity::Rated),
    }
}

pub(crate) fn flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "available" => Some(true),
        "" | "no" | "n" | "false" | "0" | "unavailable" => Some(false),
        _ => None,
    }
}

pub(crate) fn warranty_summary(years: Option<&str>, miles: Option<&str>) -> String {
    let years = years.map(str::trim).filter(|value| !value.is_empty());
    let miles = miles.map(str::trim).filter(|value| !value.is_empty());

    match (years, miles) {
        (Some(years), Some(miles)) => format!("{years} years / {miles} miles"),
        (Some(years), None) => format!("{years} years"),
        (None, Some(miles)) => format!("{miles} miles"),
        (None, None) => String::new(),
    }
}
