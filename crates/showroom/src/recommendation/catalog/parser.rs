use super::super::domain::{BodyType, VehicleSpec};
use super::normalizer;
use serde::Deserialize;
use std::io::Read;

/// A single catalog row that could not be turned into a [`VehicleSpec`].
///
/// `row` counts data rows from 1, excluding the header.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogRecordParseError {
    #[error("catalog row {row}: column '{column}' has invalid value '{value}'")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("catalog row {row}: unreadable record ({detail})")]
    Unreadable { row: usize, detail: String },
}

impl CatalogRecordParseError {
    pub fn row(&self) -> usize {
        match self {
            CatalogRecordParseError::InvalidField { row, .. }
            | CatalogRecordParseError::Unreadable { row, .. } => *row,
        }
    }
}

pub(crate) type ParsedRecord = Result<VehicleSpec, CatalogRecordParseError>;

/// Parses every data row independently. Only a failure to read the header is fatal.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ParsedRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    csv_reader.headers()?;

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = index + 1;
        let record = match result {
            Ok(parsed) => parsed.into_spec(row),
            Err(err) => Err(CatalogRecordParseError::Unreadable {
                row,
                detail: err.to_string(),
            }),
        };
        records.push(record);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Model", default)]
    model: String,
    #[serde(rename = "Variant", default)]
    variant: String,
    #[serde(rename = "Base Price (USD)", default)]
    base_price: String,
    #[serde(rename = "Range (mi)", default)]
    range: String,
    #[serde(rename = "Top Speed (mph)", default)]
    top_speed: String,
    #[serde(rename = "0-60 mph (sec)", default)]
    zero_to_sixty: String,
    #[serde(rename = "Energy Consumption (Wh/mi)", default)]
    energy_consumption: String,
    #[serde(rename = "Seating Capacity", default)]
    seating: String,
    #[serde(rename = "Body Type", default)]
    body_type: String,
    #[serde(rename = "Towing Capacity (lbs)", default)]
    towing: String,
    #[serde(rename = "Full Self Driving Available", default)]
    full_self_driving: String,
    #[serde(rename = "Drive Type", default)]
    drive_type: String,
    #[serde(rename = "Warranty Years", default)]
    warranty_years: Option<String>,
    #[serde(rename = "Warranty Miles", default)]
    warranty_miles: Option<String>,
}

impl CatalogRow {
    fn into_spec(self, row: usize) -> ParsedRecord {
        let invalid = |column: &'static str, value: &str| CatalogRecordParseError::InvalidField {
            row,
            column,
            value: value.to_string(),
        };

        let model_name = self.model.trim().to_string();
        if model_name.is_empty() {
            return Err(invalid("Model", &self.model));
        }

        let base_price_usd = normalizer::whole_number(&self.base_price)
            .ok_or_else(|| invalid("Base Price (USD)", &self.base_price))?;
        let range_miles =
            normalizer::whole_number(&self.range).ok_or_else(|| invalid("Range (mi)", &self.range))?;
        let top_speed_mph = normalizer::whole_number(&self.top_speed)
            .ok_or_else(|| invalid("Top Speed (mph)", &self.top_speed))?;
        let zero_to_sixty_seconds = normalizer::seconds(&self.zero_to_sixty)
            .ok_or_else(|| invalid("0-60 mph (sec)", &self.zero_to_sixty))?;
        let energy_consumption_wh_per_mile = normalizer::whole_number(&self.energy_consumption)
            .ok_or_else(|| invalid("Energy Consumption (Wh/mi)", &self.energy_consumption))?;
        let seating = normalizer::seating(&self.seating)
            .ok_or_else(|| invalid("Seating Capacity", &self.seating))?;
        let body_type =
            BodyType::parse(&self.body_type).ok_or_else(|| invalid("Body Type", &self.body_type))?;
        let towing = normalizer::towing(&self.towing)
            .ok_or_else(|| invalid("Towing Capacity (lbs)", &self.towing))?;
        let full_self_driving_available = normalizer::flag(&self.full_self_driving)
            .ok_or_else(|| invalid("Full Self Driving Available", &self.full_self_driving))?;

        Ok(VehicleSpec {
            model_name,
            variant_name: self.variant.trim().to_string(),
            base_price_usd,
            range_miles,
            top_speed_mph,
            zero_to_sixty_seconds,
            energy_consumption_wh_per_mile,
            seating,
            body_type,
            towing,
            full_self_driving_available,
            drive_type: self.drive_type.trim().to_string(),
            warranty_summary: normalizer::warranty_summary(
                self.warranty_years.as_deref(),
                self.warranty_miles.as_deref(),
            ),
        })
    }
}
