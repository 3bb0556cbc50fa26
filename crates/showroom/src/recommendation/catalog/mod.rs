mod normalizer;
mod parser;

pub use parser::CatalogRecordParseError;

use super::domain::VehicleSpec;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const BUNDLED_CATALOG: &str = include_str!("../../../data/vehicle_catalog.csv");

/// Failure to read a catalog source at all. Bad rows never surface here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read vehicle catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vehicle catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read-only list of vehicle variants, in source order.
///
/// Loaded once per process and shared behind an `Arc`; nothing mutates it after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleCatalog {
    vehicles: Vec<VehicleSpec>,
}

impl VehicleCatalog {
    pub fn new(vehicles: Vec<VehicleSpec>) -> Self {
        Self { vehicles }
    }

    /// Catalog shipped with the crate, used when no catalog path is configured.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads a catalog, skipping (and logging) rows that fail to parse.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let (catalog, rejected) = Self::from_reader_with_rejects(reader)?;
        for error in &rejected {
            warn!(row = error.row(), %error, "skipping malformed catalog row");
        }
        info!(
            vehicles = catalog.len(),
            skipped = rejected.len(),
            "vehicle catalog loaded"
        );
        Ok(catalog)
    }

    /// Like [`VehicleCatalog::from_reader`] but hands the rejected rows back to the caller.
    pub fn from_reader_with_rejects<R: Read>(
        reader: R,
    ) -> Result<(Self, Vec<CatalogRecordParseError>), CatalogError> {
        let mut vehicles = Vec::new();
        let mut rejected = Vec::new();

        for record in parser::parse_records(reader)? {
            match record {
                Ok(vehicle) => vehicles.push(vehicle),
                Err(error) => rejected.push(error),
            }
        }

        Ok((Self::new(vehicles), rejected))
    }

    pub fn vehicles(&self) -> &[VehicleSpec] {
        &self.vehicles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleSpec> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl<'a> IntoIterator for &'a VehicleCatalog {
    type Item = &'a VehicleSpec;
    type IntoIter = std::slice::Iter<'a, VehicleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::domain::{BodyType, TowingCapacity};
    use std::io::Cursor;

    const HEADER: &str = "Model,Variant,Base Price (USD),Range (mi),Top Speed (mph),0-60 mph (sec),Energy Consumption (Wh/mi),Seating Capacity,Body Type,Towing Capacity (lbs),Full Self Driving Available,Drive Type,Warranty Years,Warranty Miles\n";

    #[test]
    fn parses_well_formed_rows() {
        let csv = format!(
            "{HEADER}Model Y,Long Range,\"$47,990\",310,135,4.8,270,5/7,SUV,3500,Yes,AWD,4,50000\n"
        );
        let catalog = VehicleCatalog::from_reader(Cursor::new(csv)).expect("catalog loads");

        assert_eq!(catalog.len(), 1);
        let vehicle = &catalog.vehicles()[0];
        assert_eq!(vehicle.display_name(), "Model Y Long Range");
        assert_eq!(vehicle.base_price_usd, 47_990);
        assert_eq!(vehicle.seating.effective(), 7);
        assert_eq!(vehicle.body_type, BodyType::Suv);
        assert_eq!(vehicle.towing, TowingCapacity::Rated(3_500));
        assert!(vehicle.full_self_driving_available);
        assert_eq!(vehicle.drive_type, "AWD");
        assert_eq!(vehicle.warranty_summary, "4 years / 50000 miles");
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let csv = format!(
            "{HEADER}\
Model 3,Standard,38990,272,125,5.8,240,5,Sedan,NA,No,RWD,4,50000\n\
Model 3,Broken,call us,272,125,5.8,240,5,Sedan,NA,No,RWD,4,50000\n\
Model S,Plaid,89990,359,200,quick,310,5,Sedan,NA,Yes,AWD,4,50000\n\
Model X,Plaid,94990,326,163,2.5,350,6,SUV,5000,Yes,AWD,4,50000\n"
        );

        let (catalog, rejected) =
            VehicleCatalog::from_reader_with_rejects(Cursor::new(csv)).expect("catalog loads");

        let names: Vec<_> = catalog.iter().map(VehicleSpec::display_name).collect();
        assert_eq!(names, vec!["Model 3 Standard", "Model X Plaid"]);
        assert_eq!(
            rejected,
            vec![
                CatalogRecordParseError::InvalidField {
                    row: 2,
                    column: "Base Price (USD)",
                    value: "call us".to_string(),
                },
                CatalogRecordParseError::InvalidField {
                    row: 3,
                    column: "0-60 mph (sec)",
                    value: "quick".to_string(),
                },
            ]
        );
    }

    #[test]
    fn header_only_catalog_is_empty() {
        let catalog = VehicleCatalog::from_reader(Cursor::new(HEADER)).expect("catalog loads");
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let error = VehicleCatalog::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, CatalogError::Io(_)));
    }

    #[test]
    fn bundled_catalog_loads_every_row() {
        let (catalog, rejected) =
            VehicleCatalog::from_reader_with_rejects(BUNDLED_CATALOG.as_bytes())
                .expect("bundled catalog loads");
        assert!(rejected.is_empty(), "unexpected rejects: {rejected:?}");
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.vehicles()[0].display_name(), "Model 3 Standard");
    }
}
