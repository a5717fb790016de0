use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::columns::{column_index, field, parse_field};
use crate::error::Result;

/// Column headers in the DEC recommended-waters export.
///
/// The export also carries `Special Regulations on Waterbody`,
/// `Waterbody Information` and `Location`, which the navigator never reads;
/// resolving columns by name drops them at parse time.
const COL_WATERBODY: &str = "Waterbody Name";
const COL_SPECIES: &str = "Fish Species Present at Waterbody";
const COL_LATITUDE: &str = "Latitude";
const COL_LONGITUDE: &str = "Longitude";

/// One entry of the DEC fishing-spot catalog.
///
/// `species_present` is free text straight from the export and usually names
/// several species ("Brown Trout, Smallmouth Bass, ..."); callers match on
/// it by substring.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FishingSpot {
    pub waterbody_name: String,
    pub species_present: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl FishingSpot {
    /// Parse the catalog CSV into a vector of FishingSpots, keeping only the
    /// four columns the navigator uses.
    ///
    /// Columns are resolved by header name; a missing column or a cell that
    /// does not parse is fatal.
    pub fn parse_fishing_spot_csv(csv_object: &str) -> Result<Vec<FishingSpot>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();
        let waterbody_idx = column_index(&headers, COL_WATERBODY)?;
        let species_idx = column_index(&headers, COL_SPECIES)?;
        let lat_idx = column_index(&headers, COL_LATITUDE)?;
        let lon_idx = column_index(&headers, COL_LONGITUDE)?;

        let mut spot_list: Vec<FishingSpot> = Vec::new();
        for row in rdr.records() {
            let record = row?;
            spot_list.push(FishingSpot {
                waterbody_name: String::from(field(&record, waterbody_idx)),
                species_present: String::from(field(&record, species_idx)),
                latitude: parse_field(&record, lat_idx, COL_LATITUDE)?,
                longitude: parse_field(&record, lon_idx, COL_LONGITUDE)?,
            });
        }
        Ok(spot_list)
    }

    /// True when `species` occurs as a case-sensitive substring of the
    /// free-text species field.
    pub fn has_species(&self, species: &str) -> bool {
        self.species_present.contains(species)
    }
}
