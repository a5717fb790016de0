use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::columns::{column_index, field, parse_field};
use crate::error::Result;

/// Column headers in the postal-code registry export.
const COL_ZIP: &str = "Zip Code";
const COL_COUNTRY: &str = "Country";
const COL_STATE_ABBR: &str = "State Abbreviation";
const COL_STATE: &str = "State";
const COL_COUNTY: &str = "County";
const COL_LATITUDE: &str = "Latitude";
const COL_LONGITUDE: &str = "Longitude";

/// One postal code with its centroid geolocation.
///
/// Loaded once at startup from the US postal-code registry, filtered down to
/// a single state so every later lookup scans only the region of interest.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ZipCodeRecord {
    pub zip_code: u32,
    pub country: String,
    pub state_abbr: String,
    pub state_full: String,
    pub county: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl ZipCodeRecord {
    /// Parse the registry CSV, keeping only rows whose `State Abbreviation`
    /// equals `region` exactly (case-sensitive).
    ///
    /// Columns are resolved by header name; a missing column or a cell that
    /// does not parse is fatal.
    pub fn parse_zip_code_csv(csv_object: &str, region: &str) -> Result<Vec<ZipCodeRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();
        let zip_idx = column_index(&headers, COL_ZIP)?;
        let country_idx = column_index(&headers, COL_COUNTRY)?;
        let state_abbr_idx = column_index(&headers, COL_STATE_ABBR)?;
        let state_idx = column_index(&headers, COL_STATE)?;
        let county_idx = column_index(&headers, COL_COUNTY)?;
        let lat_idx = column_index(&headers, COL_LATITUDE)?;
        let lon_idx = column_index(&headers, COL_LONGITUDE)?;

        let mut zip_list: Vec<ZipCodeRecord> = Vec::new();
        for row in rdr.records() {
            let record = row?;
            if field(&record, state_abbr_idx) != region {
                continue;
            }
            zip_list.push(ZipCodeRecord {
                zip_code: parse_field(&record, zip_idx, COL_ZIP)?,
                country: String::from(field(&record, country_idx)),
                state_abbr: String::from(field(&record, state_abbr_idx)),
                state_full: String::from(field(&record, state_idx)),
                county: String::from(field(&record, county_idx)),
                latitude: parse_field(&record, lat_idx, COL_LATITUDE)?,
                longitude: parse_field(&record, lon_idx, COL_LONGITUDE)?,
            });
        }
        Ok(zip_list)
    }
}
