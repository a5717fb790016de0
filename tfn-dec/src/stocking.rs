use csv::ReaderBuilder;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::columns::{column_index, field};
use crate::error::Result;

/// Column headers in the DEC stocking-list export. The export carries more
/// columns (town, county, month); only these four feed the aggregation.
const COL_SPECIES: &str = "Species";
const COL_WATERBODY: &str = "Waterbody";
const COL_NUMBER: &str = "Number";
const COL_YEAR: &str = "Year";

/// One raw stocking event: a quantity of one species released into one
/// waterbody in one year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StockingRecord {
    pub species: String,
    pub waterbody: String,
    /// Fish released in this event
    pub number: i64,
    pub year: i32,
}

impl StockingRecord {
    /// Parse the stocking-list CSV, keeping only rows whose `Species` field
    /// contains `species` as a case-sensitive substring. Rows with an empty
    /// species field never match (the null-safe filter), and rows whose
    /// quantity or year fails to parse are skipped rather than aborting the
    /// load; some dataset vintages carry blank or annotated cells there.
    pub fn parse_stocking_csv(csv_object: &str, species: &str) -> Result<Vec<StockingRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();
        let species_idx = column_index(&headers, COL_SPECIES)?;
        let waterbody_idx = column_index(&headers, COL_WATERBODY)?;
        let number_idx = column_index(&headers, COL_NUMBER)?;
        let year_idx = column_index(&headers, COL_YEAR)?;

        let mut stocking_list: Vec<StockingRecord> = Vec::new();
        let mut skipped = 0u32;
        for row in rdr.records() {
            let record = row?;
            let row_species = field(&record, species_idx);
            if !row_species.contains(species) {
                continue;
            }
            // Quantities above a thousand are exported with separators.
            let number: i64 = match field(&record, number_idx).replace(',', "").parse() {
                Ok(n) => n,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let year: i32 = match field(&record, year_idx).parse() {
                Ok(y) => y,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            stocking_list.push(StockingRecord {
                species: String::from(row_species),
                waterbody: String::from(field(&record, waterbody_idx)),
                number,
                year,
            });
        }
        if skipped > 0 {
            debug!("stocking parse skipped {} rows with unusable cells", skipped);
        }
        Ok(stocking_list)
    }
}
