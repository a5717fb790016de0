//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses CSV text through the validated record types in
//! `tfn-dec` and inserts the surviving rows into the corresponding table.
//! The region and species filters run here, at load time, so the tables
//! only ever hold rows a query can return.

use crate::Database;
use rusqlite::params;

use tfn_dec::fishing_spot::FishingSpot;
use tfn_dec::stocking::StockingRecord;
use tfn_dec::zip_code::ZipCodeRecord;

impl Database {
    /// Load postal-code registry rows whose `State Abbreviation` equals
    /// `region` exactly. Returns the number of rows inserted.
    ///
    /// The zip code is the table's primary key and duplicates are ignored,
    /// so the first registry row for a zip wins.
    pub fn load_zip_codes(&self, csv_data: &str, region: &str) -> anyhow::Result<usize> {
        let records = ZipCodeRecord::parse_zip_code_csv(csv_data, region)?;
        let conn = self.conn.borrow();
        let mut count = 0usize;
        for z in &records {
            count += conn.execute(
                "INSERT OR IGNORE INTO zip_codes
                 (zip_code, country, state_abbr, state_full, county, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    z.zip_code,
                    z.country,
                    z.state_abbr,
                    z.state_full,
                    z.county,
                    z.latitude,
                    z.longitude
                ],
            )?;
        }
        log::info!(
            "[TFN Debug] loader: Loaded {} zip codes for region {}",
            count,
            region
        );
        Ok(count)
    }

    /// Load the fishing-spot catalog. Returns the number of rows inserted.
    ///
    /// Insertion order follows the catalog, and `rowid` keeps that order
    /// for queries, which matters for the resolver's tie-break.
    pub fn load_fishing_spots(&self, csv_data: &str) -> anyhow::Result<usize> {
        let spots = FishingSpot::parse_fishing_spot_csv(csv_data)?;
        let conn = self.conn.borrow();
        for s in &spots {
            conn.execute(
                "INSERT INTO fishing_spots (waterbody_name, species_present, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4)",
                params![s.waterbody_name, s.species_present, s.latitude, s.longitude],
            )?;
        }
        log::info!("[TFN Debug] loader: Loaded {} fishing spots", spots.len());
        Ok(spots.len())
    }

    /// Load stocking events whose `Species` contains `species`. Returns the
    /// number of rows inserted.
    ///
    /// A waterbody stocked in several years keeps one row per event; the
    /// totals query sums them.
    pub fn load_stockings(&self, csv_data: &str, species: &str) -> anyhow::Result<usize> {
        let records = StockingRecord::parse_stocking_csv(csv_data, species)?;
        let conn = self.conn.borrow();
        for r in &records {
            conn.execute(
                "INSERT INTO stockings (species, waterbody, number, year)
                 VALUES (?1, ?2, ?3, ?4)",
                params![r.species, r.waterbody, r.number, r.year],
            )?;
        }
        log::info!(
            "[TFN Debug] loader: Loaded {} stocking events for species filter {:?}",
            records.len(),
            species
        );
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const ZIPS: &str = "\
Zip Code,Place Name,State,State Abbreviation,County,Country,Latitude,Longitude
12207,Albany,New York,NY,Albany,US,42.6526,-73.7562
14604,Rochester,New York,NY,Monroe,US,43.1566,-77.6088
05401,Burlington,Vermont,VT,Chittenden,US,44.4759,-73.2121
";

    const STOCKINGS: &str = "\
Year,County,Waterbody,Town,Month,Number,Species
2021,Saratoga,Kayaderosseras Creek,Milton,April,4300,Brown Trout
2022,Saratoga,Kayaderosseras Creek,Milton,April,4100,Brown Trout
2021,Suffolk,Fort Pond,Montauk,June,2500,Walleye
";

    #[test]
    fn load_zip_codes_filters_to_region() {
        let db = Database::new().unwrap();
        let loaded = db.load_zip_codes(ZIPS, "NY").unwrap();
        assert_eq!(loaded, 2, "VT row should be filtered out");
        assert_eq!(db.query_zip_count().unwrap(), 2);
    }

    #[test]
    fn load_zip_codes_first_duplicate_wins() {
        let db = Database::new().unwrap();
        let csv = "\
Zip Code,State,State Abbreviation,County,Country,Latitude,Longitude
12207,New York,NY,Albany,US,42.6526,-73.7562
12207,New York,NY,Rensselaer,US,42.0,-73.0
";
        let loaded = db.load_zip_codes(csv, "NY").unwrap();
        assert_eq!(loaded, 1, "Duplicate zip should be ignored");

        let record = db.query_zip_code(12207).unwrap().unwrap();
        assert_eq!(record.county, "Albany");
        assert!((record.latitude - 42.6526).abs() < f64::EPSILON);
    }

    #[test]
    fn load_fishing_spots_keeps_catalog_order() {
        let db = Database::new().unwrap();
        let csv = "\
Waterbody Name,Fish Species Present at Waterbody,Latitude,Longitude
Second Listed,Brown Trout,42.70,-73.80
First Listed,Brown Trout,42.70,-73.80
";
        db.load_fishing_spots(csv).unwrap();
        let spots = db.query_spots_with_species("Trout").unwrap();
        assert_eq!(spots[0].waterbody_name, "Second Listed");
        assert_eq!(spots[1].waterbody_name, "First Listed");
    }

    #[test]
    fn load_stockings_filters_species() {
        let db = Database::new().unwrap();
        let loaded = db.load_stockings(STOCKINGS, "Trout").unwrap();
        assert_eq!(loaded, 2, "Walleye row should be filtered out");
    }

    #[test]
    fn load_stockings_keeps_one_row_per_event() {
        let db = Database::new().unwrap();
        db.load_stockings(STOCKINGS, "Trout").unwrap();
        let totals = db.query_stocking_totals().unwrap();
        assert_eq!(totals.len(), 1, "Both events are for the same waterbody");
        assert_eq!(totals[0].total_stocked, 8400);
    }

    #[test]
    fn loading_malformed_header_fails() {
        let db = Database::new().unwrap();
        let missing_number = "Year,Waterbody,Species\n2021,Cedar River,Brook Trout\n";
        assert!(db.load_stockings(missing_number, "Trout").is_err());
    }
}
