//! Typed query methods for the navigator reference data.
//!
//! All queries return the record types from [`tfn_dec`] or the derived
//! shapes in [`crate::models`]. The tables are loaded once at startup and
//! never mutated afterwards, so every query here is a pure read.

use std::collections::HashMap;

use rusqlite::{params, OptionalExtension};

use crate::models::StockingTotal;
use crate::Database;
use tfn_dec::fishing_spot::FishingSpot;
use tfn_dec::zip_code::ZipCodeRecord;

impl Database {
    /// Look up one postal code in the filtered registry.
    ///
    /// Returns `None` for zips outside the loaded region; the console loop
    /// turns that into its re-prompt message.
    pub fn query_zip_code(&self, zip: u32) -> anyhow::Result<Option<ZipCodeRecord>> {
        let conn = self.conn.borrow();
        let record = conn
            .query_row(
                "SELECT zip_code, country, state_abbr, state_full, county, latitude, longitude
                 FROM zip_codes WHERE zip_code = ?1",
                params![zip],
                |row| {
                    Ok(ZipCodeRecord {
                        zip_code: row.get(0)?,
                        country: row.get(1)?,
                        state_abbr: row.get(2)?,
                        state_full: row.get(3)?,
                        county: row.get(4)?,
                        latitude: row.get(5)?,
                        longitude: row.get(6)?,
                    })
                },
            )
            .optional()?;
        log::info!(
            "[TFN Debug] query: query_zip_code({}) found={}",
            zip,
            record.is_some()
        );
        Ok(record)
    }

    /// Get all catalog spots whose species text contains `species`.
    ///
    /// The match uses SQLite `instr`, which is a byte-level (and therefore
    /// case-sensitive) substring test, mirroring the load-time filters.
    /// Results come back in catalog order so the resolver's tie-break on
    /// equal distances stays deterministic.
    pub fn query_spots_with_species(&self, species: &str) -> anyhow::Result<Vec<FishingSpot>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT waterbody_name, species_present, latitude, longitude
             FROM fishing_spots
             WHERE instr(species_present, ?1) > 0
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(params![species], |row| {
                Ok(FishingSpot {
                    waterbody_name: row.get(0)?,
                    species_present: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[TFN Debug] query: query_spots_with_species({:?}) returned {} records",
            species,
            rows.len()
        );
        Ok(rows)
    }

    /// Get per-waterbody stocking totals, summed across all recorded years.
    ///
    /// Derived on-the-fly by `GROUP BY waterbody` + `SUM(number)` against
    /// the raw stocking events; each waterbody appears exactly once.
    pub fn query_stocking_totals(&self) -> anyhow::Result<Vec<StockingTotal>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT waterbody, SUM(number) as total
             FROM stockings
             GROUP BY waterbody
             ORDER BY waterbody",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StockingTotal {
                    waterbody: row.get(0)?,
                    total_stocked: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[TFN Debug] query: query_stocking_totals returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// The stocking totals as a waterbody-keyed map, the shape the resolver
    /// joins against.
    pub fn stocking_totals_map(&self) -> anyhow::Result<HashMap<String, i64>> {
        Ok(self
            .query_stocking_totals()?
            .into_iter()
            .map(|t| (t.waterbody, t.total_stocked))
            .collect())
    }

    /// Number of postal codes in the filtered registry.
    pub fn query_zip_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        Ok(conn.query_row("SELECT COUNT(*) FROM zip_codes", [], |row| row.get(0))?)
    }

    /// Number of catalog spots loaded.
    pub fn query_spot_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        Ok(conn.query_row("SELECT COUNT(*) FROM fishing_spots", [], |row| row.get(0))?)
    }
}
