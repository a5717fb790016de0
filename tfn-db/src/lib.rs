//! In-memory SQLite layer for the trout fishing navigator.
//!
//! This crate loads the three reference datasets (postal codes, fishing
//! spots, stocking records) into an in-memory SQLite database and exposes
//! typed query methods for the resolver and the console loop. Nothing is
//! ever written to disk; the database lives and dies with the process.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper, cheaply cloneable for sharing
//!   between the loading step and the interaction loop
//! - Region and species filters are applied at load time, so the tables
//!   only ever hold the rows a query can return
//! - Stocking totals are derived on-the-fly via SQL `GROUP BY waterbody` +
//!   `SUM(number)` against the raw stocking table
//!
//! # Usage
//!
//! ```rust
//! use tfn_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_zip_codes(
//!     "Zip Code,State,State Abbreviation,County,Country,Latitude,Longitude\n\
//!      12207,New York,NY,Albany,US,42.6526,-73.7562\n",
//!     "NY",
//! )
//! .unwrap();
//!
//! let record = db.query_zip_code(12207).unwrap();
//! assert!(record.is_some());
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema:
//! - `zip_codes` - postal-code registry rows for the filtered region
//! - `fishing_spots` - catalog entries, in catalog order
//! - `stockings` - raw stocking events for the filtered species

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the navigator reference data.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it from CSV text.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_fishing_spots(
            "Waterbody Name,Fish Species Present at Waterbody,Latitude,Longitude\n\
             Test Creek,Brown Trout,42.70,-73.80\n",
        )
        .unwrap();
        let spots = db2.query_spots_with_species("Trout").unwrap();
        assert_eq!(spots.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_zip_count().unwrap(), 0);
        assert_eq!(db.query_spot_count().unwrap(), 0);
        assert!(db.query_stocking_totals().unwrap().is_empty());
    }
}
