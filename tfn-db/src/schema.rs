//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the three reference tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `zip_codes` - postal-code registry rows (zip, region, county, lat/lon);
///   the zip code is the primary key and duplicate rows are ignored on
///   load, so the first registry row for a zip wins
/// - `fishing_spots` - catalog entries; `rowid` preserves catalog order so
///   queries can return spots exactly as the source file listed them
/// - `stockings` - raw stocking events; per-waterbody totals are derived
///   on-the-fly via `GROUP BY waterbody` + `SUM(number)` queries
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS zip_codes (
        zip_code INTEGER PRIMARY KEY,
        country TEXT NOT NULL,
        state_abbr TEXT NOT NULL,
        state_full TEXT NOT NULL,
        county TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS fishing_spots (
        waterbody_name TEXT NOT NULL,
        species_present TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_spots_waterbody ON fishing_spots(waterbody_name);

    CREATE TABLE IF NOT EXISTS stockings (
        species TEXT NOT NULL,
        waterbody TEXT NOT NULL,
        number INTEGER NOT NULL,
        year INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_stockings_waterbody ON stockings(waterbody);

    "#
}
