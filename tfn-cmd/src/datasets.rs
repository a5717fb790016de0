//! Shared dataset loading for the navigator commands.
//!
//! All three reference files are read once at startup, decoded from
//! ISO-8859-1 and loaded into a fresh in-memory database. Any failure here
//! is fatal; the commands never run against partial reference data.

use anyhow::Context;
use clap::Args;
use log::info;

use tfn_db::Database;
use tfn_dec::encoding::latin1_to_string;

/// Region the postal-code registry is filtered to.
pub const REGION: &str = "NY";

/// Species filter applied to both the spot catalog and the stocking list.
pub const SPECIES: &str = "Trout";

/// The three reference dataset files, defaulting to the filenames the DEC
/// and postal-code exports ship under.
#[derive(Args, Debug)]
pub struct DatasetPaths {
    /// Path to the fishing-spot catalog CSV
    #[arg(long, default_value = "Recommended_Fishing_Rivers_And_Streams_API.csv")]
    pub spots_csv: String,

    /// Path to the fish-stocking records CSV
    #[arg(long, default_value = "Fish_Stocking_Lists__Actual___Beginning_2011.csv")]
    pub stocking_csv: String,

    /// Path to the US postal-code registry CSV
    #[arg(long, default_value = "us_postal_codes.csv")]
    pub zipcodes_csv: String,
}

/// Read the three reference files and load them into a new database.
pub fn load_database(paths: &DatasetPaths) -> anyhow::Result<Database> {
    let spots = read_latin1(&paths.spots_csv)?;
    let stocking = read_latin1(&paths.stocking_csv)?;
    let zipcodes = read_latin1(&paths.zipcodes_csv)?;

    let db = Database::new()?;
    let spot_count = db.load_fishing_spots(&spots)?;
    let stocking_count = db.load_stockings(&stocking, SPECIES)?;
    let zip_count = db.load_zip_codes(&zipcodes, REGION)?;
    info!(
        "Loaded {} fishing spots, {} stocking events, {} {} zip codes",
        spot_count, stocking_count, zip_count, REGION
    );
    Ok(db)
}

/// Read a file published as ISO-8859-1 text into a `String`.
fn read_latin1(path: &str) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path))?;
    Ok(latin1_to_string(&bytes))
}
