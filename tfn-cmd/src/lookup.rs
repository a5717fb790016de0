//! One-shot zipcode resolution for scripted use.
//!
//! Same data flow as the interactive session, but the zipcode arrives as an
//! argument and validation failures are ordinary fatal errors instead of
//! re-prompts.

use anyhow::anyhow;

use tfn_db::Database;
use tfn_geo::nearest::{closest, DistanceResult};

use crate::datasets::{load_database, DatasetPaths, SPECIES};
use crate::navigate::{format_result, parse_zip_input};

pub fn run_lookup(paths: &DatasetPaths, zip: &str, json: bool) -> anyhow::Result<()> {
    let db = load_database(paths)?;
    let result = resolve_zip(&db, zip)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&result));
    }
    Ok(())
}

/// Validate `zip` against the loaded registry and resolve its nearest
/// stocked waterbody.
pub(crate) fn resolve_zip(db: &Database, zip: &str) -> anyhow::Result<DistanceResult> {
    let zip_value =
        parse_zip_input(zip).ok_or_else(|| anyhow!("{} is invalid zipcode!", zip))?;
    let record = db
        .query_zip_code(zip_value)?
        .ok_or_else(|| anyhow!("{} is invalid zipcode!", zip))?;

    let spots = db.query_spots_with_species(SPECIES)?;
    let stocking = db.stocking_totals_map()?;
    Ok(closest(&spots, &record, &stocking)?)
}

#[cfg(test)]
mod tests {
    use super::resolve_zip;
    use tfn_db::Database;

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_fishing_spots(
            "Waterbody Name,Fish Species Present at Waterbody,Latitude,Longitude\n\
             Test Creek,Brown Trout,42.70,-73.80\n\
             Far Lake,Brown Trout,45.0,-75.0\n",
        )
        .unwrap();
        db.load_stockings(
            "Year,Waterbody,Number,Species\n2021,Test Creek,500,Brown Trout\n",
            "Trout",
        )
        .unwrap();
        db.load_zip_codes(
            "Zip Code,State,State Abbreviation,County,Country,Latitude,Longitude\n\
             12207,New York,NY,Albany,US,42.6526,-73.7562\n",
            "NY",
        )
        .unwrap();
        db
    }

    #[test]
    fn resolves_a_known_zipcode() {
        let db = sample_db();
        let result = resolve_zip(&db, "12207").unwrap();
        assert_eq!(result.waterbody_name, "Test Creek");
        assert_eq!(result.trout_stocked, 500);
        assert!((6.0..7.0).contains(&result.distance_km));
    }

    #[test]
    fn rejects_non_numeric_input() {
        let db = sample_db();
        let err = resolve_zip(&db, "abc").unwrap_err();
        assert_eq!(err.to_string(), "abc is invalid zipcode!");
    }

    #[test]
    fn rejects_unknown_zipcode() {
        let db = sample_db();
        let err = resolve_zip(&db, "99999").unwrap_err();
        assert_eq!(err.to_string(), "99999 is invalid zipcode!");
    }

    #[test]
    fn resolver_errors_surface_as_fatal() {
        let db = Database::new().unwrap();
        db.load_zip_codes(
            "Zip Code,State,State Abbreviation,County,Country,Latitude,Longitude\n\
             12207,New York,NY,Albany,US,42.6526,-73.7562\n",
            "NY",
        )
        .unwrap();
        // No spots loaded at all.
        let err = resolve_zip(&db, "12207").unwrap_err();
        assert!(err.to_string().contains("no fishing spots"));
    }

    #[test]
    fn json_serialization_round_trips_the_result_fields() {
        let db = sample_db();
        let result = resolve_zip(&db, "12207").unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"waterbody_name\":\"Test Creek\""));
        assert!(json.contains("\"trout_stocked\":500"));
        assert!(json.contains("\"zip_code\":12207"));
    }
}
