//! Interactive nearest-spot session.
//!
//! Console protocol: print the banner, prompt for a zipcode until one is
//! all digits and present in the filtered registry, resolve the nearest
//! stocked waterbody, print the four-line report and exit.

use std::io::{BufRead, Write};

use tfn_db::Database;
use tfn_geo::nearest::{closest, DistanceResult};

use crate::datasets::{load_database, DatasetPaths, SPECIES};

const BANNER_RULE: &str = "**********************************************************";
const BANNER_TITLE: &str = "*               Trout fishing navigator                  *";

pub fn run_navigate(paths: &DatasetPaths) -> anyhow::Result<()> {
    let db = load_database(paths)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(&db, &mut stdin.lock(), &mut stdout.lock())
}

/// The session loop against explicit streams, so tests can script it.
pub(crate) fn run_with_io<R: BufRead, W: Write>(
    db: &Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(output, "{}", BANNER_RULE)?;
    writeln!(output, "{}", BANNER_TITLE)?;
    writeln!(output, "{}", BANNER_RULE)?;

    let record = loop {
        writeln!(output, "Input zipcode where you are plan to go: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before a valid zipcode was entered");
        }
        let entered = line.trim();

        let found = match parse_zip_input(entered) {
            Some(zip) => db.query_zip_code(zip)?,
            None => None,
        };
        match found {
            Some(record) => break record,
            None => writeln!(output, "{} is invalid zipcode!", entered)?,
        }
    };

    let spots = db.query_spots_with_species(SPECIES)?;
    let stocking = db.stocking_totals_map()?;
    let result = closest(&spots, &record, &stocking)?;
    write!(output, "{}", format_result(&result))?;
    Ok(())
}

/// A zipcode entry must be non-empty and all ASCII digits.
pub(crate) fn parse_zip_input(input: &str) -> Option<u32> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Render the four-line result report.
pub(crate) fn format_result(result: &DistanceResult) -> String {
    format!(
        "Waterbody Name: {}\nTrout stocked: {:8}\nLocation: {:2.9} {:2.9}\nDistance: {:8.2} miles\n",
        result.waterbody_name,
        result.trout_stocked,
        result.spot_latitude,
        result.spot_longitude,
        result.distance_miles(),
    )
}
