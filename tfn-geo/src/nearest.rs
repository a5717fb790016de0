//! Nearest stocked-waterbody resolution.
//!
//! Given the loaded fishing-spot collection, an origin postal-code record
//! and the per-waterbody stocking totals, pick the closest spot that has
//! actually been stocked. The catalog holds a few hundred rows, so the
//! resolver scans it exhaustively.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use tfn_dec::fishing_spot::FishingSpot;
use tfn_dec::zip_code::ZipCodeRecord;

use crate::haversine::{distance_km, km_to_miles};

/// Failures of one resolver invocation. All of these are fatal to the
/// query; none are recoverable by re-prompting.
#[derive(Error, Debug, PartialEq)]
pub enum ResolveError {
    /// The filtered spot collection was empty
    #[error("no fishing spots to search")]
    EmptyDataset,

    /// A candidate distance came out non-finite
    #[error("distance to waterbody {0:?} is not a finite number")]
    NumericDomain(String),

    /// Every candidate waterbody is missing from the stocking totals
    #[error("none of {candidates} candidate waterbodies has a stocking record")]
    NoStockedSpot { candidates: usize },
}

/// Outcome of one nearest-spot query: the origin record and the selected
/// spot, with the computed distance and the spot's stocking total.
///
/// Transient; built per query and handed straight to the output layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistanceResult {
    pub zip_code: u32,
    pub country: String,
    pub state_abbr: String,
    pub state_full: String,
    pub county: String,
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    pub waterbody_name: String,
    pub spot_latitude: f64,
    pub spot_longitude: f64,
    /// Great-circle distance from origin to spot in kilometers
    pub distance_km: f64,
    /// Total fish stocked into this waterbody across all recorded years
    pub trout_stocked: i64,
}

impl DistanceResult {
    /// Distance in statute miles, as the report prints it.
    pub fn distance_miles(&self) -> f64 {
        km_to_miles(self.distance_km)
    }
}

/// Resolve the nearest spot to `origin` that has a stocking total.
///
/// Computes the distance to every spot, sorts ascending (the sort is
/// stable, so equal distances keep their catalog order) and returns the
/// first candidate whose waterbody name keys into `stocking`.
///
/// There is no best-effort fallback: when nothing matches, including the
/// empty-map case, the scan reports [`ResolveError::NoStockedSpot`] rather
/// than returning a spot without a stocking count.
pub fn closest(
    spots: &[FishingSpot],
    origin: &ZipCodeRecord,
    stocking: &HashMap<String, i64>,
) -> Result<DistanceResult, ResolveError> {
    if spots.is_empty() {
        return Err(ResolveError::EmptyDataset);
    }

    let mut candidates: Vec<(&FishingSpot, f64)> = Vec::with_capacity(spots.len());
    for spot in spots {
        let km = distance_km(
            origin.latitude,
            origin.longitude,
            spot.latitude,
            spot.longitude,
        );
        if !km.is_finite() {
            return Err(ResolveError::NumericDomain(spot.waterbody_name.clone()));
        }
        candidates.push((spot, km));
    }
    // Finiteness was checked above, so the comparator is total.
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    for (spot, km) in &candidates {
        if let Some(&total_stocked) = stocking.get(spot.waterbody_name.as_str()) {
            return Ok(DistanceResult {
                zip_code: origin.zip_code,
                country: origin.country.clone(),
                state_abbr: origin.state_abbr.clone(),
                state_full: origin.state_full.clone(),
                county: origin.county.clone(),
                origin_latitude: origin.latitude,
                origin_longitude: origin.longitude,
                waterbody_name: spot.waterbody_name.clone(),
                spot_latitude: spot.latitude,
                spot_longitude: spot.longitude,
                distance_km: *km,
                trout_stocked: total_stocked,
            });
        }
    }

    Err(ResolveError::NoStockedSpot {
        candidates: candidates.len(),
    })
}
