//! Query result model structs derived from the stocking table.
//!
//! Record types read back verbatim from the reference tables reuse the
//! structs in `tfn-dec`; only derived shapes live here.

use serde::Serialize;

/// Total fish stocked into one waterbody across all recorded years.
///
/// Produced by the `GROUP BY waterbody` aggregation; waterbody names are
/// unique within one result set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StockingTotal {
    pub waterbody: String,
    pub total_stocked: i64,
}
