//! Distance computation and nearest-spot resolution.
//!
//! This crate is pure computation over the record types from `tfn-dec`:
//! no I/O, no state. The interaction loop hands it the loaded reference
//! collections and gets back a single resolved result.

pub mod haversine;
pub mod nearest;
