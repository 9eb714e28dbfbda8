//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON.

use serde::Serialize;

/// One charging location from the cleaned station dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationRecord {
    /// Station identifier, unique per location in a well-formed dataset.
    pub id: String,
    /// Operating company.
    pub operator: String,
    /// German federal state (Bundesland).
    pub state: String,
    /// Postal code, kept as text so leading zeros survive.
    pub postal_code: String,
    /// Number of charging points at this location.
    pub loading_spots: Option<i64>,
    /// Supported payment systems, free text.
    pub payment_systems: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationRecord {
    /// Both coordinates, if the station can be placed on the map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Number of stations in one federal state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateCount {
    pub state: String,
    pub stations: i64,
}
