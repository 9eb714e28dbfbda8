//! Selection handling, marker styling and map figure construction.
//!
//! Everything the dashboard's click callback computes lives here as plain
//! functions over [`evc_db::models::StationRecord`], so it can be tested
//! without a browser:
//!
//! - `selection`: parse the map's click payload into a station id
//! - `style`: derive marker color, size and opacity per row
//! - `figure`: assemble the scatter map figure handed to D3.js
//! - `details`: the four text fields of the "Selected station" panel
//! - `config`: palette and table constants

pub mod config;
pub mod details;
pub mod figure;
pub mod selection;
pub mod style;
