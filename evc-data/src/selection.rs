//! Click payload parsing.
//!
//! The map script reports a click as
//! `{"points": [{"customdata": [<station id>, ...]}]}`. Only the first
//! point's first custom value matters: it is the id of the clicked station.

use serde::Deserialize;
use serde_json::Value;

/// One clicked point.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClickPoint {
    #[serde(default)]
    pub customdata: Vec<Value>,
}

/// The click event payload emitted by the station map.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClickData {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

impl ClickData {
    /// The id carried by the first clicked point, if any.
    ///
    /// Numeric ids are stringified so they compare equal to the text ids
    /// held by the store.
    pub fn selected_id(&self) -> Option<String> {
        let value = self.points.first()?.customdata.first()?;
        match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Parse a raw click payload into the selected station id.
///
/// Malformed payloads are logged and treated as "no selection".
pub fn selected_id(payload: &str) -> Option<String> {
    match serde_json::from_str::<ClickData>(payload) {
        Ok(click) => click.selected_id(),
        Err(e) => {
            log::warn!("[EVC] selection: ignoring malformed click payload: {}", e);
            None
        }
    }
}
