//! Scatter map figure construction.
//!
//! [`build_map_figure`] turns the station rows plus the current selection
//! into a [`MapFigure`]: a layout and one trace per marker class. The figure
//! serializes to the JSON consumed by `renderStationMap()` on the JS side.

use crate::config::COLOR_TITLE;
use crate::style::{style_rows, MarkerClass};
use evc_db::models::StationRecord;
use serde::Serialize;

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Outer margins around the map, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

/// Figure-level settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayout {
    pub center: LatLon,
    /// Web-map zoom level; fractional values are allowed.
    pub zoom: f64,
    /// Base map style; only `open-street-map` raster tiles are rendered.
    pub map_style: String,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub paper_bgcolor: String,
    pub show_legend: bool,
}

impl Default for MapLayout {
    /// Germany, framed for a 750x800 map.
    fn default() -> Self {
        Self {
            center: LatLon {
                lat: 51.2634,
                lon: 10.4477,
            },
            zoom: 5.4,
            map_style: "open-street-map".to_string(),
            width: 750,
            height: 800,
            margin: Margin {
                l: 0,
                r: 0,
                b: 50,
                t: 30,
            },
            paper_bgcolor: COLOR_TITLE.to_string(),
            show_legend: false,
        }
    }
}

/// A single plotted station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    /// Sent back in the click payload's `customdata`.
    pub id: String,
    /// Operator name shown on hover.
    pub hover_name: String,
    pub lat: f64,
    pub lon: f64,
    pub size: f64,
    pub opacity: f64,
}

/// All points sharing one marker class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTrace {
    /// Category key (`blue` or `violet`).
    pub name: String,
    pub color: String,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFigure {
    pub layout: MapLayout,
    pub traces: Vec<MapTrace>,
}

impl MapFigure {
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.points.len()).sum()
    }

    /// The trace for a marker class, if any row fell into it.
    pub fn trace(&self, class: MarkerClass) -> Option<&MapTrace> {
        self.traces.iter().find(|t| t.name == class.key())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the scatter map for `stations`, highlighting `selected`.
///
/// Rows without coordinates are not plotted. Empty traces are omitted, and
/// the default trace precedes the selected one so the highlighted marker is
/// drawn on top.
pub fn build_map_figure(
    stations: &[StationRecord],
    selected: Option<&str>,
    layout: &MapLayout,
) -> MapFigure {
    let mut default_points = Vec::with_capacity(stations.len());
    let mut selected_points = Vec::new();
    let mut unplotted = 0usize;

    let styles = style_rows(stations, selected);
    for (station, style) in stations.iter().zip(styles) {
        let Some((lat, lon)) = station.coordinates() else {
            unplotted += 1;
            continue;
        };
        let point = MapPoint {
            id: station.id.clone(),
            hover_name: station.operator.clone(),
            lat,
            lon,
            size: style.size,
            opacity: style.opacity,
        };
        match style.class {
            MarkerClass::Default => default_points.push(point),
            MarkerClass::Selected => selected_points.push(point),
        }
    }

    if unplotted > 0 {
        log::warn!("[EVC] figure: {} stations have no coordinates", unplotted);
    }

    let traces = [
        (MarkerClass::Default, default_points),
        (MarkerClass::Selected, selected_points),
    ]
    .into_iter()
    .filter(|(_, points)| !points.is_empty())
    .map(|(class, points)| MapTrace {
        name: class.key().to_string(),
        color: class.color().to_string(),
        points,
    })
    .collect();

    MapFigure {
        layout: layout.clone(),
        traces,
    }
}
