//! Per-row marker styling.
//!
//! Every row gets a color class, a size and an opacity. All rows share the
//! default style except those whose id equals the selected id.

use crate::config::{COLOR_ACCENT, COLOR_HIGHLIGHT};
use evc_db::models::StationRecord;
use serde::Serialize;

/// The two marker classes drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerClass {
    Default,
    Selected,
}

impl MarkerClass {
    /// Category key used as the trace name.
    pub fn key(self) -> &'static str {
        match self {
            MarkerClass::Default => "blue",
            MarkerClass::Selected => "violet",
        }
    }

    /// Rendered fill color.
    pub fn color(self) -> &'static str {
        match self {
            MarkerClass::Default => COLOR_HIGHLIGHT,
            MarkerClass::Selected => COLOR_ACCENT,
        }
    }

    pub fn style(self) -> MarkerStyle {
        match self {
            MarkerClass::Default => MarkerStyle {
                class: self,
                size: 7.0,
                opacity: 0.5,
            },
            MarkerClass::Selected => MarkerStyle {
                class: self,
                size: 16.0,
                opacity: 1.0,
            },
        }
    }
}

/// Derived display columns for one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub class: MarkerClass,
    pub size: f64,
    pub opacity: f64,
}

/// Style a single row against the current selection.
pub fn style_for(station: &StationRecord, selected: Option<&str>) -> MarkerStyle {
    match selected {
        Some(id) if station.id == id => MarkerClass::Selected.style(),
        _ => MarkerClass::Default.style(),
    }
}

/// Recompute the color, size and opacity columns for the whole dataset.
///
/// The result is parallel to `stations`.
pub fn style_rows(stations: &[StationRecord], selected: Option<&str>) -> Vec<MarkerStyle> {
    stations.iter().map(|s| style_for(s, selected)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str) -> StationRecord {
        StationRecord {
            id: id.to_string(),
            operator: "EnBW".to_string(),
            state: "Baden-Württemberg".to_string(),
            postal_code: "70173".to_string(),
            loading_spots: Some(2),
            payment_systems: String::new(),
            latitude: Some(48.8),
            longitude: Some(9.2),
        }
    }

    #[test]
    fn no_selection_styles_everything_default() {
        let rows = vec![station("1"), station("2")];
        let styles = style_rows(&rows, None);
        assert!(styles.iter().all(|s| *s == MarkerClass::Default.style()));
    }

    #[test]
    fn selected_row_is_highlighted() {
        let rows = vec![station("1"), station("2"), station("3")];
        let styles = style_rows(&rows, Some("2"));
        assert_eq!(styles[0].class, MarkerClass::Default);
        assert_eq!(styles[1].class, MarkerClass::Selected);
        assert_eq!(styles[1].size, 16.0);
        assert_eq!(styles[1].opacity, 1.0);
        assert_eq!(styles[2].class, MarkerClass::Default);
        assert_eq!(styles[2].size, 7.0);
        assert_eq!(styles[2].opacity, 0.5);
    }

    #[test]
    fn unknown_selection_styles_everything_default() {
        let rows = vec![station("1"), station("2")];
        let styles = style_rows(&rows, Some("42"));
        assert!(styles.iter().all(|s| s.class == MarkerClass::Default));
    }

    #[test]
    fn duplicate_ids_are_all_highlighted() {
        let rows = vec![station("5"), station("6"), station("5")];
        let selected: Vec<bool> = style_rows(&rows, Some("5"))
            .iter()
            .map(|s| s.class == MarkerClass::Selected)
            .collect();
        assert_eq!(selected, [true, false, true]);
    }

    #[test]
    fn class_keys_and_colors() {
        assert_eq!(MarkerClass::Default.key(), "blue");
        assert_eq!(MarkerClass::Default.color(), "#e0ba3b");
        assert_eq!(MarkerClass::Selected.key(), "violet");
        assert_eq!(MarkerClass::Selected.color(), "#82358b");
    }
}
