//! Text fields of the "Selected station" panel.

use evc_db::models::StationRecord;

/// The four strings shown next to the panel labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDetails {
    pub operator: String,
    /// `"{state}/{postal_code}"`.
    pub state_postal: String,
    pub loading_spots: String,
    pub payment_method: String,
}

impl StationDetails {
    /// Details for one station. Missing values render as empty text.
    pub fn from_station(station: &StationRecord) -> Self {
        Self {
            operator: station.operator.clone(),
            state_postal: format!("{}/{}", station.state, station.postal_code),
            loading_spots: station
                .loading_spots
                .map(|n| n.to_string())
                .unwrap_or_default(),
            payment_method: station.payment_systems.clone(),
        }
    }

    /// Details for the current selection.
    ///
    /// `station` is the lookup result for the selected id. Both "nothing
    /// selected" and "selected id not found" yield four empty fields.
    pub fn for_selection(selected: Option<&str>, station: Option<&StationRecord>) -> Self {
        match (selected, station) {
            (Some(id), Some(station)) if station.id == id => Self::from_station(station),
            (Some(id), _) => {
                log::warn!("[EVC] details: selected station {} not found", id);
                Self::default()
            }
            (None, _) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leipzig() -> StationRecord {
        StationRecord {
            id: "2".to_string(),
            operator: "Stadtwerke Leipzig".to_string(),
            state: "Sachsen".to_string(),
            postal_code: "04109".to_string(),
            loading_spots: Some(4),
            payment_systems: "RFID-Karte, App".to_string(),
            latitude: Some(51.34),
            longitude: Some(12.37),
        }
    }

    #[test]
    fn nothing_selected_gives_empty_fields() {
        let details = StationDetails::for_selection(None, None);
        assert!(details.is_empty());
        assert_eq!(details.operator, "");
        assert_eq!(details.state_postal, "");
    }

    #[test]
    fn selected_station_fills_all_fields() {
        let station = leipzig();
        let details = StationDetails::for_selection(Some("2"), Some(&station));
        assert_eq!(details.operator, "Stadtwerke Leipzig");
        assert_eq!(details.state_postal, "Sachsen/04109");
        assert_eq!(details.loading_spots, "4");
        assert_eq!(details.payment_method, "RFID-Karte, App");
    }

    #[test]
    fn unknown_selection_gives_empty_fields() {
        assert!(StationDetails::for_selection(Some("99"), None).is_empty());
    }

    #[test]
    fn mismatched_lookup_is_ignored() {
        let station = leipzig();
        assert!(StationDetails::for_selection(Some("3"), Some(&station)).is_empty());
    }

    #[test]
    fn missing_values_render_empty() {
        let mut station = leipzig();
        station.loading_spots = None;
        station.payment_systems = String::new();
        station.postal_code = String::new();
        let details = StationDetails::from_station(&station);
        assert_eq!(details.loading_spots, "");
        assert_eq!(details.payment_method, "");
        assert_eq!(details.state_postal, "Sachsen/");
    }
}
