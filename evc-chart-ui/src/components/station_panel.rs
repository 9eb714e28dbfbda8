//! "Selected station" detail panel.

use crate::components::DetailRow;
use crate::state::AppState;
use dioxus::prelude::*;
use evc_data::config::COLOR_ACCENT;
use evc_data::details::StationDetails;

/// Shows operator, state/postal code, loading spots and payment method of
/// the clicked station. All four values are empty until a station is clicked.
#[component]
pub fn StationPanel() -> Element {
    let state = use_context::<AppState>();
    let selected = (state.selected_station)();

    let station = match (&*state.db.read(), selected.as_deref()) {
        (Some(db), Some(id)) => db.query_station(id).unwrap_or_else(|e| {
            log::error!("Failed to look up station {}: {}", id, e);
            None
        }),
        _ => None,
    };
    let details = StationDetails::for_selection(selected.as_deref(), station.as_ref());

    rsx! {
        p {
            style: "font-size: 24px; font-weight: bold; color: {COLOR_ACCENT};",
            "Selected station"
        }
        DetailRow {
            label: "Operator:".to_string(),
            value_id: "operator-info".to_string(),
            value: details.operator,
        }
        DetailRow {
            label: "State / Postal code:".to_string(),
            value_id: "state-info".to_string(),
            value: details.state_postal,
        }
        DetailRow {
            label: "Loading spots:".to_string(),
            value_id: "loading-spots-info".to_string(),
            value: details.loading_spots,
        }
        DetailRow {
            label: "Payment method:".to_string(),
            value_id: "payment-method-info".to_string(),
            value: details.payment_method,
        }
    }
}
