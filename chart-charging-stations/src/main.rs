//! Charging Stations in Germany
//!
//! A single-page dashboard: a scatter map of EV charging stations, a panel
//! with details of the clicked station, and a paged table of station counts
//! per federal state.
//!
//! Data flow:
//! 1. `build.rs` copies `stations_cleaned.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    per-state counts are derived with `GROUP BY state`.
//! 4. A click on a marker sets `selected_station`; the map effect rebuilds
//!    the figure with the clicked marker highlighted and `StationPanel`
//!    re-renders the four detail fields.
//!
//! Serve locally with `dx serve --port 8051`.

use dioxus::prelude::*;
use evc_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, StationPanel,
};
use evc_chart_ui::js_bridge;
use evc_chart_ui::state::AppState;
use evc_data::config::{
    COLOR_BACKGROUND, COLOR_HEADER_TEXT, COLOR_HIGHLIGHT, COLOR_TEXT, COLOR_TITLE,
    COUNT_COLUMN_LABEL, PAGE_SIZE, STATE_COLUMN_LABEL,
};
use evc_data::figure::{build_map_figure, MapLayout};
use evc_data::selection;
use evc_db::models::{StateCount, StationRecord};
use evc_db::Database;

/// Cleaned station dataset.
const STATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/stations_cleaned.csv"));

/// DOM element IDs used by D3.js to render into.
const MAP_ID: &str = "map_german";
const TABLE_ID: &str = "stations-by-state-table";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("charging-stations-root"))
        .launch(App);
}

/// Everything derived from the CSV at startup.
struct LoadedData {
    db: Database,
    stations: Vec<StationRecord>,
    state_counts: Vec<StateCount>,
}

fn load_data(csv_data: &str) -> anyhow::Result<LoadedData> {
    let db = Database::new()?;
    let loaded = db.load_stations(csv_data)?;
    if loaded == 0 {
        log::warn!("Station dataset is empty; showing an empty dashboard");
    }
    let stations = db.query_map_stations()?;
    let state_counts = db.query_state_counts()?;
    Ok(LoadedData {
        db,
        stations,
        state_counts,
    })
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Route map clicks into the selection; clicks that miss a marker never
    // reach Rust, so the selection only ever moves to another station.
    use_hook(move || {
        js_bridge::register_click_handler(move |payload: String| {
            if let Some(id) = selection::selected_id(&payload) {
                log::info!("Selected station {}", id);
                state.selected_station.set(Some(id));
            }
        });
    });

    // Load the dataset on mount
    use_effect(move || match load_data(STATIONS_CSV) {
        Ok(data) => {
            log::info!(
                "Loaded {} plottable stations across {} states",
                data.stations.len(),
                data.state_counts.len()
            );
            state.stations.set(data.stations);
            state.state_counts.set(data.state_counts);
            state.db.set(Some(data.db));
            state.loading.set(false);
        }
        Err(e) => {
            log::error!("Failed to load station data: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load station data: {}", e)));
            state.loading.set(false);
        }
    });

    // Re-render the map whenever the selection changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let selected = (state.selected_station)();

        js_bridge::init_charts();

        let figure = build_map_figure(
            &state.stations.read(),
            selected.as_deref(),
            &MapLayout::default(),
        );
        match figure.to_json() {
            Ok(json) => js_bridge::render_station_map(MAP_ID, &json),
            Err(e) => log::error!("Failed to serialize map figure: {}", e),
        }
    });

    // Render the stations-by-state table once the data is in
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        js_bridge::init_charts();

        let data_json = match serde_json::to_string(&*state.state_counts.read()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize state counts: {}", e);
                return;
            }
        };
        let config_json = serde_json::json!({
            "columns": [
                {"key": "state", "label": STATE_COLUMN_LABEL},
                {"key": "stations", "label": COUNT_COLUMN_LABEL},
            ],
            "pageSize": PAGE_SIZE,
            "style": {
                "tableWidth": "80%",
                "border": format!("1px solid {}", COLOR_TEXT),
                "cellColor": COLOR_TEXT,
                "cellFontSize": "18px",
                "headerBackground": COLOR_HIGHLIGHT,
                "headerColor": COLOR_HEADER_TEXT,
            },
        })
        .to_string();

        js_bridge::render_data_table(TABLE_ID, &data_json, &config_json);
    });

    rsx! {
        div {
            style: "background-color: {COLOR_BACKGROUND}; min-height: 100vh; padding: 20px;",

            h1 {
                style: "text-align: center; color: {COLOR_TITLE};",
                "Charging Stations in Germany"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-direction: row;",

                    // Map
                    div {
                        style: "width: 60%; padding: 10px;",
                        ChartContainer {
                            id: MAP_ID.to_string(),
                            loading: false,
                            min_height: 800,
                        }
                    }

                    // Station details and per-state table
                    div {
                        style: "width: 40%; padding: 10px;",
                        StationPanel {}
                        div {
                            style: "padding: 10px;",
                            ChartHeader {
                                title: "Charging stations by state".to_string(),
                            }
                            ChartContainer {
                                id: TABLE_ID.to_string(),
                                loading: false,
                                min_height: 200,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_data_derives_map_rows_and_counts() {
        let csv = "\
id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
1,EnBW,Baden-Württemberg,70173,2,Kreditkarte,48.7758,9.1829
2,Ionity,Bayern,90402,8,Kreditkarte,,
3,Tesla,Bayern,86150,12,App,48.3705,10.8978
";
        let data = load_data(csv).unwrap();
        assert_eq!(data.stations.len(), 2);
        assert_eq!(data.state_counts[0].state, "Bayern");
        assert_eq!(data.state_counts[0].stations, 2);
        assert_eq!(data.db.query_station_count().unwrap(), 3);
    }

    #[test]
    fn load_data_accepts_header_only_dataset() {
        let csv = "id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude\n";
        let data = load_data(csv).unwrap();
        assert!(data.stations.is_empty());
        assert!(data.state_counts.is_empty());
        assert_eq!(data.db.query_station_count().unwrap(), 0);
    }

    #[test]
    fn embedded_fixture_loads() {
        // The placeholder written when the fixture is missing is header-only.
        let data = load_data(STATIONS_CSV).unwrap();
        if STATIONS_CSV.lines().count() > 1 {
            assert!(!data.state_counts.is_empty());
        }
    }
}
