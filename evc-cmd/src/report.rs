//! Inspection commands over a cleaned station CSV.
//!
//! These print what the dashboard shows: the stations-by-state table, the
//! detail panel for one station, and the map figure JSON.

use evc_data::config::{COUNT_COLUMN_LABEL, STATE_COLUMN_LABEL};
use evc_data::details::StationDetails;
use evc_data::figure::{build_map_figure, MapLayout};
use evc_db::models::StateCount;
use evc_db::Database;
use log::info;

fn open_stations(stations_csv: &str) -> anyhow::Result<Database> {
    let csv_data = std::fs::read_to_string(stations_csv)?;
    let db = Database::new()?;
    db.load_stations(&csv_data)?;
    Ok(db)
}

/// Render state counts as a left-aligned two-column text table.
pub fn format_state_table(counts: &[StateCount]) -> String {
    let state_width = counts
        .iter()
        .map(|c| c.state.chars().count())
        .chain(std::iter::once(STATE_COLUMN_LABEL.len()))
        .max()
        .unwrap_or_default();

    let mut out = format!("{:<state_width$}  {}\n", STATE_COLUMN_LABEL, COUNT_COLUMN_LABEL);
    for c in counts {
        // pad by chars, not bytes, so umlauts line up
        let pad = state_width - c.state.chars().count();
        out.push_str(&format!("{}{}  {}\n", c.state, " ".repeat(pad), c.stations));
    }
    out
}

/// Render the four detail panel fields, one per line.
pub fn format_details(details: &StationDetails) -> String {
    format!(
        "Operator:             {}\nState / Postal code:  {}\nLoading spots:        {}\nPayment method:       {}\n",
        details.operator, details.state_postal, details.loading_spots, details.payment_method
    )
}

pub fn run_states(stations_csv: &str) -> anyhow::Result<()> {
    let db = open_stations(stations_csv)?;
    let counts = db.query_state_counts()?;
    print!("{}", format_state_table(&counts));
    Ok(())
}

pub fn run_station(stations_csv: &str, id: &str) -> anyhow::Result<()> {
    let db = open_stations(stations_csv)?;
    let station = db.query_station(id)?;
    if station.is_none() {
        anyhow::bail!("no station with id '{}' in {}", id, stations_csv);
    }
    let details = StationDetails::for_selection(Some(id), station.as_ref());
    print!("{}", format_details(&details));
    Ok(())
}

pub fn run_figure(stations_csv: &str, selected: Option<&str>, output: &str) -> anyhow::Result<()> {
    let db = open_stations(stations_csv)?;
    let stations = db.query_map_stations()?;
    let figure = build_map_figure(&stations, selected, &MapLayout::default());
    std::fs::write(output, serde_json::to_string_pretty(&figure)?)?;
    info!(
        "Wrote figure with {} points in {} traces to {}",
        figure.point_count(),
        figure.traces.len(),
        output
    );
    Ok(())
}
