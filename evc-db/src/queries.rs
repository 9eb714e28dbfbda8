//! Typed query methods over the station table.
//!
//! Every query that returns rows orders them by `rowid`, i.e. the order in
//! which they appeared in the source CSV.

use crate::models::{StateCount, StationRecord};
use crate::Database;
use rusqlite::{params, OptionalExtension, Row};

const STATION_COLUMNS: &str =
    "id, operator, state, postal_code, loading_spots, payment_systems, latitude, longitude";

fn station_from_row(row: &Row<'_>) -> rusqlite::Result<StationRecord> {
    Ok(StationRecord {
        id: row.get(0)?,
        operator: row.get(1)?,
        state: row.get(2)?,
        postal_code: row.get(3)?,
        loading_spots: row.get(4)?,
        payment_systems: row.get(5)?,
        latitude: row.get(6)?,
        longitude: row.get(7)?,
    })
}

impl Database {
    /// Get every station record in load order.
    pub fn query_stations(&self) -> anyhow::Result<Vec<StationRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {STATION_COLUMNS} FROM stations ORDER BY rowid"
        ))?;
        let rows = stmt
            .query_map([], station_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[EVC] query: query_stations returned {} records", rows.len());
        Ok(rows)
    }

    /// Get the stations that can be plotted, i.e. that have both coordinates.
    pub fn query_map_stations(&self) -> anyhow::Result<Vec<StationRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {STATION_COLUMNS} FROM stations
             WHERE latitude IS NOT NULL AND longitude IS NOT NULL
             ORDER BY rowid"
        ))?;
        let rows = stmt
            .query_map([], station_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[EVC] query: query_map_stations returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Look up a station by id.
    ///
    /// When the id occurs more than once, the first row in load order wins.
    pub fn query_station(&self, id: &str) -> anyhow::Result<Option<StationRecord>> {
        let conn = self.conn.borrow();
        let station = conn
            .query_row(
                &format!(
                    "SELECT {STATION_COLUMNS} FROM stations
                     WHERE id = ?1 ORDER BY rowid LIMIT 1"
                ),
                params![id],
                station_from_row,
            )
            .optional()?;
        if station.is_none() {
            log::warn!("[EVC] query: no station with id {}", id);
        }
        Ok(station)
    }

    /// Count stations per federal state.
    ///
    /// Ordered by count descending; ties are broken alphabetically so the
    /// table is stable between runs. Rows without a state are left out.
    pub fn query_state_counts(&self) -> anyhow::Result<Vec<StateCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, COUNT(*) AS stations
             FROM stations
             WHERE state <> ''
             GROUP BY state
             ORDER BY stations DESC, state ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StateCount {
                    state: row.get(0)?,
                    stations: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[EVC] query: query_state_counts returned {} states",
            rows.len()
        );
        Ok(rows)
    }

    /// Total number of station rows.
    pub fn query_station_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM stations", [], |row| row.get(0))?;
        Ok(count)
    }
}
