//! SQL schema for the in-memory station database.

/// Returns the full SQL schema as a single batch string.
///
/// `stations` is a rowid table without a unique key on `id`: duplicate ids
/// in the source CSV are kept as separate rows, and `rowid` preserves the
/// order in which rows were loaded.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        id TEXT NOT NULL,
        operator TEXT NOT NULL,
        state TEXT NOT NULL,
        postal_code TEXT NOT NULL,
        loading_spots INTEGER,
        payment_systems TEXT NOT NULL,
        latitude REAL,
        longitude REAL
    );
    CREATE INDEX IF NOT EXISTS idx_stations_id ON stations(id);
    CREATE INDEX IF NOT EXISTS idx_stations_state ON stations(state);
    "#
}
