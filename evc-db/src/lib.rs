//! In-memory SQLite store for EV charging station records.
//!
//! The dashboard loads one cleaned CSV of charging stations into an
//! in-memory SQLite database and reads it back through typed query methods.
//! Results are serializable structs that get passed to D3.js as JSON by the
//! Dioxus WASM frontend.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data embedded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning [`models`] structs
//!
//! # Usage
//!
//! ```rust
//! use evc_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_stations("\
//! id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
//! 1,EnBW,Baden-Württemberg,70173,2,Kreditkarte,48.7758,9.1829
//! ").unwrap();
//!
//! let counts = db.query_state_counts().unwrap();
//! assert_eq!(counts[0].stations, 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. There is a single `stations` table; the
//! per-state aggregate is derived on the fly with `GROUP BY state`.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding charging station records.
///
/// Cheaply cloneable (via `Rc`) so it can be shared across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_stations`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
