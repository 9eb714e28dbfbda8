//! CSV loading for the station table.
//!
//! # CSV Format
//!
//! The cleaned station CSV has a header row. Columns are located by name, so
//! their order does not matter and extra columns are ignored:
//!
//! ```text
//! id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
//! 1,EnBW,Baden-Württemberg,70173,2,Kreditkarte,48.7758,9.1829
//! ```

use crate::Database;
use rusqlite::params;

/// Column positions resolved from the CSV header row.
struct Columns {
    id: usize,
    operator: Option<usize>,
    state: Option<usize>,
    postal_code: Option<usize>,
    loading_spots: Option<usize>,
    payment_systems: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let id = match find("id") {
            Some(idx) => idx,
            None => anyhow::bail!("station CSV has no 'id' column"),
        };
        Ok(Self {
            id,
            operator: find("operator"),
            state: find("state"),
            postal_code: find("postal_code"),
            loading_spots: find("loading_spots"),
            payment_systems: find("payment_systems"),
            latitude: find("latitude"),
            longitude: find("longitude"),
        })
    }
}

/// True for finite whole numbers that convert to `i64` exactly.
fn is_whole_i64(v: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound
    v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64
}

fn field<'r>(record: &'r csv::StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

impl Database {
    /// Load station records from a CSV string.
    ///
    /// Rows with an empty `id` are skipped. Non-numeric `loading_spots`,
    /// `latitude` or `longitude` values are stored as NULL. Duplicate ids
    /// are kept, in file order.
    ///
    /// Returns the number of rows inserted.
    pub fn load_stations(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let columns = Columns::from_headers(rdr.headers()?)?;

        let tx = conn.transaction()?;
        let mut count = 0usize;
        let mut skipped = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO stations
                 (id, operator, state, postal_code, loading_spots, payment_systems, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for result in rdr.records() {
                let r = result?;
                let id = field(&r, Some(columns.id));
                if id.is_empty() {
                    skipped += 1;
                    continue;
                }

                // integer columns with gaps are often exported as floats ("2.0")
                let loading_spots: Option<i64> = field(&r, columns.loading_spots)
                    .parse::<f64>()
                    .ok()
                    .filter(|v| is_whole_i64(*v))
                    .map(|v| v as i64);
                let latitude: Option<f64> = field(&r, columns.latitude)
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite());
                let longitude: Option<f64> = field(&r, columns.longitude)
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite());

                stmt.execute(params![
                    id,
                    field(&r, columns.operator),
                    field(&r, columns.state),
                    field(&r, columns.postal_code),
                    loading_spots,
                    field(&r, columns.payment_systems),
                    latitude,
                    longitude,
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[EVC] loader: Loaded {} stations", count);
        if skipped > 0 {
            log::warn!("[EVC] loader: Skipped {} rows without an id", skipped);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_stations_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
1,EnBW,Baden-Württemberg,70173,2,Kreditkarte,48.7758,9.1829
2,Stadtwerke Leipzig,Sachsen,04109,4,RFID-Karte,51.3397,12.3731
";
        let loaded = db.load_stations(csv).unwrap();
        assert_eq!(loaded, 2);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM stations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let postal: String = conn
            .query_row(
                "SELECT postal_code FROM stations WHERE id = '2'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(postal, "04109", "Leading zero must be preserved");
    }

    #[test]
    fn load_stations_finds_columns_by_name() {
        let db = Database::new().unwrap();
        let csv = "\
latitude,longitude,id,extra,state,operator
52.52,13.405,B1,ignored,Berlin,Allego
";
        db.load_stations(csv).unwrap();

        let station = db.query_station("B1").unwrap().unwrap();
        assert_eq!(station.operator, "Allego");
        assert_eq!(station.state, "Berlin");
        assert_eq!(station.postal_code, "");
        assert_eq!(station.loading_spots, None);
        assert_eq!(station.coordinates(), Some((52.52, 13.405)));
    }

    #[test]
    fn load_stations_skips_rows_without_id() {
        let db = Database::new().unwrap();
        let csv = "\
id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
1,EnBW,Baden-Württemberg,70173,2,Kreditkarte,48.7758,9.1829
,Orphan,Bayern,80331,1,,48.137,11.575
";
        assert_eq!(db.load_stations(csv).unwrap(), 1);
        assert_eq!(db.query_station_count().unwrap(), 1);
    }

    #[test]
    fn load_stations_stores_bad_numbers_as_null() {
        let db = Database::new().unwrap();
        let csv = "\
id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
7,Tesla,Bayern,80331,n/a,App,,11.575
8,Ionity,Hessen,60311,6.0,App,50.11,8.68
";
        db.load_stations(csv).unwrap();

        let seven = db.query_station("7").unwrap().unwrap();
        assert_eq!(seven.loading_spots, None);
        assert_eq!(seven.latitude, None);
        assert_eq!(seven.longitude, Some(11.575));

        let eight = db.query_station("8").unwrap().unwrap();
        assert_eq!(eight.loading_spots, Some(6), "Float-formatted integers should load");
    }

    #[test]
    fn load_stations_rejects_fractional_and_huge_spot_counts() {
        let db = Database::new().unwrap();
        let csv = "\
id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
1,EnBW,Bayern,80331,2.7,App,48.13,11.57
2,EnBW,Bayern,80331,1e30,App,48.14,11.58
3,EnBW,Bayern,80331,-0.0,App,48.15,11.59
";
        db.load_stations(csv).unwrap();
        assert_eq!(db.query_station("1").unwrap().unwrap().loading_spots, None);
        assert_eq!(db.query_station("2").unwrap().unwrap().loading_spots, None);
        assert_eq!(db.query_station("3").unwrap().unwrap().loading_spots, Some(0));
    }

    #[test]
    fn load_stations_keeps_duplicate_ids() {
        let db = Database::new().unwrap();
        let csv = "\
id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude
5,First,Berlin,10115,1,,52.53,13.38
5,Second,Berlin,10115,1,,52.54,13.39
";
        assert_eq!(db.load_stations(csv).unwrap(), 2);
        assert_eq!(db.query_station_count().unwrap(), 2);
    }

    #[test]
    fn load_stations_requires_id_column() {
        let db = Database::new().unwrap();
        let csv = "\
operator,state
EnBW,Baden-Württemberg
";
        let err = db.load_stations(csv).unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }
}
