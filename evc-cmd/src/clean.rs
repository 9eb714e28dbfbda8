//! Conversion of the charging-point register export into the cleaned CSV.
//!
//! The register is published as a `;`-separated file with a few lines of
//! preamble before the header row. Coordinates use a decimal comma. The
//! cleaned CSV keeps one row per charging location with the columns the
//! dashboard reads:
//!
//! `id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude`

use log::{info, warn};
use std::collections::HashSet;

/// Columns of the cleaned station CSV, in output order.
pub const CLEANED_HEADER: [&str; 8] = [
    "id",
    "operator",
    "state",
    "postal_code",
    "loading_spots",
    "payment_systems",
    "latitude",
    "longitude",
];

const COL_ID: &str = "Ladeeinrichtungs-ID";
const COL_OPERATOR: &str = "Betreiber";
const COL_STATE: &str = "Bundesland";
const COL_POSTAL_CODE: &str = "Postleitzahl";
const COL_LOADING_SPOTS: &str = "Anzahl Ladepunkte";
const COL_PAYMENT: &str = "Bezahlsysteme";
const COL_LATITUDE: &str = "Breitengrad";
const COL_LONGITUDE: &str = "Längengrad";

/// Outcome of a cleaning run.
#[derive(Debug)]
pub struct CleanReport {
    /// The cleaned CSV, header included.
    pub csv: String,
    pub kept: usize,
    /// Rows dropped for missing or invalid coordinates.
    pub dropped: usize,
}

/// Parse a coordinate written with either a decimal comma or point.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Decode a raw export: UTF-8 when valid, Windows-1252 otherwise.
pub fn decode_register(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!("Register export is not valid UTF-8, decoding as Windows-1252");
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

/// Generated id for a row with an empty id cell, unique within `taken`.
fn unique_row_id(row: usize, taken: &mut HashSet<String>) -> String {
    let base = format!("row-{}", row);
    let mut candidate = base.clone();
    let mut n = 1;
    while taken.contains(&candidate) {
        n += 1;
        candidate = format!("{}-{}", base, n);
    }
    taken.insert(candidate.clone());
    candidate
}

/// Byte offset of the header line: the first line naming the operator column.
fn header_offset(raw: &str) -> Option<usize> {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if line.contains(COL_OPERATOR) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Clean a raw register export held in memory.
pub fn clean_register(raw: &str) -> anyhow::Result<CleanReport> {
    let raw = raw.trim_start_matches('\u{feff}');
    let start = header_offset(raw)
        .ok_or_else(|| anyhow::anyhow!("no header line containing '{}' found", COL_OPERATOR))?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(raw[start..].as_bytes());

    let headers = rdr.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| anyhow::anyhow!("register export has no '{}' column", name))
    };

    let id_col = find(COL_ID);
    let operator_col = require(COL_OPERATOR)?;
    let lat_col = require(COL_LATITUDE)?;
    let lon_col = require(COL_LONGITUDE)?;
    let state_col = find(COL_STATE);
    let postal_col = find(COL_POSTAL_CODE);
    let spots_col = find(COL_LOADING_SPOTS);
    let payment_col = find(COL_PAYMENT);

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CLEANED_HEADER)?;

    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    let mut taken: HashSet<String> = match id_col {
        Some(i) => records
            .iter()
            .filter_map(|r| r.get(i))
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect(),
        None => HashSet::new(),
    };

    let mut kept = 0usize;
    let mut dropped = 0usize;
    for (row, record) in records.iter().enumerate() {
        let get = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();

        let (Some(lat), Some(lon)) = (
            parse_coordinate(get(Some(lat_col))),
            parse_coordinate(get(Some(lon_col))),
        ) else {
            dropped += 1;
            continue;
        };

        let id = match (id_col, get(id_col)) {
            (None, _) => (row + 1).to_string(),
            (Some(_), "") => unique_row_id(row + 1, &mut taken),
            (Some(_), id) => id.to_string(),
        };
        let loading_spots = get(spots_col)
            .parse::<u32>()
            .map(|n| n.to_string())
            .unwrap_or_default();

        wtr.write_record([
            id.as_str(),
            get(Some(operator_col)),
            get(state_col),
            get(postal_col),
            loading_spots.as_str(),
            get(payment_col),
            lat.to_string().as_str(),
            lon.to_string().as_str(),
        ])?;
        kept += 1;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush cleaned CSV: {}", e.error()))?;
    let csv = String::from_utf8(bytes)?;
    info!("Cleaned register: kept {} stations", kept);
    if dropped > 0 {
        warn!("Dropped {} rows without valid coordinates", dropped);
    }
    Ok(CleanReport { csv, kept, dropped })
}

/// Read a raw export from disk, clean it and write the result.
pub fn run_clean(input: &str, output: &str) -> anyhow::Result<()> {
    let raw = decode_register(&std::fs::read(input)?);
    let report = clean_register(&raw)?;
    std::fs::write(output, &report.csv)?;
    info!(
        "Wrote {} stations to {} ({} dropped)",
        report.kept, output, report.dropped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "\
Ladesäulenregister der Bundesnetzagentur
Stand: 01.10.2024
;;;
Ladeeinrichtungs-ID;Betreiber;Status;Postleitzahl;Ort;Bundesland;Breitengrad;Längengrad;Anzahl Ladepunkte;Bezahlsysteme
4711;EnBW mobility+ AG und Co.KG;In Betrieb;70173;Stuttgart;Baden-Württemberg;48,7784;9,1800;2;Kreditkarte, App
;Leipziger Stadtwerke;In Betrieb;04109;Leipzig;Sachsen;51,3397;12,3731;4;RFID-Karte
4713;Kaputt GmbH;In Betrieb;10115;Berlin;Berlin;;13,38;2;
";

    #[test]
    fn parse_coordinate_accepts_comma_and_point() {
        assert_eq!(parse_coordinate("48,7784"), Some(48.7784));
        assert_eq!(parse_coordinate(" 9.18 "), Some(9.18));
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("n/a"), None);
    }

    #[test]
    fn clean_register_skips_preamble_and_maps_columns() {
        let report = clean_register(RAW).unwrap();
        assert_eq!(report.kept, 2);
        assert_eq!(report.dropped, 1);

        let mut rdr = csv::Reader::from_reader(report.csv.as_bytes());
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, CLEANED_HEADER);

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "4711");
        assert_eq!(&rows[0][1], "EnBW mobility+ AG und Co.KG");
        assert_eq!(&rows[0][2], "Baden-Württemberg");
        assert_eq!(&rows[0][3], "70173");
        assert_eq!(&rows[0][4], "2");
        assert_eq!(&rows[0][5], "Kreditkarte, App");
        assert_eq!(&rows[0][6], "48.7784");
        assert_eq!(&rows[0][7], "9.18");
    }

    fn cleaned_ids(csv: &str) -> Vec<String> {
        csv::Reader::from_reader(csv.as_bytes())
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect()
    }

    #[test]
    fn clean_register_names_rows_without_id() {
        let report = clean_register(RAW).unwrap();
        let mut rdr = csv::Reader::from_reader(report.csv.as_bytes());
        let second = rdr.records().nth(1).unwrap().unwrap();
        assert_eq!(&second[0], "row-2", "Empty id falls back to the data row number");
        assert_eq!(&second[3], "04109");
    }

    #[test]
    fn generated_ids_never_collide_with_real_ids() {
        let raw = "\
Ladeeinrichtungs-ID;Betreiber;Breitengrad;Längengrad
2;Allego;52,5;13,4
;Mainova;50,1;8,6
row-2;Ionity;48,1;11,5
";
        let report = clean_register(raw).unwrap();
        assert_eq!(cleaned_ids(&report.csv), ["2", "row-2-2", "row-2"]);

        let db = evc_db::Database::new().unwrap();
        db.load_stations(&report.csv).unwrap();
        let stations = db.query_map_stations().unwrap();
        let fig = evc_data::figure::build_map_figure(
            &stations,
            Some("2"),
            &evc_data::figure::MapLayout::default(),
        );
        let selected = fig.trace(evc_data::style::MarkerClass::Selected).unwrap();
        assert_eq!(selected.points.len(), 1);
        assert_eq!(selected.points[0].hover_name, "Allego");
    }

    #[test]
    fn missing_id_column_numbers_rows() {
        let raw = "Betreiber;Breitengrad;Längengrad\nAllego;52,5;13,4\nMainova;50,1;8,6\n";
        let report = clean_register(raw).unwrap();
        assert_eq!(cleaned_ids(&report.csv), ["1", "2"]);
    }

    #[test]
    fn decode_register_keeps_utf8() {
        let raw = "Betreiber;Bundesland\nEnBW;Baden-Württemberg\n";
        assert_eq!(decode_register(raw.as_bytes()), raw);
    }

    #[test]
    fn windows_1252_export_is_cleaned() {
        let raw: &[u8] = b"Ladeeinrichtungs-ID;Betreiber;Bundesland;Breitengrad;L\xE4ngengrad\n\
7;Stadtwerke M\xFCnchen;Baden-W\xFCrttemberg;48,1;11,5\n";
        let report = clean_register(&decode_register(raw)).unwrap();
        assert_eq!(report.kept, 1);

        let mut rdr = csv::Reader::from_reader(report.csv.as_bytes());
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "7");
        assert_eq!(&row[1], "Stadtwerke München");
        assert_eq!(&row[2], "Baden-Württemberg");
    }

    #[test]
    fn cleaned_output_loads_into_the_store() {
        let report = clean_register(RAW).unwrap();
        let db = evc_db::Database::new().unwrap();
        assert_eq!(db.load_stations(&report.csv).unwrap(), 2);
        let station = db.query_station("4711").unwrap().unwrap();
        assert_eq!(station.loading_spots, Some(2));
    }

    #[test]
    fn clean_register_without_header_fails() {
        assert!(clean_register("just;some;data\n1;2;3\n").is_err());
    }

    #[test]
    fn clean_register_requires_coordinates() {
        let raw = "Betreiber;Bundesland\nEnBW;Bayern\n";
        let err = clean_register(raw).unwrap_err();
        assert!(err.to_string().contains("Breitengrad"));
    }
}
