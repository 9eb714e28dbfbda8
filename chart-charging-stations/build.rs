//! Build script for chart-charging-stations.
//!
//! Copies the cleaned station CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. A missing fixture is replaced by a
//! header-only placeholder; a fixture without an `id` column fails the build.

use std::env;
use std::fs;
use std::path::Path;

const HEADER: &str =
    "id,operator,state,postal_code,loading_spots,payment_systems,latitude,longitude\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let src_path = "../fixtures/stations_cleaned.csv";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("stations_cleaned.csv");

    if src.exists() {
        let mut rdr = csv::Reader::from_path(src)
            .unwrap_or_else(|e| panic!("Failed to open {}: {}", src_path, e));
        let headers = rdr
            .headers()
            .unwrap_or_else(|e| panic!("Failed to read header of {}: {}", src_path, e));
        if !headers.iter().any(|h| h.trim() == "id") {
            panic!("{} has no 'id' column", src_path);
        }
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, HEADER).unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
