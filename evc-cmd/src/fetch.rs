//! Download a charging-point register export and clean it.

use crate::clean::{clean_register, decode_register};
use log::info;

/// Fetch the raw export at `url`, clean it and write the cleaned CSV.
///
/// The register is large (tens of MB), so the timeout is generous.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()?;

    info!("Fetching register export from {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("Bad response for {}: {}", url, response.status());
    }
    let bytes = response.bytes().await?;
    info!("Downloaded {} bytes", bytes.len());

    let raw = decode_register(&bytes);
    let report = clean_register(&raw)?;
    tokio::fs::write(output, report.csv.as_bytes()).await?;
    info!(
        "Wrote {} stations to {} ({} dropped)",
        report.kept, output, report.dropped
    );
    Ok(())
}
