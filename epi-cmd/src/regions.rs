//! `regions`: the risk table for the latest snapshot.

use epi_core::api::ApiClient;
use epi_core::config::DashboardConfig;
use epi_core::district::to_canonical;
use epi_core::format::format_number;
use epi_core::source::SnapshotSource;
use epi_data::risk::{classify_regions, RegionRisk};
use log::info;

pub async fn run_regions(base_url: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(DashboardConfig::with_api_base(base_url));
    let snapshot = client.fetch_snapshot().await?.into_snapshot()?;
    let rows = classify_regions(&snapshot.regional_data);
    info!("{} regions as of {}", rows.len(), snapshot.latest_stats.latest_date);

    for row in &rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

fn format_row(row: &RegionRisk) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        row.region,
        to_canonical(&row.region),
        format_number(row.confirmed),
        row.tier.label
    )
}
