//! `fetch` and `watch`: the dashboard cycle against the live API.

use crate::json_backend::JsonFileBackend;
use epi_charts::{fetch_and_render, CycleOutcome, Dashboard, MetricsPanel, MetricsView, Poller};
use epi_core::api::ApiClient;
use epi_core::config::DashboardConfig;
use log::info;
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

/// Logs the metric cards instead of showing them.
#[derive(Debug, Clone, Default)]
pub struct LogView;

impl MetricsView for LogView {
    fn show_metrics(&mut self, panel: MetricsPanel) {
        info!("{}", panel.update_time);
        for (id, label, value) in panel.cards() {
            info!("  {:<20} {} {}", id, label, value);
        }
    }
}

fn dashboard(config: &DashboardConfig, out_dir: &Path) -> anyhow::Result<Dashboard<JsonFileBackend>> {
    let backend = JsonFileBackend::new(out_dir)?;
    Ok(Dashboard::with_map_name(backend, &config.map_name))
}

/// One cycle. An error envelope from the API fails the command.
pub async fn run_fetch(base_url: &str, out_dir: &Path) -> anyhow::Result<()> {
    let config = DashboardConfig::with_api_base(base_url);
    let dashboard = RefCell::new(dashboard(&config, out_dir)?);
    let client = ApiClient::new(config);

    match fetch_and_render(1, &client, &dashboard, &mut LogView).await? {
        CycleOutcome::Rendered { .. } => {
            info!("Charts written to {}", out_dir.display());
            Ok(())
        }
        CycleOutcome::Aborted { reason, .. } => anyhow::bail!("API reported an error: {}", reason),
    }
}

/// Start a cycle every `interval_secs`, forever.
///
/// Cycles are spawned onto a `LocalSet` without waiting for the previous
/// one, matching the browser's timer.
pub async fn run_watch(base_url: &str, out_dir: &Path, interval_secs: u64) -> anyhow::Result<()> {
    let mut config = DashboardConfig::with_api_base(base_url);
    config.poll_interval = Duration::from_secs(interval_secs.max(1));
    let dashboard = dashboard(&config, out_dir)?;
    let interval = config.poll_interval;
    let poller = Poller::new(ApiClient::new(config), dashboard, LogView);

    info!(
        "Watching {} every {}s, writing to {}",
        base_url,
        interval.as_secs(),
        out_dir.display()
    );

    tokio::task::LocalSet::new()
        .run_until(poll_forever(poller, interval))
        .await
}

async fn poll_forever(
    poller: Poller<ApiClient, JsonFileBackend, LogView>,
    interval: Duration,
) -> anyhow::Result<()> {
    poller
        .run_forever(
            || tokio::time::sleep(interval),
            |cycle| {
                tokio::task::spawn_local(async move {
                    if let Some(CycleOutcome::Rendered { cycle }) = cycle.tick().await {
                        info!("Cycle {} written", cycle);
                    }
                });
            },
        )
        .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_fails_when_api_is_unreachable() {
        let out = std::env::temp_dir().join(format!("epi-cmd-fetch-{}", std::process::id()));
        let err = run_fetch("http://127.0.0.1:9", &out).await.unwrap_err();
        assert!(err.to_string().contains("HTTP request failed"), "got {}", err);
        assert!(!out.join("trendChart.json").exists());
        let _ = std::fs::remove_dir_all(&out);
    }
}
