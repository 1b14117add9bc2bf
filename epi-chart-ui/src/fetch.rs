//! Browser HTTP source built on `gloo-net`.

use epi_core::config::DashboardConfig;
use epi_core::source::SnapshotSource;
use epi_core::{ApiResponse, DashboardError, GeoJson, Result};
use gloo_net::http::Request;
use log::debug;

/// Fetches both payloads from the configured API base.
#[derive(Debug, Clone)]
pub struct HttpSource {
    config: DashboardConfig,
}

impl HttpSource {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;
        // A 500 from the statistics endpoint still carries the error envelope.
        let status = response.status();
        if status != 200 && status < 500 {
            return Err(DashboardError::Status {
                status,
                url: url.to_string(),
            });
        }
        response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))
    }
}

impl SnapshotSource for HttpSource {
    async fn fetch_snapshot(&self) -> Result<ApiResponse> {
        let body = self.get_text(&self.config.data_url()).await?;
        ApiResponse::from_json(&body)
    }

    async fn fetch_geojson(&self) -> Result<GeoJson> {
        let body = self.get_text(&self.config.geojson_url()).await?;
        GeoJson::from_json(&body)
    }
}
