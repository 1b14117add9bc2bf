//! Native HTTP client for the dashboard API.

use crate::config::DashboardConfig;
use crate::source::SnapshotSource;
use crate::{ApiResponse, DashboardError, GeoJson, Result};
use log::debug;
use reqwest::{Client, StatusCode};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: DashboardConfig,
}

impl ApiClient {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        // The statistics endpoint answers 500 with an `{"error": ...}` body,
        // so only bail here when the body cannot be the error envelope.
        let status = response.status();
        if status != StatusCode::OK && !status.is_server_error() {
            return Err(DashboardError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

impl SnapshotSource for ApiClient {
    async fn fetch_snapshot(&self) -> Result<ApiResponse> {
        let body = self.get_text(&self.config.data_url()).await?;
        ApiResponse::from_json(&body)
    }

    async fn fetch_geojson(&self) -> Result<GeoJson> {
        let body = self.get_text(&self.config.geojson_url()).await?;
        GeoJson::from_json(&body)
    }
}
