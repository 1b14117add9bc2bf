//! Compiled-in dashboard settings.

use std::time::Duration;

/// Date format used by the API and for chart category labels: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Statistics endpoint, relative to the API base.
pub const DATA_PATH: &str = "/api/data";

/// Geography endpoint, relative to the API base.
pub const GEOJSON_PATH: &str = "/api/hongkong_geojson";

/// Name the geography is registered under in the chart library.
pub const MAP_NAME: &str = "HK";

/// Interval between fetch-and-render cycles.
pub const POLL_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Scheme and host prepended to the endpoint paths. Empty means same origin.
    pub api_base: String,
    pub poll_interval: Duration,
    pub map_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS as u64),
            map_name: MAP_NAME.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn data_url(&self) -> String {
        self.url(DATA_PATH)
    }

    pub fn geojson_url(&self) -> String {
        self.url(GEOJSON_PATH)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_url(), "/api/data");
        assert_eq!(config.geojson_url(), "/api/hongkong_geojson");
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let config = DashboardConfig::with_api_base("http://localhost:5000/");
        assert_eq!(config.data_url(), "http://localhost:5000/api/data");
    }
}
