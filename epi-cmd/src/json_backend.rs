//! A chart backend that writes option documents to files.

use epi_charts::{ChartBackend, ChartHandle};
use epi_core::{DashboardError, GeoJson, Result};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Each chart becomes `<out_dir>/<mount id>.json`, the geography
/// `<out_dir>/<map name>.geo.json`.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    out_dir: PathBuf,
}

impl JsonFileBackend {
    /// Creates `out_dir` if needed.
    pub fn new(out_dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(out_dir)?;
        Ok(Self {
            out_dir: out_dir.to_path_buf(),
        })
    }

    pub fn chart_path(&self, mount_id: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", mount_id))
    }

    pub fn geo_path(&self, map_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.geo.json", map_name))
    }
}

fn write_json(path: &Path, value: &Value, label: &str) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).map_err(|e| DashboardError::render(label, e.to_string()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

pub struct JsonChart {
    mount_id: String,
    path: PathBuf,
}

impl ChartHandle for JsonChart {
    fn set_option(&mut self, option: &Value) -> Result<()> {
        write_json(&self.path, option, &self.mount_id)
    }

    // Files have no layout.
    fn resize(&mut self) {}

    fn dispose(&mut self) {}
}

impl ChartBackend for JsonFileBackend {
    type Handle = JsonChart;

    fn init(&self, mount_id: &str) -> Result<JsonChart> {
        Ok(JsonChart {
            mount_id: mount_id.to_string(),
            path: self.chart_path(mount_id),
        })
    }

    fn register_map(&self, map_name: &str, geo: &GeoJson) -> Result<()> {
        write_json(&self.geo_path(map_name), geo.as_value(), map_name)
    }
}
