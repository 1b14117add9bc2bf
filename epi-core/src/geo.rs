use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `/api/hongkong_geojson` document.
///
/// The document is handed to the chart library untouched, so it is kept as
/// raw JSON. Only the feature names are read on the Rust side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoJson(pub Value);

impl GeoJson {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// `properties.name` of every feature, in document order. Features
    /// without a string name are skipped.
    pub fn feature_names(&self) -> Vec<&str> {
        self.0
            .get("features")
            .and_then(Value::as_array)
            .map(|features| {
                features
                    .iter()
                    .filter_map(|f| f.get("properties")?.get("name")?.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
