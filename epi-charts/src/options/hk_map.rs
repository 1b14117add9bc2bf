//! Choropleth of cumulative confirmed cases per district.
//!
//! Regions are matched to geography features by their English name, while
//! labels and tooltips show the Chinese name.

use crate::theme;
use epi_core::format::format_number;
use epi_core::{EpidemicSnapshot, GeoJson};
use epi_data::choropleth::{self, MapEntry};
use serde_json::{json, Value};

pub const SERIES_NAME: &str = "香港疫情地图";
pub const NO_DATA: &str = "暂无数据";

pub fn entry_tooltip(entry: &MapEntry) -> String {
    match entry.value {
        Some(value) if entry.has_data() => {
            format!("{}<br/>累计确诊: {}", entry.local_name, format_number(value))
        }
        _ => format!("{}<br/>{}", entry.local_name, NO_DATA),
    }
}

pub fn option(geo: &GeoJson, snapshot: &EpidemicSnapshot, map_name: &str) -> Value {
    let regional = &snapshot.regional_data;
    let entries = choropleth::entries(regional, &geo.feature_names());

    let data: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let mut item = json!({
                "name": entry.name,
                "tooltip": { "formatter": entry_tooltip(entry) },
                "label": { "formatter": entry.local_name },
                "emphasis": { "label": { "formatter": entry.local_name } },
            });
            if let Some(value) = entry.value {
                item["value"] = json!(value);
            }
            item
        })
        .collect();

    json!({
        "tooltip": theme::tooltip("item"),
        "visualMap": {
            "min": 0,
            "max": regional.max_confirmed(),
            "inRange": { "color": theme::MAP_RAMP },
            "textStyle": { "color": theme::TEXT },
            "calculable": true,
        },
        "series": [{
            "name": SERIES_NAME,
            "type": "map",
            "map": map_name,
            "roam": false,
            "zoom": 1.2,
            "selectedMode": false,
            "label": { "show": true, "color": "#000", "fontSize": 10 },
            "itemStyle": { "areaColor": "#eee", "borderColor": "#444", "borderWidth": 0.5 },
            "emphasis": {
                "label": { "show": true, "color": "#fff" },
                "itemStyle": { "areaColor": "#2a77c9" },
            },
            "data": data,
        }],
    })
}
