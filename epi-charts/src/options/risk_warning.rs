//! Doughnut of districts colored by risk tier.

use crate::theme;
use epi_core::format::format_number;
use epi_core::EpidemicSnapshot;
use epi_data::risk::classify_regions;
use serde_json::{json, Value};

pub const SERIES_NAME: &str = "风险预警";

pub fn slice_tooltip(region: &str, confirmed: u64, level: &str) -> String {
    format!(
        "{}<br/>累计确诊: {}<br/>风险等级: {}",
        region,
        format_number(confirmed),
        level
    )
}

pub fn option(snapshot: &EpidemicSnapshot) -> Value {
    let slices: Vec<Value> = classify_regions(&snapshot.regional_data)
        .into_iter()
        .map(|risk| {
            json!({
                "name": risk.region,
                "value": risk.confirmed,
                "level": risk.tier.label,
                "itemStyle": { "color": risk.tier.color },
                "tooltip": {
                    "formatter": slice_tooltip(&risk.region, risk.confirmed, risk.tier.label),
                },
            })
        })
        .collect();

    json!({
        "tooltip": theme::tooltip("item"),
        "series": [{
            "name": SERIES_NAME,
            "type": "pie",
            "radius": ["40%", "70%"],
            "avoidLabelOverlap": false,
            "itemStyle": {
                "borderRadius": 10,
                "borderColor": theme::BACKGROUND,
                "borderWidth": 2,
            },
            "label": { "show": true, "formatter": "{b}\n{d}%", "color": theme::TEXT },
            "labelLine": { "show": true },
            "data": slices,
        }],
    })
}
