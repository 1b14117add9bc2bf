//! Horizontal bars of cumulative confirmed cases per district.

use crate::theme;
use epi_core::format::format_number;
use epi_core::EpidemicSnapshot;
use serde_json::{json, Value};

pub const SERIES_NAME: &str = "累计确诊";

pub fn option(snapshot: &EpidemicSnapshot) -> Value {
    let regional = &snapshot.regional_data;

    // Labels are pre-formatted per bar; option JSON cannot carry formatter callbacks.
    let bars: Vec<Value> = regional
        .pairs()
        .map(|(_, confirmed)| {
            json!({
                "value": confirmed,
                "label": { "formatter": format_number(confirmed) },
            })
        })
        .collect();

    let category_axis = json!({
        "type": "category",
        "data": regional.regions,
        "inverse": true,
        "axisLine": { "lineStyle": { "color": theme::AXIS } },
        "axisLabel": { "color": theme::TEXT },
    });

    let mut tooltip = theme::tooltip("axis");
    tooltip["axisPointer"] = json!({ "type": "shadow" });

    json!({
        "tooltip": tooltip,
        "grid": theme::grid(),
        "xAxis": theme::value_axis(),
        "yAxis": category_axis,
        "series": [{
            "name": SERIES_NAME,
            "type": "bar",
            "barWidth": "60%",
            "itemStyle": {
                "color": {
                    "type": "linear",
                    "x": 0, "y": 0, "x2": 1, "y2": 0,
                    "colorStops": [
                        { "offset": 0, "color": theme::ACCENT },
                        { "offset": 1, "color": theme::TEAL },
                    ],
                },
            },
            "label": { "show": true, "position": "right", "color": theme::TEXT },
            "data": bars,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::snapshot_with;

    #[test]
    fn first_region_is_drawn_on_top() {
        let snapshot = snapshot_with(&["沙田区", "东区"], &[12345, 800]);
        let option = option(&snapshot);
        assert_eq!(option["yAxis"]["inverse"], true);
        assert_eq!(option["yAxis"]["data"], json!(["沙田区", "东区"]));
    }

    #[test]
    fn bar_labels_use_number_format() {
        let snapshot = snapshot_with(&["沙田区", "东区"], &[12345, 800]);
        let option = option(&snapshot);
        let bars = option["series"][0]["data"].as_array().unwrap();
        assert_eq!(bars[0]["value"], 12345);
        assert_eq!(bars[0]["label"]["formatter"], "1.2万");
        assert_eq!(bars[1]["label"]["formatter"], "800");
    }
}
