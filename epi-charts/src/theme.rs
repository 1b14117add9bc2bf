//! Dark dashboard palette and option fragments shared by every chart.

use serde_json::{json, Value};

pub const TEXT: &str = "#e6f1ff";
pub const AXIS: &str = "#8892b0";
pub const SPLIT_LINE: &str = "rgba(136, 146, 176, 0.2)";
pub const ACCENT: &str = "#64ffda";
pub const TOOLTIP_BG: &str = "rgba(17, 34, 64, 0.8)";
pub const BACKGROUND: &str = "#0a192f";

pub const RED: &str = "#ff6b6b";
pub const YELLOW: &str = "#ffd166";
pub const TEAL: &str = "#4ecdc4";

/// Light-to-dark reds for the choropleth.
pub const MAP_RAMP: [&str; 9] = [
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];

pub fn tooltip(trigger: &str) -> Value {
    json!({
        "trigger": trigger,
        "backgroundColor": TOOLTIP_BG,
        "borderColor": ACCENT,
        "borderWidth": 1,
        "textStyle": { "color": TEXT },
    })
}

pub fn legend(names: &[&str]) -> Value {
    json!({
        "data": names,
        "textStyle": { "color": TEXT },
        "top": 10,
    })
}

pub fn grid() -> Value {
    json!({
        "left": "3%",
        "right": "4%",
        "bottom": "3%",
        "containLabel": true,
    })
}

/// Date category axis showing every 7th label.
pub fn date_axis(labels: &[String]) -> Value {
    json!({
        "type": "category",
        "boundaryGap": false,
        "data": labels,
        "axisLine": { "lineStyle": { "color": AXIS } },
        "axisLabel": { "color": AXIS, "rotate": 45, "interval": 6 },
    })
}

pub fn value_axis() -> Value {
    json!({
        "type": "value",
        "axisLine": { "lineStyle": { "color": AXIS } },
        "axisLabel": { "color": AXIS },
        "splitLine": { "lineStyle": { "color": SPLIT_LINE } },
    })
}

/// Smoothed line series with circle markers.
pub fn line_series<T: serde::Serialize>(
    name: &str,
    color: &str,
    width: u32,
    symbol_size: u32,
    data: &[T],
) -> Value {
    json!({
        "name": name,
        "type": "line",
        "smooth": true,
        "symbol": "circle",
        "symbolSize": symbol_size,
        "lineStyle": { "width": width, "color": color },
        "itemStyle": { "color": color },
        "data": data,
    })
}

/// Add a faint fill under a line series.
pub fn with_area(mut series: Value, color: &str) -> Value {
    series["areaStyle"] = json!({ "opacity": 0.1, "color": color });
    series
}
