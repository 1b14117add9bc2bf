//! New / existing / cumulative confirmed over time, on two value axes.

use crate::theme;
use epi_core::EpidemicSnapshot;
use epi_data::axis::{padded_max, series_max};
use serde_json::{json, Value};

pub const NEW: &str = "新增确诊";
pub const CUMULATIVE: &str = "累计确诊";
pub const EXISTING: &str = "现存确诊";

pub fn option(snapshot: &EpidemicSnapshot) -> Value {
    let daily = &snapshot.daily_data;

    // Left axis carries the daily series, right axis the running total.
    let left_max = padded_max(series_max(&[&daily.new_confirmed, &daily.existing_confirmed]));
    let right_max = padded_max(series_max(&[&daily.cumulative_confirmed]));

    let mut left_axis = theme::value_axis();
    left_axis["name"] = json!("新增/现存确诊");
    left_axis["nameTextStyle"] = json!({ "color": theme::TEXT });
    left_axis["min"] = json!(0);
    left_axis["max"] = json!(left_max);

    let mut right_axis = theme::value_axis();
    right_axis["name"] = json!(CUMULATIVE);
    right_axis["nameTextStyle"] = json!({ "color": theme::TEXT });
    right_axis["splitLine"] = json!({ "show": false });
    right_axis["min"] = json!(0);
    right_axis["max"] = json!(right_max);

    let series = [
        (NEW, theme::RED, &daily.new_confirmed, 0),
        (EXISTING, theme::YELLOW, &daily.existing_confirmed, 0),
        (CUMULATIVE, theme::TEAL, &daily.cumulative_confirmed, 1),
    ]
    .into_iter()
    .map(|(name, color, data, axis)| {
        let mut s = theme::with_area(theme::line_series(name, color, 2, 4, data), color);
        s["yAxisIndex"] = json!(axis);
        s
    })
    .collect::<Vec<_>>();

    json!({
        "tooltip": theme::tooltip("axis"),
        "legend": theme::legend(&[NEW, CUMULATIVE, EXISTING]),
        "grid": theme::grid(),
        "xAxis": theme::date_axis(&daily.date_labels()),
        "yAxis": [left_axis, right_axis],
        "series": series,
    })
}
