//! Daily new cases with their 7-day moving average.

use crate::theme;
use epi_core::EpidemicSnapshot;
use epi_data::moving_average;
use serde_json::{json, Value};

pub const DAILY: &str = "每日新增";
pub const AVERAGE: &str = "7日移动平均";

pub fn option(snapshot: &EpidemicSnapshot) -> Value {
    let daily = &snapshot.daily_data;
    let average = moving_average::seven_day(&daily.new_confirmed);

    let daily_series = theme::with_area(
        theme::line_series(DAILY, theme::RED, 1, 3, &daily.new_confirmed),
        theme::RED,
    );
    let average_series = theme::line_series(AVERAGE, theme::TEAL, 3, 4, &average);

    json!({
        "tooltip": theme::tooltip("axis"),
        "legend": theme::legend(&[DAILY, AVERAGE]),
        "grid": theme::grid(),
        "xAxis": theme::date_axis(&daily.date_labels()),
        "yAxis": theme::value_axis(),
        "series": [daily_series, average_series],
    })
}
