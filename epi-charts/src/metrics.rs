//! The metric cards above the charts.

use epi_core::config::DATE_FORMAT;
use epi_core::format::format_number;
use epi_core::LatestStats;

/// DOM ids of the metric text targets.
pub const NEW_CONFIRMED_ID: &str = "newConfirmed";
pub const CUMULATIVE_CONFIRMED_ID: &str = "cumulativeConfirmed";
pub const EXISTING_CONFIRMED_ID: &str = "existingConfirmed";
pub const NEW_RECOVERED_ID: &str = "newRecovered";
pub const NEW_DEATHS_ID: &str = "newDeaths";
pub const UPDATE_TIME_ID: &str = "updateTime";

/// Display strings for every metric card, already formatted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsPanel {
    pub new_confirmed: String,
    pub cumulative_confirmed: String,
    pub existing_confirmed: String,
    pub new_recovered: String,
    pub new_deaths: String,
    pub update_time: String,
}

impl MetricsPanel {
    pub fn from_stats(stats: &LatestStats) -> Self {
        Self {
            new_confirmed: format_number(stats.new_confirmed),
            cumulative_confirmed: format_number(stats.cumulative_confirmed),
            existing_confirmed: format_number(stats.existing_confirmed),
            new_recovered: format_number(stats.new_recovered),
            new_deaths: format_number(stats.new_deaths),
            update_time: format!("数据更新至：{}", stats.latest_date.format(DATE_FORMAT)),
        }
    }

    /// `(dom id, label, value)` for each numeric card, in display order.
    pub fn cards(&self) -> [(&'static str, &'static str, &str); 5] {
        [
            (NEW_CONFIRMED_ID, "新增确诊", self.new_confirmed.as_str()),
            (CUMULATIVE_CONFIRMED_ID, "累计确诊", self.cumulative_confirmed.as_str()),
            (EXISTING_CONFIRMED_ID, "现存确诊", self.existing_confirmed.as_str()),
            (NEW_RECOVERED_ID, "新增康复", self.new_recovered.as_str()),
            (NEW_DEATHS_ID, "新增死亡", self.new_deaths.as_str()),
        ]
    }
}

/// Wherever the metric cards are shown.
pub trait MetricsView {
    fn show_metrics(&mut self, panel: MetricsPanel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::snapshot_with;

    #[test]
    fn panel_formats_every_field() {
        let mut stats = snapshot_with(&[], &[]).latest_stats;
        stats.cumulative_confirmed = 1_185_432;
        let panel = MetricsPanel::from_stats(&stats);

        assert_eq!(panel.new_confirmed, "300");
        assert_eq!(panel.cumulative_confirmed, "118.5万");
        assert_eq!(panel.new_deaths, "1");
        assert_eq!(panel.update_time, "数据更新至：2022-03-03");
        assert_eq!(panel.cards()[1], (CUMULATIVE_CONFIRMED_ID, "累计确诊", "118.5万"));
    }
}
