//! Hong Kong epidemic data dashboard
//!
//! A single page of headline metrics and five ECharts panels, refreshed from
//! the statistics API on a fixed interval.
//!
//! Data flow:
//! 1. The ECharts script tag loads; polling starts once its global exists.
//! 2. Each cycle fetches the snapshot, updates the metric signals, and
//!    redraws the trend, regional, risk and analysis charts.
//! 3. The geography is fetched next and the district map is drawn last.
//! 4. Window resizes relayout whatever has been drawn.

use dioxus::prelude::*;
use epi_chart_ui::components::{ChartContainer, LoadingSpinner, MetricCard};
use epi_chart_ui::fetch::HttpSource;
use epi_chart_ui::js_bridge::EChartsBackend;
use epi_chart_ui::state::AppState;
use epi_chart_ui::{console_log, lifecycle};
use epi_charts::dashboard::{
    HK_MAP_CHART_ID, REGIONAL_CHART_ID, RISK_WARNING_CHART_ID, TREND_ANALYSIS_CHART_ID,
    TREND_CHART_ID,
};
use epi_charts::metrics::UPDATE_TIME_ID;
use epi_charts::{Dashboard, Poller};
use epi_core::config::DashboardConfig;

const ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

const TITLE: &str = "香港疫情数据可视化大屏";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    console_log::init(log::LevelFilter::Info);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("epidemic-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Runs once on mount; the poller lives for the rest of the page.
    use_effect(move || {
        let config = DashboardConfig::default();
        let poller = Poller::new(
            HttpSource::new(config.clone()),
            Dashboard::with_map_name(EChartsBackend, &config.map_name),
            state,
        );
        lifecycle::start(poller, config.poll_interval);
    });

    let metrics = state.metrics.read().clone();
    let loading = *state.loading.read();

    rsx! {
        document::Script { src: ECHARTS_SRC }

        div {
            style: "min-height: 100vh; padding: 16px; background: #0a192f; color: #ccd6f6; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "text-align: center; margin-bottom: 16px;",
                h1 {
                    style: "margin: 0; font-size: 28px; color: #64ffda; letter-spacing: 2px;",
                    "{TITLE}"
                }
                p {
                    id: UPDATE_TIME_ID,
                    style: "margin: 6px 0 0 0; font-size: 13px; color: #8892b0;",
                    "{metrics.update_time}"
                }
            }

            if loading {
                LoadingSpinner {}
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
                for (id, label, value) in metrics.cards() {
                    MetricCard {
                        key: "{id}",
                        id: id.to_string(),
                        label: label.to_string(),
                        value: value.to_string(),
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",
                ChartContainer { id: TREND_CHART_ID.to_string(), title: "疫情趋势".to_string(), loading }
                ChartContainer { id: REGIONAL_CHART_ID.to_string(), title: "地区分布".to_string(), loading }
                ChartContainer { id: HK_MAP_CHART_ID.to_string(), title: "香港疫情地图".to_string(), loading, min_height: 420 }
                ChartContainer { id: RISK_WARNING_CHART_ID.to_string(), title: "风险等级预警".to_string(), loading }
                ChartContainer { id: TREND_ANALYSIS_CHART_ID.to_string(), title: "新增病例趋势分析".to_string(), loading }
            }
        }
    }
}
