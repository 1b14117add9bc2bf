//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod loading_spinner;
mod metric_card;

pub use chart_container::ChartContainer;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
