//! Chart rendering for the Hong Kong epidemic dashboard.
//!
//! This crate provides:
//! - `options`: ECharts option builders, one per chart
//! - `renderer`: the chart backend seam and single-instance chart slots
//! - `dashboard`: the five renderers plus the fetch-and-render cycle
//! - `metrics`: formatted metric cards
//!
//! Nothing here touches the DOM; the browser and CLI crates plug in their own
//! `ChartBackend`, `SnapshotSource` and `MetricsView`.

pub mod dashboard;
pub mod metrics;
pub mod options;
pub mod renderer;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard::{fetch_and_render, CycleOutcome, Dashboard, Poller};
pub use metrics::{MetricsPanel, MetricsView};
pub use renderer::{ChartBackend, ChartHandle, ChartRenderer, ChartSlot};
