//! ECharts option documents, one module per chart.
//!
//! Builders are pure: they read a snapshot and return the option JSON that is
//! handed to `setOption`. Anything ECharts would normally compute through a
//! formatter callback is pre-rendered into the data items.

pub mod hk_map;
pub mod regional;
pub mod risk_warning;
pub mod trend;
pub mod trend_analysis;
