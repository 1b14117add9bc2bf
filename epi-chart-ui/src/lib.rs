//! Shared Dioxus components and ECharts bridge for the epidemic dashboard.
//!
//! This crate provides:
//! - `js_bridge`: ECharts bindings implementing the chart backend traits
//! - `fetch`: the browser HTTP source for the statistics and geography payloads
//! - `state`: Reactive AppState with Dioxus Signals
//! - `lifecycle`: the polling loop and resize relay
//! - `console_log`: a `log` sink writing to the browser console
//! - `components`: Reusable RSX components

pub mod components;
pub mod console_log;
pub mod fetch;
pub mod js_bridge;
pub mod lifecycle;
pub mod state;
