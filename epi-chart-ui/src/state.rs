//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use epi_charts::{MetricsPanel, MetricsView};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Formatted values for the metric cards
    pub metrics: Signal<MetricsPanel>,
    /// True until the first snapshot arrives
    pub loading: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: Signal::new(MetricsPanel::default()),
            loading: Signal::new(true),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsView for AppState {
    fn show_metrics(&mut self, panel: MetricsPanel) {
        self.metrics.set(panel);
        self.loading.set(false);
    }
}
