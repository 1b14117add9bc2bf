//! Chart instances and the renderers that own them.
//!
//! A `ChartBackend` creates chart instances bound to a mount point. Each
//! `ChartRenderer` owns at most one instance through a `ChartSlot`; rendering
//! disposes the old instance before storing the new one, so repeated or
//! overlapping renders never leave two live instances on one mount.

use epi_core::{GeoJson, Result};
use serde_json::Value;

/// A live chart-library instance.
pub trait ChartHandle {
    /// Draw the chart from a full option document.
    fn set_option(&mut self, option: &Value) -> Result<()>;

    /// Recompute layout for the current container size.
    fn resize(&mut self);

    /// Release the instance. The handle is dropped right after.
    fn dispose(&mut self);
}

/// Factory for chart instances.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn init(&self, mount_id: &str) -> Result<Self::Handle>;

    /// Make `geo` available to map series under `map_name`.
    fn register_map(&self, map_name: &str, geo: &GeoJson) -> Result<()>;
}

/// Holds exactly zero or one chart instance.
pub struct ChartSlot<H: ChartHandle> {
    handle: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    /// Dispose the current instance (if any) and install `handle`.
    pub fn replace(&mut self, handle: H) -> &mut H {
        self.clear();
        self.handle.insert(handle)
    }

    /// Dispose the current instance, leaving the slot empty.
    pub fn clear(&mut self) {
        if let Some(mut old) = self.handle.take() {
            old.dispose();
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut H> {
        self.handle.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.handle.is_none()
    }
}

/// One chart on one mount point.
pub struct ChartRenderer<H: ChartHandle> {
    mount_id: &'static str,
    slot: ChartSlot<H>,
}

impl<H: ChartHandle> ChartRenderer<H> {
    pub fn new(mount_id: &'static str) -> Self {
        Self {
            mount_id,
            slot: ChartSlot::default(),
        }
    }

    pub fn mount_id(&self) -> &'static str {
        self.mount_id
    }

    /// Replace the chart with a fresh instance drawn from `option`.
    ///
    /// The old instance is disposed before the new one is created: ECharts
    /// hands back the existing instance when a mount is initialized twice.
    /// Errors from the backend are returned untouched.
    pub fn draw<B>(&mut self, backend: &B, option: &Value) -> Result<()>
    where
        B: ChartBackend<Handle = H>,
    {
        self.slot.clear();
        let handle = backend.init(self.mount_id)?;
        self.slot.replace(handle).set_option(option)
    }

    /// No-op until the first draw.
    pub fn resize(&mut self) {
        if let Some(handle) = self.slot.get_mut() {
            handle.resize();
        }
    }

    pub fn has_instance(&self) -> bool {
        !self.slot.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, RecordedChart, RecordingBackend};
    use serde_json::json;

    #[test]
    fn resize_before_first_draw_is_a_no_op() {
        let backend = RecordingBackend::default();
        let mut renderer: ChartRenderer<RecordedChart> = ChartRenderer::new("trendChart");
        renderer.resize();
        assert!(!renderer.has_instance());
        assert!(backend.events().is_empty());
    }

    #[test]
    fn redraw_disposes_previous_instance() {
        let backend = RecordingBackend::default();
        let mut renderer = ChartRenderer::new("trendChart");

        renderer.draw(&backend, &json!({"n": 1})).unwrap();
        renderer.draw(&backend, &json!({"n": 2})).unwrap();
        renderer.resize();

        assert_eq!(
            backend.events(),
            vec![
                Event::Init("trendChart".into(), 0),
                Event::SetOption(0),
                Event::Dispose(0),
                Event::Init("trendChart".into(), 1),
                Event::SetOption(1),
                Event::Resize(1),
            ]
        );
        assert_eq!(backend.live_instances("trendChart"), 1);
        assert_eq!(backend.last_option("trendChart"), Some(json!({"n": 2})));
    }

    #[test]
    fn draw_failure_propagates() {
        let backend = RecordingBackend::failing_on("regionalChart");
        let mut renderer = ChartRenderer::new("regionalChart");
        assert!(renderer.draw(&backend, &json!({})).is_err());
    }
}
