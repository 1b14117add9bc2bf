//! Typed bindings to the global `echarts` object.
//!
//! The library is loaded from a `<script>` tag, so nothing here may run until
//! [`wait_for_echarts`] resolves. Option documents cross the boundary as JSON.

use epi_charts::{ChartBackend, ChartHandle};
use epi_core::{DashboardError, GeoJson, Result};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Interval between checks for the `echarts` global.
const READY_POLL_MS: u32 = 100;

#[wasm_bindgen]
extern "C" {
    pub type EChartsInstance;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> std::result::Result<EChartsInstance, JsValue>;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = registerMap)]
    fn echarts_register_map(name: &str, geo_json: &JsValue) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch, method, js_name = setOption)]
    fn set_option(this: &EChartsInstance, option: &JsValue) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn resize(this: &EChartsInstance);

    #[wasm_bindgen(method)]
    fn dispose(this: &EChartsInstance);
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Convert a JSON document into a plain JS object.
fn to_js(value: &Value) -> std::result::Result<JsValue, String> {
    let text = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&text).map_err(js_error)
}

/// True once the ECharts script has defined its global.
pub fn echarts_ready() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("echarts")).unwrap_or(false)
}

/// Resolve once `echarts` is available, checking every 100 ms.
pub async fn wait_for_echarts() {
    while !echarts_ready() {
        TimeoutFuture::new(READY_POLL_MS).await;
    }
    debug!("ECharts ready");
}

/// One ECharts instance bound to a DOM element.
pub struct EChartsChart {
    mount_id: String,
    instance: EChartsInstance,
}

impl ChartHandle for EChartsChart {
    fn set_option(&mut self, option: &Value) -> Result<()> {
        let js = to_js(option).map_err(|e| DashboardError::render(&self.mount_id, e))?;
        self.instance
            .set_option(&js)
            .map_err(|e| DashboardError::render(&self.mount_id, js_error(e)))
    }

    fn resize(&mut self) {
        self.instance.resize();
    }

    fn dispose(&mut self) {
        self.instance.dispose();
    }
}

/// Creates charts on elements of the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct EChartsBackend;

impl ChartBackend for EChartsBackend {
    type Handle = EChartsChart;

    fn init(&self, mount_id: &str) -> Result<EChartsChart> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(mount_id))
            .ok_or_else(|| DashboardError::render(mount_id, "mount point not found"))?;
        let instance =
            echarts_init(&element).map_err(|e| DashboardError::render(mount_id, js_error(e)))?;
        Ok(EChartsChart {
            mount_id: mount_id.to_string(),
            instance,
        })
    }

    fn register_map(&self, map_name: &str, geo: &GeoJson) -> Result<()> {
        let js = to_js(geo.as_value()).map_err(|e| DashboardError::render(map_name, e))?;
        echarts_register_map(map_name, &js).map_err(|e| DashboardError::render(map_name, js_error(e)))
    }
}
