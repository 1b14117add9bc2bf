//! Page lifecycle: the resize relay and the polling loop.

use crate::fetch::HttpSource;
use crate::js_bridge::{wait_for_echarts, EChartsBackend};
use crate::state::AppState;
use dioxus::prelude::spawn;
use epi_charts::Poller;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use std::time::Duration;
use wasm_bindgen::prelude::*;

pub type BrowserPoller = Poller<HttpSource, EChartsBackend, AppState>;

/// Forward window resizes to every drawn chart. Lives as long as the page.
fn bind_resize(poller: BrowserPoller) {
    let Some(window) = web_sys::window() else {
        warn!("No window; charts will not follow resizes");
        return;
    };
    let on_resize = Closure::<dyn FnMut()>::new(move || poller.resize_all());
    if let Err(e) =
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
    {
        warn!("Failed to bind resize listener: {:?}", e);
    }
    on_resize.forget();
}

/// Start polling once ECharts has loaded.
///
/// A cycle runs immediately, then a new one every `interval`, whether or
/// not the previous cycle has finished. Must be called from a Dioxus scope.
pub fn start(poller: BrowserPoller, interval: Duration) {
    bind_resize(poller.clone());
    let interval_ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
    spawn(async move {
        wait_for_echarts().await;
        info!("Polling every {} ms", interval_ms);
        poller
            .run_forever(
                || TimeoutFuture::new(interval_ms),
                |cycle| {
                    spawn(async move {
                        cycle.tick().await;
                    });
                },
            )
            .await;
    });
}
