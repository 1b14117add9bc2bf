//! The five dashboard charts and the fetch-and-render cycle that feeds them.

use crate::metrics::{MetricsPanel, MetricsView};
use crate::options;
use crate::renderer::{ChartBackend, ChartRenderer};
use epi_core::config::MAP_NAME;
use epi_core::source::SnapshotSource;
use epi_core::{ApiResponse, EpidemicSnapshot, GeoJson, Result};
use log::{debug, error, warn};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// DOM ids of the chart mount points.
pub const TREND_CHART_ID: &str = "trendChart";
pub const REGIONAL_CHART_ID: &str = "regionalChart";
pub const HK_MAP_CHART_ID: &str = "hkMapChart";
pub const RISK_WARNING_CHART_ID: &str = "riskWarningChart";
pub const TREND_ANALYSIS_CHART_ID: &str = "trendAnalysisChart";

pub const CHART_IDS: [&str; 5] = [
    TREND_CHART_ID,
    REGIONAL_CHART_ID,
    HK_MAP_CHART_ID,
    RISK_WARNING_CHART_ID,
    TREND_ANALYSIS_CHART_ID,
];

/// Every chart on the page, each owning its own instance.
pub struct Dashboard<B: ChartBackend> {
    backend: B,
    map_name: String,
    trend: ChartRenderer<B::Handle>,
    regional: ChartRenderer<B::Handle>,
    hk_map: ChartRenderer<B::Handle>,
    risk_warning: ChartRenderer<B::Handle>,
    trend_analysis: ChartRenderer<B::Handle>,
}

impl<B: ChartBackend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self::with_map_name(backend, MAP_NAME)
    }

    pub fn with_map_name(backend: B, map_name: &str) -> Self {
        Self {
            backend,
            map_name: map_name.to_string(),
            trend: ChartRenderer::new(TREND_CHART_ID),
            regional: ChartRenderer::new(REGIONAL_CHART_ID),
            hk_map: ChartRenderer::new(HK_MAP_CHART_ID),
            risk_warning: ChartRenderer::new(RISK_WARNING_CHART_ID),
            trend_analysis: ChartRenderer::new(TREND_ANALYSIS_CHART_ID),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn render_trend(&mut self, snapshot: &EpidemicSnapshot) -> Result<()> {
        self.trend
            .draw(&self.backend, &options::trend::option(snapshot))
    }

    pub fn render_regional(&mut self, snapshot: &EpidemicSnapshot) -> Result<()> {
        self.regional
            .draw(&self.backend, &options::regional::option(snapshot))
    }

    pub fn render_risk_warning(&mut self, snapshot: &EpidemicSnapshot) -> Result<()> {
        self.risk_warning
            .draw(&self.backend, &options::risk_warning::option(snapshot))
    }

    pub fn render_trend_analysis(&mut self, snapshot: &EpidemicSnapshot) -> Result<()> {
        self.trend_analysis
            .draw(&self.backend, &options::trend_analysis::option(snapshot))
    }

    /// Register the geography, then draw the choropleth.
    pub fn render_hk_map(&mut self, geo: &GeoJson, snapshot: &EpidemicSnapshot) -> Result<()> {
        self.backend.register_map(&self.map_name, geo)?;
        let option = options::hk_map::option(geo, snapshot, &self.map_name);
        self.hk_map.draw(&self.backend, &option)
    }

    /// The four charts that only need the statistics payload, in page order.
    pub fn render_snapshot(&mut self, snapshot: &EpidemicSnapshot) -> Result<()> {
        self.render_trend(snapshot)?;
        self.render_regional(snapshot)?;
        self.render_risk_warning(snapshot)?;
        self.render_trend_analysis(snapshot)
    }

    /// Relayout every chart that has been drawn. Never touches data.
    pub fn resize_all(&mut self) {
        self.trend.resize();
        self.regional.resize();
        self.hk_map.resize();
        self.risk_warning.resize();
        self.trend_analysis.resize();
    }
}

/// How a cycle ended when no transport, parse or render error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Metrics and all five charts were updated.
    Rendered { cycle: u64 },
    /// The statistics endpoint returned its error envelope; nothing was touched.
    Aborted { cycle: u64, reason: String },
}

/// One fetch-and-render cycle.
///
/// Steps run in order and stop at the first failure, so metrics and the four
/// snapshot charts may already be updated when the geography fetch fails.
/// The dashboard is only borrowed between awaits, never across one.
pub async fn fetch_and_render<S, B, V>(
    cycle: u64,
    source: &S,
    dashboard: &RefCell<Dashboard<B>>,
    view: &mut V,
) -> Result<CycleOutcome>
where
    S: SnapshotSource,
    B: ChartBackend,
    V: MetricsView,
{
    let snapshot = match source.fetch_snapshot().await? {
        ApiResponse::Snapshot(snapshot) => *snapshot,
        ApiResponse::Error { error } => {
            warn!("Cycle {}: data fetch failed: {}", cycle, error);
            return Ok(CycleOutcome::Aborted {
                cycle,
                reason: error,
            });
        }
    };

    view.show_metrics(MetricsPanel::from_stats(&snapshot.latest_stats));
    dashboard.borrow_mut().render_snapshot(&snapshot)?;

    let geo = source.fetch_geojson().await?;
    dashboard.borrow_mut().render_hk_map(&geo, &snapshot)?;

    debug!("Cycle {}: rendered {}", cycle, snapshot.latest_stats.latest_date);
    Ok(CycleOutcome::Rendered { cycle })
}

/// Shared handles for starting cycles from a timer and relaying resizes.
///
/// Cycles are never serialized: a tick started while an earlier one is still
/// waiting on the network runs alongside it, and whichever finishes last
/// defines what is on screen.
pub struct Poller<S, B: ChartBackend, V> {
    source: Rc<S>,
    dashboard: Rc<RefCell<Dashboard<B>>>,
    view: V,
    cycles: Rc<Cell<u64>>,
}

impl<S, B: ChartBackend, V: Clone> Clone for Poller<S, B, V> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            dashboard: self.dashboard.clone(),
            view: self.view.clone(),
            cycles: self.cycles.clone(),
        }
    }
}

impl<S, B, V> Poller<S, B, V>
where
    S: SnapshotSource,
    B: ChartBackend,
    V: MetricsView + Clone,
{
    pub fn new(source: S, dashboard: Dashboard<B>, view: V) -> Self {
        Self {
            source: Rc::new(source),
            dashboard: Rc::new(RefCell::new(dashboard)),
            view,
            cycles: Rc::new(Cell::new(0)),
        }
    }

    pub fn dashboard(&self) -> &Rc<RefCell<Dashboard<B>>> {
        &self.dashboard
    }

    /// Run one cycle. Errors are logged here and end the cycle; the caller
    /// keeps polling.
    pub async fn tick(&self) -> Option<CycleOutcome> {
        let cycle = self.cycles.get() + 1;
        self.cycles.set(cycle);

        let mut view = self.view.clone();
        match fetch_and_render(cycle, self.source.as_ref(), &self.dashboard, &mut view).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!("Cycle {}: {}", cycle, e);
                None
            }
        }
    }

    pub fn resize_all(&self) {
        self.dashboard.borrow_mut().resize_all();
    }

    /// Start a cycle now, then another each time `next_tick` resolves.
    ///
    /// `launch` receives a handle to run as its own task; the loop never
    /// waits for a launched cycle, so slow cycles overlap. Never returns.
    pub async fn run_forever<T, W, L>(&self, mut next_tick: T, mut launch: L)
    where
        T: FnMut() -> W,
        W: Future<Output = ()>,
        L: FnMut(Self),
    {
        loop {
            launch(self.clone());
            next_tick().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{geo_with, snapshot_with, Event, RecordingBackend};
    use epi_core::DashboardError;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct RecordingView {
        shown: Rc<RefCell<Vec<MetricsPanel>>>,
    }

    impl MetricsView for RecordingView {
        fn show_metrics(&mut self, panel: MetricsPanel) {
            self.shown.borrow_mut().push(panel);
        }
    }

    /// Answers immediately from fixed results.
    struct FixedSource {
        data: fn() -> Result<ApiResponse>,
        geo: fn() -> Result<GeoJson>,
    }

    impl SnapshotSource for FixedSource {
        async fn fetch_snapshot(&self) -> Result<ApiResponse> {
            (self.data)()
        }

        async fn fetch_geojson(&self) -> Result<GeoJson> {
            (self.geo)()
        }
    }

    fn ok_data() -> Result<ApiResponse> {
        Ok(ApiResponse::Snapshot(Box::new(snapshot_with(&["沙田区"], &[12345]))))
    }

    fn ok_geo() -> Result<GeoJson> {
        Ok(geo_with(&["Sha Tin"]))
    }

    type TestPoller = Poller<FixedSource, RecordingBackend, RecordingView>;

    fn poller(source: FixedSource) -> (TestPoller, RecordingBackend, RecordingView) {
        let backend = RecordingBackend::default();
        let view = RecordingView::default();
        let poller = Poller::new(source, Dashboard::new(backend.clone()), view.clone());
        (poller, backend, view)
    }

    #[test]
    fn full_cycle_updates_metrics_and_all_charts() {
        let (poller, backend, view) = poller(FixedSource { data: ok_data, geo: ok_geo });

        assert_eq!(block_on(poller.tick()), Some(CycleOutcome::Rendered { cycle: 1 }));
        assert_eq!(view.shown.borrow().len(), 1);
        for id in CHART_IDS {
            assert_eq!(backend.live_instances(id), 1, "{}", id);
        }
        assert!(backend.events().contains(&Event::RegisterMap("HK".into())));
    }

    #[test]
    fn error_envelope_aborts_without_touching_ui() {
        let (poller, backend, view) = poller(FixedSource {
            data: || Ok(ApiResponse::Error { error: "数据加载失败".into() }),
            geo: ok_geo,
        });

        assert_eq!(
            block_on(poller.tick()),
            Some(CycleOutcome::Aborted { cycle: 1, reason: "数据加载失败".into() })
        );
        assert!(view.shown.borrow().is_empty());
        assert!(backend.events().is_empty());
    }

    #[test]
    fn transport_failure_is_logged_and_next_cycle_runs() {
        let (poller, backend, _) = poller(FixedSource {
            data: || Err(DashboardError::Transport("connection refused".into())),
            geo: ok_geo,
        });

        assert_eq!(block_on(poller.tick()), None);
        assert_eq!(block_on(poller.tick()), None);
        assert_eq!(poller.cycles.get(), 2);
        assert_eq!(backend.total_live(), 0);
    }

    #[test]
    fn geo_failure_keeps_earlier_updates() {
        let (poller, backend, view) = poller(FixedSource {
            data: ok_data,
            geo: || Err(DashboardError::Transport("timeout".into())),
        });

        assert_eq!(block_on(poller.tick()), None);
        assert_eq!(view.shown.borrow().len(), 1);
        assert_eq!(backend.live_instances(TREND_CHART_ID), 1);
        assert_eq!(backend.live_instances(HK_MAP_CHART_ID), 0);
    }

    #[test]
    fn render_failure_surfaces_from_cycle() {
        let backend = RecordingBackend::failing_on(REGIONAL_CHART_ID);
        let dashboard = RefCell::new(Dashboard::new(backend.clone()));
        let source = FixedSource { data: ok_data, geo: ok_geo };
        let mut view = RecordingView::default();

        let err = block_on(fetch_and_render(1, &source, &dashboard, &mut view)).unwrap_err();
        assert!(matches!(err, DashboardError::Render { .. }));
        // Charts after the failing one were not drawn.
        assert_eq!(backend.live_instances(RISK_WARNING_CHART_ID), 0);
    }

    #[test]
    fn resize_reaches_only_drawn_charts() {
        let (poller, backend, _) = poller(FixedSource { data: ok_data, geo: ok_geo });
        poller.resize_all();
        assert!(backend.events().is_empty());

        block_on(poller.tick());
        poller.resize_all();
        let resizes = backend
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Resize(_)))
            .count();
        assert_eq!(resizes, 5);
    }

    /// Each snapshot fetch waits on the next queued channel.
    struct GatedSource {
        pending: RefCell<VecDeque<oneshot::Receiver<ApiResponse>>>,
    }

    impl SnapshotSource for GatedSource {
        async fn fetch_snapshot(&self) -> Result<ApiResponse> {
            let rx = self.pending.borrow_mut().pop_front();
            match rx {
                Some(rx) => rx.await.map_err(|e| DashboardError::Transport(e.to_string())),
                None => Err(DashboardError::Transport("no response queued".into())),
            }
        }

        async fn fetch_geojson(&self) -> Result<GeoJson> {
            ok_geo()
        }
    }

    #[test]
    fn overlapping_cycles_resolve_out_of_order() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let source = GatedSource {
            pending: RefCell::new(VecDeque::from([rx_first, rx_second])),
        };
        let backend = RecordingBackend::default();
        let view = RecordingView::default();
        let poller = Poller::new(source, Dashboard::new(backend.clone()), view.clone());

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let p = poller.clone();
            spawner
                .spawn_local(async move {
                    p.tick().await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(backend.events().is_empty());

        // The later cycle answers first...
        let second = snapshot_with(&["东区"], &[800]);
        tx_second.send(ApiResponse::Snapshot(Box::new(second))).unwrap();
        pool.run_until_stalled();

        // ...then the earlier one, which finishes last and wins.
        let first = snapshot_with(&["沙田区"], &[12345]);
        tx_first.send(ApiResponse::Snapshot(Box::new(first))).unwrap();
        pool.run_until_stalled();

        for id in CHART_IDS {
            assert_eq!(backend.live_instances(id), 1, "{}", id);
        }
        assert_eq!(backend.total_live(), 5);
        let regional = backend.last_option(REGIONAL_CHART_ID).unwrap();
        assert_eq!(regional["yAxis"]["data"][0], "沙田区");
        assert_eq!(view.shown.borrow().len(), 2);
    }

    /// Gated like `GatedSource`, also noting when each fetch began.
    struct ScheduledSource {
        epoch: tokio::time::Instant,
        started: RefCell<Vec<Duration>>,
        gated: GatedSource,
    }

    impl SnapshotSource for ScheduledSource {
        async fn fetch_snapshot(&self) -> Result<ApiResponse> {
            self.started.borrow_mut().push(self.epoch.elapsed());
            self.gated.fetch_snapshot().await
        }

        async fn fetch_geojson(&self) -> Result<GeoJson> {
            self.gated.fetch_geojson().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn run_forever_starts_cycles_on_schedule_without_waiting() {
        const INTERVAL: Duration = Duration::from_secs(30);
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let source = ScheduledSource {
            epoch: tokio::time::Instant::now(),
            started: RefCell::new(Vec::new()),
            gated: GatedSource {
                pending: RefCell::new(VecDeque::from([rx_first, rx_second])),
            },
        };
        let backend = RecordingBackend::default();
        let view = RecordingView::default();
        let poller = Poller::new(source, Dashboard::new(backend.clone()), view.clone());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runner = poller.clone();
                tokio::task::spawn_local(async move {
                    runner
                        .run_forever(
                            || tokio::time::sleep(INTERVAL),
                            |cycle| {
                                tokio::task::spawn_local(async move {
                                    cycle.tick().await;
                                });
                            },
                        )
                        .await;
                });

                tokio::time::sleep(Duration::from_millis(1)).await;
                assert_eq!(*poller.source.started.borrow(), vec![Duration::ZERO]);

                // Cycle 1 is still waiting on its response when cycle 2 starts.
                tokio::time::sleep(INTERVAL).await;
                let started = poller.source.started.borrow().clone();
                assert_eq!(started.len(), 2);
                assert!(started[1] >= INTERVAL && started[1] <= INTERVAL + Duration::from_millis(1));
                assert!(backend.events().is_empty());
                assert_eq!(poller.cycles.get(), 2);

                tx_second
                    .send(ApiResponse::Snapshot(Box::new(snapshot_with(&["东区"], &[800]))))
                    .unwrap();
                tx_first
                    .send(ApiResponse::Snapshot(Box::new(snapshot_with(&["沙田区"], &[12345]))))
                    .unwrap();
                tokio::time::sleep(Duration::from_millis(1)).await;
            })
            .await;

        for id in CHART_IDS {
            assert_eq!(backend.live_instances(id), 1, "{}", id);
        }
        assert_eq!(backend.total_live(), 5);
        assert_eq!(view.shown.borrow().len(), 2);
    }
}
