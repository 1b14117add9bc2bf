//! Where snapshots come from.
//!
//! The browser app fetches through `gloo-net`, the native CLI through
//! `reqwest`. Both sit behind this trait so the orchestrator stays the same.
//! Futures are not required to be `Send`: the browser is single threaded.

use crate::{ApiResponse, GeoJson, Result};

#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    /// GET the statistics endpoint and parse the body.
    async fn fetch_snapshot(&self) -> Result<ApiResponse>;

    /// GET the geography endpoint and parse the body.
    async fn fetch_geojson(&self) -> Result<GeoJson>;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for &S {
    async fn fetch_snapshot(&self) -> Result<ApiResponse> {
        (**self).fetch_snapshot().await
    }

    async fn fetch_geojson(&self) -> Result<GeoJson> {
        (**self).fetch_geojson().await
    }
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for std::rc::Rc<S> {
    async fn fetch_snapshot(&self) -> Result<ApiResponse> {
        (**self).fetch_snapshot().await
    }

    async fn fetch_geojson(&self) -> Result<GeoJson> {
        (**self).fetch_geojson().await
    }
}
