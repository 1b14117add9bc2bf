//! Core types and helpers for the Hong Kong epidemic dashboard.
//!
//! This crate provides:
//! - `snapshot`: the `/api/data` payload and its error envelope
//! - `geo`: a thin wrapper over the `/api/hongkong_geojson` document
//! - `district`: the Chinese/English district name table
//! - `format`: number formatting for metric cards and chart labels
//! - `source`: the data-source seam used by the fetch orchestrator
//! - `api` (feature `api`): a `reqwest` client for native tools

pub mod config;
pub mod district;
pub mod error;
pub mod format;
pub mod geo;
pub mod snapshot;
pub mod source;

#[cfg(feature = "api")]
pub mod api;

pub use error::{DashboardError, Result};
pub use geo::GeoJson;
pub use snapshot::{ApiResponse, DailyData, EpidemicSnapshot, LatestStats, RegionalData};
