use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary figures for the most recent reporting day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestStats {
    pub latest_date: NaiveDate,
    pub new_confirmed: u64,
    pub cumulative_confirmed: u64,
    pub existing_confirmed: u64,
    pub new_recovered: u64,
    pub new_deaths: u64,
    #[serde(default)]
    pub cumulative_recovered: Option<u64>,
    #[serde(default)]
    pub cumulative_deaths: Option<u64>,
}

/// Territory-wide daily series. Every vector is index-aligned with `dates`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyData {
    pub dates: Vec<NaiveDate>,
    pub new_confirmed: Vec<u64>,
    pub existing_confirmed: Vec<u64>,
    pub cumulative_confirmed: Vec<u64>,
    #[serde(default)]
    pub new_recovered: Vec<u64>,
    #[serde(default)]
    pub new_deaths: Vec<u64>,
}

impl DailyData {
    /// Dates rendered as `YYYY-MM-DD` category labels.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format(crate::config::DATE_FORMAT).to_string())
            .collect()
    }
}

/// Cumulative confirmed cases per district, `regions[i]` pairs with `confirmed[i]`.
///
/// Region names arrive in the source locale (Chinese district names).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionalData {
    pub regions: Vec<String>,
    pub confirmed: Vec<u64>,
}

impl RegionalData {
    /// Iterate `(region, confirmed)` pairs. A region without a count reads as 0.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (r.as_str(), self.confirmed.get(i).copied().unwrap_or(0)))
    }

    /// Largest confirmed count, 0 for an empty set.
    pub fn max_confirmed(&self) -> u64 {
        self.confirmed.iter().copied().max().unwrap_or(0)
    }
}

/// One poll's full statistics payload from `/api/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpidemicSnapshot {
    pub latest_stats: LatestStats,
    pub daily_data: DailyData,
    pub regional_data: RegionalData,
}

/// Body of `/api/data`: either a snapshot or an `{ "error": ... }` envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Error { error: String },
    Snapshot(Box<EpidemicSnapshot>),
}

impl ApiResponse {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Turn the error envelope into `DashboardError::Api`.
    pub fn into_snapshot(self) -> crate::Result<EpidemicSnapshot> {
        match self {
            ApiResponse::Snapshot(snapshot) => Ok(*snapshot),
            ApiResponse::Error { error } => Err(crate::DashboardError::Api(error)),
        }
    }
}
