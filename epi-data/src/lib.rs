//! Data shaping for the dashboard charts.
//!
//! This crate handles transforming an `EpidemicSnapshot` into the derived
//! values each chart needs: padded axis bounds, moving averages, risk tiers
//! and choropleth entries.

/// Value-axis bounds for the dual-axis trend chart.
pub mod axis {
    /// Axis maxima are rounded up to a multiple of this step.
    pub const AXIS_STEP: u64 = 10_000;

    /// Head-room above the largest value.
    pub const AXIS_PADDING: f64 = 1.1;

    /// Pad `max` by 10% and round up to the next multiple of ten thousand.
    ///
    /// `12345` -> `20000`, `0` -> `0`.
    pub fn padded_max(max: u64) -> u64 {
        let steps = (max as f64 * AXIS_PADDING / AXIS_STEP as f64).ceil();
        steps as u64 * AXIS_STEP
    }

    /// Largest value across several series, 0 if all are empty.
    pub fn series_max(series: &[&[u64]]) -> u64 {
        series
            .iter()
            .flat_map(|s| s.iter().copied())
            .max()
            .unwrap_or(0)
    }

}

/// Trailing moving averages.
pub mod moving_average {
    /// Window used by the trend-analysis chart.
    pub const WEEK: usize = 7;

    /// Trailing mean over `window` entries, rounded to the nearest integer.
    ///
    /// The first `window - 1` positions have no full window and are `None`;
    /// there is no partial-window averaging.
    pub fn trailing(values: &[u64], window: usize) -> Vec<Option<u64>> {
        if window == 0 {
            return vec![None; values.len()];
        }
        (0..values.len())
            .map(|i| {
                if i + 1 < window {
                    return None;
                }
                let sum: u64 = values[i + 1 - window..=i].iter().sum();
                Some((sum as f64 / window as f64).round() as u64)
            })
            .collect()
    }

    /// 7-day trailing average of daily new cases.
    pub fn seven_day(values: &[u64]) -> Vec<Option<u64>> {
        trailing(values, WEEK)
    }

}

/// Risk tiers for the warning pie.
pub mod risk {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RiskLevel {
        Low,
        Medium,
        High,
        Critical,
    }

    /// A tier covers `min..=max` confirmed cases (`max == None` is unbounded).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RiskTier {
        pub level: RiskLevel,
        pub min: u64,
        pub max: Option<u64>,
        pub label: &'static str,
        pub color: &'static str,
    }

    impl RiskTier {
        pub fn contains(&self, count: u64) -> bool {
            count >= self.min && self.max.map_or(true, |max| count <= max)
        }
    }

    /// Contiguous, non-overlapping, ascending.
    pub static RISK_TIERS: [RiskTier; 4] = [
        RiskTier {
            level: RiskLevel::Low,
            min: 0,
            max: Some(1000),
            label: "低风险",
            color: "#64ffda",
        },
        RiskTier {
            level: RiskLevel::Medium,
            min: 1001,
            max: Some(5000),
            label: "中风险",
            color: "#ffd166",
        },
        RiskTier {
            level: RiskLevel::High,
            min: 5001,
            max: Some(10000),
            label: "高风险",
            color: "#ff9f1c",
        },
        RiskTier {
            level: RiskLevel::Critical,
            min: 10001,
            max: None,
            label: "极高风险",
            color: "#ff6b6b",
        },
    ];

    /// First tier (in ascending order) containing `count`.
    pub fn classify(count: u64) -> &'static RiskTier {
        RISK_TIERS
            .iter()
            .find(|tier| tier.contains(count))
            .unwrap_or(&RISK_TIERS[0])
    }

    /// A region with its count and tier.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RegionRisk {
        pub region: String,
        pub confirmed: u64,
        pub tier: &'static RiskTier,
    }

    pub fn classify_regions(regional: &epi_core::RegionalData) -> Vec<RegionRisk> {
        regional
            .pairs()
            .map(|(region, confirmed)| RegionRisk {
                region: region.to_string(),
                confirmed,
                tier: classify(confirmed),
            })
            .collect()
    }

}

/// Choropleth entries keyed by geography feature name.
pub mod choropleth {
    use epi_core::district::{to_canonical, to_local};
    use epi_core::RegionalData;

    #[derive(Debug, Clone, PartialEq)]
    pub struct MapEntry {
        /// Canonical (English) name, matching the geography feature.
        pub name: String,
        /// Display (Chinese) name.
        pub local_name: String,
        /// `None` for features with no regional row at all.
        pub value: Option<u64>,
    }

    impl MapEntry {
        /// Zero and missing counts both read as "no data".
        pub fn has_data(&self) -> bool {
            self.value.map_or(false, |v| v > 0)
        }
    }

    /// One entry per region (renamed to its canonical form), followed by one
    /// valueless entry for each geography feature no region matched.
    pub fn entries(regional: &RegionalData, feature_names: &[&str]) -> Vec<MapEntry> {
        let mut entries: Vec<MapEntry> = regional
            .pairs()
            .map(|(region, confirmed)| {
                let name = to_canonical(region);
                MapEntry {
                    name: name.to_string(),
                    local_name: to_local(name).to_string(),
                    value: Some(confirmed),
                }
            })
            .collect();

        for feature in feature_names {
            if !entries.iter().any(|e| e.name == *feature) {
                entries.push(MapEntry {
                    name: feature.to_string(),
                    local_name: to_local(feature).to_string(),
                    value: None,
                });
            }
        }
        entries
    }

}
