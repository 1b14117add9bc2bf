//! The 18 Hong Kong districts, keyed by their Chinese name (as reported by the
//! statistics API) and their English name (as used by the geography features).
//!
//! Both lookups read the same table, so the mapping is a bijection by
//! construction. Names outside the table pass through unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct District {
    /// Chinese district name, e.g. "中西区"
    pub local: &'static str,
    /// English district name, e.g. "Central and Western"
    pub canonical: &'static str,
}

const fn district(local: &'static str, canonical: &'static str) -> District {
    District { local, canonical }
}

pub static DISTRICTS: [District; 18] = [
    district("中西区", "Central and Western"),
    district("湾仔区", "Wan Chai"),
    district("东区", "Eastern"),
    district("南区", "Southern"),
    district("油尖旺区", "Yau Tsim Mong"),
    district("深水埗区", "Sham Shui Po"),
    district("九龙城区", "Kowloon City"),
    district("黄大仙区", "Wong Tai Sin"),
    district("观塘区", "Kwun Tong"),
    district("葵青区", "Kwai Tsing"),
    district("荃湾区", "Tsuen Wan"),
    district("屯门区", "Tuen Mun"),
    district("元朗区", "Yuen Long"),
    district("北区", "North"),
    district("大埔区", "Tai Po"),
    district("沙田区", "Sha Tin"),
    district("西贡区", "Sai Kung"),
    district("离岛区", "Islands"),
];

/// Chinese -> English. Unknown names are returned as-is.
pub fn to_canonical(name: &str) -> &str {
    DISTRICTS
        .iter()
        .find(|d| d.local == name)
        .map(|d| d.canonical)
        .unwrap_or(name)
}

/// English -> Chinese. Unknown names are returned as-is.
pub fn to_local(name: &str) -> &str {
    DISTRICTS
        .iter()
        .find(|d| d.canonical == name)
        .map(|d| d.local)
        .unwrap_or(name)
}
