//! Number formatting shared by the metric cards and chart labels.

/// Suffix for counts expressed in units of ten thousand.
pub const WAN_SUFFIX: &str = "万";

const WAN: u64 = 10_000;

/// Format a case count for display.
///
/// Counts of 10000 and above are shown in units of ten thousand with one
/// decimal place (`12345` -> `"1.2万"`). Smaller counts use comma digit
/// grouping (`1234` -> `"1,234"`).
///
/// Exact ties round up (`12500` -> `"1.3万"`).
pub fn format_number(n: u64) -> String {
    if n >= WAN {
        return format!("{}{}", wan_tenths(n), WAN_SUFFIX);
    }
    group_thousands(n)
}

fn wan_tenths(n: u64) -> String {
    // `n / 10000` is an exact binary tie only when it ends in .25 or .75,
    // where `{:.1}` would round to even.
    if n % 5_000 == 2_500 {
        let tenths = n / 1_000 + 1;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", n as f64 / WAN as f64)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_have_no_suffix() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(500), "500");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(9999), "9,999");
    }

    #[test]
    fn large_counts_use_wan() {
        assert_eq!(format_number(10000), "1.0万");
        assert_eq!(format_number(12345), "1.2万");
        assert_eq!(format_number(1_185_000), "118.5万");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_number(12500), "1.3万");
        assert_eq!(format_number(22500), "2.3万");
        assert_eq!(format_number(17500), "1.8万");
        assert_eq!(format_number(99_997_500), "9999.8万");
        // Not exact in binary, so the stored value decides.
        assert_eq!(format_number(11500), "1.1万");
        assert_eq!(format_number(10500), "1.1万");
    }

    #[test]
    fn suffix_boundary() {
        for n in [9998, 9999] {
            assert!(!format_number(n).ends_with(WAN_SUFFIX));
        }
        for n in [10000, 10001, 250_000] {
            assert!(format_number(n).ends_with(WAN_SUFFIX));
        }
    }
}
