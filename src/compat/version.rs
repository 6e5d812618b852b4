//! Major/minor version projection and ordering.
//!
//! Compatibility is decided on the first two dot-separated segments of a
//! version string. Patch levels and anything after them are ignored.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Project a version string onto its major/minor segments.
///
/// Splits on `.`, keeps at most the first two segments and joins them again.
/// Single-segment input is returned unchanged and no second segment is made
/// up; the empty string stays empty.
///
/// # Example
///
/// ```
/// use companion_compat::compat::major_minor;
///
/// assert_eq!(major_minor("1.2.3"), "1.2");
/// assert_eq!(major_minor("1"), "1");
/// assert_eq!(major_minor(""), "");
/// ```
pub fn major_minor(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// The major/minor projection of a version string.
///
/// Equality is string equality of the projection. Ordering compares
/// segment by segment: numeric segments numerically (so `2.10` is above
/// `2.9`), non-numeric segments as strings and after every numeric segment.
/// A projection that runs out of segments first is the lesser one, which
/// puts the empty projection below any non-empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MajorMinor(String);

impl MajorMinor {
    /// Project `version` onto its major/minor segments.
    pub fn of(version: &str) -> Self {
        Self(major_minor(version))
    }

    /// The projected string, e.g. `"3.4"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the projection is empty (the source version was empty).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        // "" splits into one empty segment; treat it as having none.
        (!self.0.is_empty())
            .then(|| self.0.split('.'))
            .into_iter()
            .flatten()
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MajorMinor {
    fn from(version: &str) -> Self {
        Self::of(version)
    }
}

impl PartialOrd for MajorMinor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MajorMinor {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut ours = self.segments();
        let mut theirs = other.segments();

        loop {
            match (ours.next(), theirs.next()) {
                (Some(a), Some(b)) => match compare_segment(a, b) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                // Equal segment-wise ("3.04" vs "3.4"): fall back to the raw
                // text so Ord agrees with Eq.
                (None, None) => return self.0.cmp(&other.0),
            }
        }
    }
}

/// Compare one version segment.
fn compare_segment(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_minor_drops_patch() {
        assert_eq!(major_minor("1.2.3"), "1.2");
        assert_eq!(major_minor("3.4.0"), "3.4");
        assert_eq!(major_minor("10.20.30.40"), "10.20");
    }

    #[test]
    fn major_minor_single_segment_unchanged() {
        assert_eq!(major_minor("1"), "1");
        assert_eq!(major_minor("beta"), "beta");
    }

    #[test]
    fn major_minor_empty_string() {
        assert_eq!(major_minor(""), "");
        assert!(MajorMinor::of("").is_empty());
    }

    #[test]
    fn major_minor_keeps_two_segment_input() {
        assert_eq!(major_minor("2.8"), "2.8");
    }

    #[test]
    fn major_minor_malformed_is_mechanical() {
        assert_eq!(major_minor("3..1"), "3.");
        assert_eq!(major_minor(".4.0"), ".4");
        assert_eq!(major_minor("v3.4.0-rc1"), "v3.4");
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        assert!(MajorMinor::of("2.10.0") > MajorMinor::of("2.9.0"));
        assert!(MajorMinor::of("10.0") > MajorMinor::of("9.99"));
        // Plain string ordering would say otherwise
        assert!("2.10" < "2.9");
    }

    #[test]
    fn ordering_major_then_minor() {
        assert!(MajorMinor::of("2.7.5") < MajorMinor::of("2.8.0"));
        assert!(MajorMinor::of("3.0.0") > MajorMinor::of("2.8.0"));
        assert!(MajorMinor::of("2.9") > MajorMinor::of("2.8"));
    }

    #[test]
    fn ordering_ignores_patch() {
        assert_eq!(
            MajorMinor::of("2.8.0").cmp(&MajorMinor::of("2.8.9")),
            Ordering::Equal
        );
    }

    #[test]
    fn empty_orders_below_everything_non_empty() {
        let empty = MajorMinor::of("");
        assert!(empty < MajorMinor::of("0"));
        assert!(empty < MajorMinor::of("0.0.1"));
        assert!(empty < MajorMinor::of("beta"));
        assert_eq!(empty.cmp(&MajorMinor::of("")), Ordering::Equal);
    }

    #[test]
    fn fewer_segments_orders_lower() {
        assert!(MajorMinor::of("3") < MajorMinor::of("3.0"));
        assert!(MajorMinor::of("3") > MajorMinor::of("2.9"));
    }

    #[test]
    fn numeric_segments_order_before_text() {
        assert!(MajorMinor::of("3.9") < MajorMinor::of("3.x"));
        assert!(MajorMinor::of("3.alpha") < MajorMinor::of("3.beta"));
    }

    #[test]
    fn leading_zeros_are_not_equal() {
        let padded = MajorMinor::of("3.04");
        let plain = MajorMinor::of("3.4");
        assert_ne!(padded, plain);
        assert_ne!(padded.cmp(&plain), Ordering::Equal);
    }

    #[test]
    fn sorting_mixed_projections() {
        let mut versions: Vec<MajorMinor> = ["2.10", "", "2.9", "x", "1", "2.9.1"]
            .into_iter()
            .map(MajorMinor::of)
            .collect();
        versions.sort();
        let sorted: Vec<&str> = versions.iter().map(MajorMinor::as_str).collect();
        assert_eq!(sorted, vec!["", "1", "2.9", "2.9", "2.10", "x"]);
    }

    #[test]
    fn display_shows_projection() {
        assert_eq!(MajorMinor::of("3.4.1").to_string(), "3.4");
        assert_eq!(MajorMinor::from("1.2.3").as_str(), "1.2");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&MajorMinor::of("3.4.0")).unwrap();
        assert_eq!(json, "\"3.4\"");
    }
}
