use std::cmp::Ordering;

use crate::segment::{Segment, tokenize};

/// Compare two version (or release) strings the way `rpmvercmp` does.
///
/// Both strings are split into segments (see [`tokenize`]) which are then compared pairwise
/// until one pair differs:
///
/// * `~` sorts before anything else, including the end of the string, so `1.0~rc1 < 1.0`.
/// * `^` sorts after the end of the string but before anything else, so
///   `1.0 < 1.0^git1 < 1.0.1`.
/// * a numeric segment is always newer than an alphabetic one.
/// * numeric segments are compared by value (leading zeros are ignored, any length is allowed),
///   alphabetic segments byte by byte.
/// * if one string runs out first, it is the older one.
///
/// Every pair of strings has a definite answer. `compare_versions(a, b) as i32` gives the
/// C style `-1` / `0` / `1`.
pub fn compare_versions(version1: &str, version2: &str) -> Ordering {
    if version1 == version2 {
        return Ordering::Equal;
    }

    let mut left = tokenize(version1);
    let mut right = tokenize(version2);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,

            // a pending tilde makes that side a pre-release of the other one
            (Some(Segment::Tilde), Some(Segment::Tilde)) => continue,
            (Some(Segment::Tilde), _) => return Ordering::Less,
            (_, Some(Segment::Tilde)) => return Ordering::Greater,

            (Some(Segment::Caret), Some(Segment::Caret)) => continue,
            (Some(Segment::Caret), None) => return Ordering::Greater,
            (None, Some(Segment::Caret)) => return Ordering::Less,
            (Some(Segment::Caret), Some(_)) => return Ordering::Less,
            (Some(_), Some(Segment::Caret)) => return Ordering::Greater,

            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,

            (Some(Segment::Digits(a)), Some(Segment::Digits(b))) => compare_numeric(a, b),
            (Some(Segment::Alpha(a)), Some(Segment::Alpha(b))) => a.cmp(b),
            (Some(Segment::Digits(_)), Some(Segment::Alpha(_))) => Ordering::Greater,
            (Some(Segment::Alpha(_)), Some(Segment::Digits(_))) => Ordering::Less,
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// [`compare_versions`] with the result as `-1`, `0` or `1`
pub fn rpmvercmp(version1: &str, version2: &str) -> i32 {
    compare_versions(version1, version2) as i32
}

/// Compare two runs of ascii digits by numeric value without parsing them.
///
/// Leading zeros are dropped, then the longer run is the bigger number and runs of equal
/// length compare lexically.
pub(crate) fn compare_numeric(digits1: &str, digits2: &str) -> Ordering {
    let digits1 = digits1.trim_start_matches('0');
    let digits2 = digits2.trim_start_matches('0');

    digits1
        .len()
        .cmp(&digits2.len())
        .then_with(|| digits1.cmp(digits2))
}
