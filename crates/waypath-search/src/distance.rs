use waypath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The search heuristic. It stays admissible and consistent only while every
/// move is cardinal and costs exactly 1. Distances too large for an `i32`
/// saturate at `i32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = (i64::from(a.x) - i64::from(b.x)).abs() + (i64::from(a.y) - i64::from(b.y)).abs();
    i32::try_from(d).unwrap_or(i32::MAX)
}
