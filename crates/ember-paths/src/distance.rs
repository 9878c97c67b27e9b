use ember_core::Point;

/// Scaled cost of a cardinal step (1.0 × 100).
pub const CARDINAL_COST: i32 = 100;

/// Scaled cost of a diagonal step (1.41 × 100).
///
/// The discretized √2 keeps diagonal movement weighted by true distance
/// instead of being free, while all arithmetic stays integral.
pub const DIAGONAL_COST: i32 = 141;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance in scaled cost units: the exact cost of the cheapest
/// 8-directional route between `a` and `b` on an obstacle-free grid.
///
/// This is the admissible heuristic for searches using [`CARDINAL_COST`]
/// and [`DIAGONAL_COST`] edge weights.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    let straight = dx.max(dy) - diag;
    DIAGONAL_COST * diag + CARDINAL_COST * straight
}
