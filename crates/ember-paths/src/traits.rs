use ember_core::Point;

/// Base pathfinding interface: neighbor enumeration only.
pub trait Pather {
    /// Append the valid successors of `p` into `buf`.
    ///
    /// The caller clears `buf` beforehand. Successors must be appended in a
    /// fixed order so that searches are reproducible.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose edges carry a positive weight.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` onto the adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather usable with A*: adds a heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimated remaining cost from `from` to `to`. Must be admissible
    /// (never overestimate), or the search can return non-shortest paths.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
