use std::collections::BinaryHeap;

use ember_core::Point;

use crate::PathRange;
use crate::distance::DIAGONAL_COST;
use crate::pathrange::NodeRef;
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*, giving up on
    /// routes of `max_steps` steps or more.
    ///
    /// Returns the full path including both endpoints, or `None` if no path
    /// exists within the current range or the shortest one found is too
    /// long. `from == to` is a trivial success (a one-point path), provided
    /// `max_steps` allows zero steps.
    ///
    /// The search is deterministic: successors are expanded in the order the
    /// pather appends them, and equally promising frontier nodes are popped
    /// deepest-first, so identical inputs always reconstruct the same path.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        max_steps: usize,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            if max_steps == 0 {
                return None;
            }
            return Some(vec![from]);
        }

        // Any route of max_steps steps or more costs more than this, even
        // if every step were diagonal. Used to prune hopeless successors.
        let cost_cap = i32::try_from(max_steps)
            .unwrap_or(i32::MAX)
            .saturating_mul(DIAGONAL_COST);

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);
                if tentative_g > cost_cap {
                    continue;
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already visited this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    g: n.g,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct the path, goal backwards to start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        // The cost cap above is conservative; the step count decides.
        if path.len() - 1 >= max_steps {
            return None;
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{CARDINAL_COST, octile};
    use crate::traits::{Pather, WeightedPather};
    use ember_core::Range;

    /// Test pather over a boolean walkability grid, 8-way movement.
    struct GridPather {
        width: i32,
        height: i32,
        walkable: Vec<bool>,
    }

    impl GridPather {
        fn open(width: i32, height: i32) -> Self {
            Self {
                width,
                height,
                walkable: vec![true; (width * height) as usize],
            }
        }

        fn block(&mut self, p: Point) {
            self.walkable[(p.y * self.width + p.x) as usize] = false;
        }

        fn is_walkable(&self, p: Point) -> bool {
            p.x >= 0
                && p.y >= 0
                && p.x < self.width
                && p.y < self.height
                && self.walkable[(p.y * self.width + p.x) as usize]
        }

        fn range(&self) -> Range {
            Range::new(0, 0, self.width, self.height)
        }
    }

    impl Pather for GridPather {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_8() {
                if self.is_walkable(n) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for GridPather {
        fn cost(&self, from: Point, to: Point) -> i32 {
            if from.x != to.x && from.y != to.y {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            }
        }
    }

    impl AstarPather for GridPather {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            octile(from, to)
        }
    }

    fn assert_valid_path(gp: &GridPather, path: &[Point], from: Point, to: Point) {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && (d.x != 0 || d.y != 0));
            assert!(gp.is_walkable(pair[1]));
        }
    }

    #[test]
    fn open_grid_takes_the_diagonal() {
        let gp = GridPather::open(10, 10);
        let mut pr = PathRange::new(gp.range());
        let path = pr
            .astar_path(&gp, Point::ZERO, Point::new(9, 9), usize::MAX)
            .unwrap();
        // The unique cheapest route is the pure diagonal.
        assert_eq!(path.len(), 10);
        for (i, p) in path.iter().enumerate() {
            assert_eq!(*p, Point::new(i as i32, i as i32));
        }
    }

    #[test]
    fn diagonal_first_on_mixed_delta() {
        let gp = GridPather::open(10, 10);
        let mut pr = PathRange::new(gp.range());
        let path = pr
            .astar_path(&gp, Point::ZERO, Point::new(5, 1), usize::MAX)
            .unwrap();
        assert_valid_path(&gp, &path, Point::ZERO, Point::new(5, 1));
        assert_eq!(path.len(), 6);
        // Equal-cost routes exist; the deepest-first tie-break commits to
        // the diagonal while both axis deltas remain non-zero.
        assert_eq!(path[1], Point::new(1, 1));
    }

    #[test]
    fn routes_around_a_wall() {
        let mut gp = GridPather::open(8, 8);
        // Vertical wall at x=3 with a gap at y=6.
        for y in 0..6 {
            gp.block(Point::new(3, y));
        }
        let mut pr = PathRange::new(gp.range());
        let from = Point::new(1, 1);
        let to = Point::new(6, 1);
        let path = pr.astar_path(&gp, from, to, usize::MAX).unwrap();
        assert_valid_path(&gp, &path, from, to);
        assert!(path.iter().any(|p| p.y >= 5), "must detour through the gap");
    }

    #[test]
    fn no_path_when_sealed_off() {
        let mut gp = GridPather::open(8, 8);
        for y in 0..8 {
            gp.block(Point::new(3, y));
        }
        let mut pr = PathRange::new(gp.range());
        assert_eq!(
            pr.astar_path(&gp, Point::new(1, 1), Point::new(6, 1), usize::MAX),
            None
        );
    }

    #[test]
    fn too_long_a_route_is_rejected() {
        let gp = GridPather::open(30, 3);
        let mut pr = PathRange::new(gp.range());
        let from = Point::new(0, 1);
        let to = Point::new(28, 1);
        // 28 steps: fine with a generous bound, rejected at 25.
        assert!(pr.astar_path(&gp, from, to, usize::MAX).is_some());
        assert_eq!(pr.astar_path(&gp, from, to, 25), None);
        // Exactly at the boundary: a path of max_steps steps is too long.
        assert_eq!(pr.astar_path(&gp, from, to, 28), None);
        assert!(pr.astar_path(&gp, from, to, 29).is_some());
    }

    #[test]
    fn start_equals_goal_is_trivial() {
        let gp = GridPather::open(5, 5);
        let mut pr = PathRange::new(gp.range());
        let p = Point::new(2, 2);
        assert_eq!(pr.astar_path(&gp, p, p, 25), Some(vec![p]));
        assert_eq!(pr.astar_path(&gp, p, p, 0), None);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let mut gp = GridPather::open(12, 12);
        for y in 2..10 {
            gp.block(Point::new(6, y));
        }
        let mut pr = PathRange::new(gp.range());
        let from = Point::new(1, 5);
        let to = Point::new(10, 6);
        let first = pr.astar_path(&gp, from, to, 25);
        let second = pr.astar_path(&gp, from, to, 25);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_endpoints_yield_none() {
        let gp = GridPather::open(5, 5);
        let mut pr = PathRange::new(gp.range());
        assert_eq!(
            pr.astar_path(&gp, Point::new(-1, 0), Point::new(2, 2), 25),
            None
        );
        assert_eq!(
            pr.astar_path(&gp, Point::new(2, 2), Point::new(5, 5), 25),
            None
        );
    }
}
