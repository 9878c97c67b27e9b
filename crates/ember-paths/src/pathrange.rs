use ember_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on f so BinaryHeap (a max-heap) pops smallest f first.
        // Among equal f, pop the largest g: deeper candidates win, which
        // fixes the tie-break order among equally good frontier nodes.
        other.f.cmp(&self.f).then(self.g.cmp(&other.g))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Coordinator for pathfinding over a grid rectangle.
///
/// `PathRange` owns the node array, open list and neighbor scratch buffer
/// used by the search, so repeated queries allocate nothing after the first
/// use. Node entries are invalidated lazily by a generation counter; a
/// query's result is identical to one run against cold caches.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range, reallocating caches only when needed.
    ///
    /// If the new size fits within the existing node array, the array is
    /// kept and the generation counter is bumped so stale entries are
    /// ignored. Otherwise the caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
