//! Map state and the per-turn obstacle model.

use ember_core::{Point, Range};
use ember_paths::{AstarPather, CARDINAL_COST, DIAGONAL_COST, Pather, WeightedPather, octile};

use crate::entity::{Entity, Id};
use crate::terrain::Tile;

/// The static tile map for one dungeon level.
///
/// Read-only from the movement core's perspective; tiles are written by map
/// generation collaborators through [`GameMap::set_tile`].
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl GameMap {
    /// Create a map of the given dimensions, all floor.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "zero-area map");
        Self {
            width,
            height,
            tiles: vec![Tile::floor(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The map rectangle, `[0, width) × [0, height)`.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether position p is within map bounds.
    pub fn in_map(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// The tile at a point, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        if !self.in_map(p) {
            return None;
        }
        Some(self.tiles[self.idx(p)])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set_tile(&mut self, p: Point, t: Tile) {
        if !self.in_map(p) {
            return;
        }
        let i = self.idx(p);
        self.tiles[i] = t;
    }

    /// Whether movement onto `p` is barred by terrain. Out-of-bounds
    /// positions count as blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.tile(p).is_none_or(|t| t.blocked)
    }

    /// Whether `p` blocks line of sight. Out-of-bounds counts as opaque.
    pub fn blocks_sight(&self, p: Point) -> bool {
        self.tile(p).is_none_or(|t| t.block_sight)
    }
}

// ---------------------------------------------------------------------------
// Obstacle model
// ---------------------------------------------------------------------------

/// Ephemeral walkability/visibility grid for one planning call.
///
/// Built fresh from the map and the live entity list every time a path is
/// requested, then dropped; nothing is cached across turns. A tile is
/// walkable iff its map tile is not blocked and no blocking entity other
/// than the mover and its target stands on it. Transparency mirrors the
/// terrain only; entities never occlude sight here.
pub struct TravelGrid {
    width: i32,
    height: i32,
    transparent: Vec<bool>,
    walkable: Vec<bool>,
}

impl TravelGrid {
    /// Scan the map and entity list into a fresh grid, with `mover` and
    /// `target` exempt from the blocking pass.
    pub fn build(map: &GameMap, entities: &[Entity], mover: Id, target: Id) -> Self {
        let n = (map.width() * map.height()) as usize;
        let mut grid = Self {
            width: map.width(),
            height: map.height(),
            transparent: vec![false; n],
            walkable: vec![false; n],
        };

        for p in map.bounds().iter() {
            let i = grid.idx(p);
            grid.transparent[i] = !map.blocks_sight(p);
            grid.walkable[i] = !map.is_blocked(p);
        }

        for (id, e) in entities.iter().enumerate() {
            if !e.blocks || id == mover || id == target {
                continue;
            }
            debug_assert!(map.in_map(e.pos), "entity {} off-map at {}", e.name, e.pos);
            if map.in_map(e.pos) {
                let i = grid.idx(e.pos);
                grid.walkable[i] = false;
            }
        }

        grid
    }

    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    fn in_grid(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Whether an actor may occupy `p` this turn. Out-of-bounds is not
    /// walkable.
    pub fn walkable(&self, p: Point) -> bool {
        self.in_grid(p) && self.walkable[self.idx(p)]
    }

    /// Whether `p` lets sight through, for callers reusing the grid for
    /// visibility queries. Out-of-bounds is opaque.
    pub fn transparent(&self, p: Point) -> bool {
        self.in_grid(p) && self.transparent[self.idx(p)]
    }
}

/// 8-way pather over a [`TravelGrid`] with true-distance step costs.
pub struct TravelPather<'a> {
    pub grid: &'a TravelGrid,
}

impl Pather for TravelPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for np in p.neighbors_8() {
            if self.grid.walkable(np) {
                buf.push(np);
            }
        }
    }
}

impl WeightedPather for TravelPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        if from.x != to.x && from.y != to.y {
            DIAGONAL_COST
        } else {
            CARDINAL_COST
        }
    }
}

impl AstarPather for TravelPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled_box(width: i32, height: i32) -> GameMap {
        let mut map = GameMap::new(width, height);
        for p in map.bounds().iter() {
            if p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1 {
                map.set_tile(p, Tile::wall());
            }
        }
        map
    }

    #[test]
    fn map_accessors() {
        let map = walled_box(6, 5);
        assert_eq!(map.bounds(), Range::new(0, 0, 6, 5));
        assert!(map.is_blocked(Point::new(0, 0)));
        assert!(!map.is_blocked(Point::new(2, 2)));
        assert!(map.blocks_sight(Point::new(5, 4)));
        // Out of bounds reads as blocked and opaque.
        assert_eq!(map.tile(Point::new(6, 0)), None);
        assert!(map.is_blocked(Point::new(-1, 2)));
        assert!(map.blocks_sight(Point::new(2, 5)));
    }

    #[test]
    fn set_tile_out_of_bounds_is_ignored() {
        let mut map = GameMap::new(4, 4);
        map.set_tile(Point::new(9, 9), Tile::wall());
        assert!(!map.is_blocked(Point::new(3, 3)));
    }

    #[test]
    fn grid_reflects_terrain() {
        let map = walled_box(6, 5);
        let grid = TravelGrid::build(&map, &[], 0, 0);
        assert!(!grid.walkable(Point::new(0, 0)));
        assert!(!grid.transparent(Point::new(0, 0)));
        assert!(grid.walkable(Point::new(3, 2)));
        assert!(grid.transparent(Point::new(3, 2)));
        assert!(!grid.walkable(Point::new(-1, -1)));
    }

    #[test]
    fn blocking_entities_stamp_unwalkable_but_stay_transparent() {
        let map = walled_box(8, 8);
        let entities = vec![
            Entity::new("mover", '@', Point::new(1, 1), true),
            Entity::new("target", 'T', Point::new(6, 6), true),
            Entity::new("rat", 'r', Point::new(3, 3), true),
            Entity::new("scroll", '?', Point::new(4, 4), false),
        ];
        let grid = TravelGrid::build(&map, &entities, 0, 1);
        // The rat obstructs its tile; sight through it is unaffected.
        assert!(!grid.walkable(Point::new(3, 3)));
        assert!(grid.transparent(Point::new(3, 3)));
        // Items never obstruct.
        assert!(grid.walkable(Point::new(4, 4)));
        // Mover and target tiles stay walkable despite both blocking.
        assert!(grid.walkable(Point::new(1, 1)));
        assert!(grid.walkable(Point::new(6, 6)));
    }

    #[test]
    fn pather_costs_and_neighbors() {
        let map = walled_box(5, 5);
        let entities = vec![
            Entity::new("mover", '@', Point::new(1, 1), true),
            Entity::new("target", 'T', Point::new(3, 3), true),
            Entity::new("rat", 'r', Point::new(2, 1), true),
        ];
        let grid = TravelGrid::build(&map, &entities, 0, 1);
        let pather = TravelPather { grid: &grid };

        let mut buf = Vec::new();
        pather.neighbors(Point::new(1, 1), &mut buf);
        // Walls on two sides, rat on a third.
        assert_eq!(buf, vec![Point::new(2, 2), Point::new(1, 2)]);

        assert_eq!(pather.cost(Point::new(1, 1), Point::new(2, 1)), CARDINAL_COST);
        assert_eq!(pather.cost(Point::new(1, 1), Point::new(2, 2)), DIAGONAL_COST);
        assert_eq!(
            pather.estimate(Point::new(1, 1), Point::new(3, 3)),
            2 * DIAGONAL_COST
        );
    }
}
