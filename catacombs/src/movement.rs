//! Single-step movement: planner-driven, with a greedy fallback.
//!
//! Each call is a stateless transformation of the current map + entity
//! snapshot; the only thing ever mutated is the mover's own position.

use ember_core::Point;
use ember_paths::PathRange;
use log::{debug, trace};

use crate::entity::{Entity, Id, blocking_entity_at};
use crate::gamemap::{GameMap, TravelGrid, TravelPather};

/// Paths of this many steps or more are discarded in favor of the greedy
/// fallback. Keeps actors from taking absurd detours across the whole map
/// when loitering near the obstruction reads better.
pub const MAX_PATH_STEPS: usize = 25;

impl Entity {
    /// Translate the position by `(dx, dy)` unconditionally.
    ///
    /// No validation; callers pre-check walkability and blocking.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.pos = self.pos.shift(dx, dy);
    }

    /// Euclidean distance from this entity to an arbitrary tile.
    pub fn distance(&self, p: Point) -> f64 {
        let d = p - self.pos;
        (f64::from(d.x * d.x) + f64::from(d.y * d.y)).sqrt()
    }

    /// Euclidean distance from this entity to another.
    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.distance(other.pos)
    }
}

/// Take one greedy step from `mover` toward `target`.
///
/// The direction is the Euclidean-normalized delta with each axis rounded
/// into {-1, 0, 1}. If the destination tile is terrain-blocked or occupied
/// by a blocking entity, the mover stays put; that no-op is the defined
/// behavior, not an error. A mover already on `target` does not move.
pub fn move_towards(entities: &mut [Entity], mover: Id, target: Point, map: &GameMap) {
    let pos = entities[mover].pos;
    let delta = target - pos;
    let dist = entities[mover].distance(target);
    if dist == 0.0 {
        return;
    }
    let dx = (f64::from(delta.x) / dist).round() as i32;
    let dy = (f64::from(delta.y) / dist).round() as i32;

    let dest = pos.shift(dx, dy);
    if !map.is_blocked(dest) && blocking_entity_at(entities, dest).is_none() {
        entities[mover].move_by(dx, dy);
    } else {
        trace!("{} stays put, {} is obstructed", entities[mover].name, dest);
    }
}

/// Move `mover` one step along the best route toward the entity `target`.
///
/// Rebuilds the obstacle grid from the map and the live entity list (mover
/// and target exempt from blocking), plans with a [`MAX_PATH_STEPS`] cap,
/// and applies the first step of the path. A mover already on the target's
/// tile is a trivial success and stays. When no usable path exists, falls
/// back to [`move_towards`], which may legitimately do nothing.
pub fn move_astar(
    entities: &mut [Entity],
    mover: Id,
    target: Id,
    map: &GameMap,
    pr: &mut PathRange,
) {
    let from = entities[mover].pos;
    let to = entities[target].pos;

    let grid = TravelGrid::build(map, entities, mover, target);
    let pather = TravelPather { grid: &grid };
    pr.set_range(map.bounds());

    match pr.astar_path(&pather, from, to, MAX_PATH_STEPS) {
        Some(path) => {
            // path[0] is the mover's own tile; a one-point path means the
            // mover is already there.
            if let Some(&step) = path.get(1) {
                trace!("{} steps {} -> {}", entities[mover].name, from, step);
                entities[mover].pos = step;
            }
        }
        None => {
            debug!(
                "{} has no usable path toward {}, taking a greedy step",
                entities[mover].name, to
            );
            move_towards(entities, mover, to, map);
        }
    }
}
