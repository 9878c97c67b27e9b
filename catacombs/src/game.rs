//! Session state driving autonomous movement.

use ember_core::Point;
use ember_paths::PathRange;
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use crate::entity::{Entity, Id, blocking_entity_at};
use crate::gamemap::GameMap;
use crate::movement::move_astar;

/// Player entity ID (spawned first by convention).
pub const PLAYER_ID: Id = 0;

/// One game session: the map, its entities and the reusable search scratch.
pub struct Game {
    pub entities: Vec<Entity>,
    pub map: GameMap,
    pub pr: PathRange,
    pub turn: i32,
    pub rng: SmallRng,
}

impl Game {
    pub fn new(map: GameMap) -> Self {
        let pr = PathRange::new(map.bounds());
        Self {
            entities: Vec::new(),
            map,
            pr,
            turn: 0,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Add an entity to the session, returning its id.
    pub fn spawn(&mut self, entity: Entity) -> Id {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// The player entity.
    pub fn player(&self) -> &Entity {
        &self.entities[PLAYER_ID]
    }

    /// Find a random unoccupied floor tile, falling back to the map center.
    pub fn random_floor(&mut self) -> Point {
        for _ in 0..10000 {
            let p = Point::new(
                self.rng.random_range(0..self.map.width()),
                self.rng.random_range(0..self.map.height()),
            );
            if !self.map.is_blocked(p) && blocking_entity_at(&self.entities, p).is_none() {
                return p;
            }
        }
        Point::new(self.map.width() / 2, self.map.height() / 2)
    }

    /// Run one turn: every blocking non-player entity takes a step toward
    /// the player.
    pub fn chase_step(&mut self) {
        for id in 0..self.entities.len() {
            if id == PLAYER_ID || !self.entities[id].blocks {
                continue;
            }
            move_astar(&mut self.entities, id, PLAYER_ID, &self.map, &mut self.pr);
        }
        self.turn += 1;
    }
}
