//! Catacombs — turn-based grid movement built on the ember crates.
//!
//! The crate provides the per-turn movement core of a tile-based game:
//! a static tile map, an entity collection, an ephemeral obstacle grid
//! rebuilt from both every planning call, and a movement controller that
//! prefers a bounded A* route and falls back to a greedy step.

pub mod entity;
pub mod game;
pub mod gamemap;
pub mod movement;
pub mod terrain;

pub use entity::{Entity, Id, blocking_entity_at};
pub use game::{Game, PLAYER_ID};
pub use gamemap::{GameMap, TravelGrid, TravelPather};
pub use movement::{MAX_PATH_STEPS, move_astar, move_towards};
pub use terrain::Tile;
