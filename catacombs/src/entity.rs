//! Entities and the blocking-entity index.

use ember_core::Point;

/// Type alias for entity IDs (index into the session's entity vec).
pub type Id = usize;

/// A positioned thing on the map: player, monster, item, corpse.
///
/// Movement only reads `pos`, `blocks` and identity (the entity's index),
/// and writes the mover's own `pos`. Everything else an entity carries in
/// the full game (stats, inventory, AI state) lives with its owner.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub ch: char,
    pub pos: Point,
    /// Whether this entity physically obstructs movement and pathing.
    pub blocks: bool,
}

impl Entity {
    pub fn new(name: &str, ch: char, pos: Point, blocks: bool) -> Self {
        Self {
            name: name.to_string(),
            ch,
            pos,
            blocks,
        }
    }
}

/// Find a blocking entity occupying `p`, if any.
///
/// Forward scan; the first match wins. Game invariants keep at most one
/// blocker per tile, so first-match is only a deterministic answer for
/// states that should not occur, not a repair of them.
pub fn blocking_entity_at(entities: &[Entity], p: Point) -> Option<Id> {
    entities
        .iter()
        .position(|e| e.blocks && e.pos == p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_finds_blockers_only() {
        let entities = vec![
            Entity::new("scroll", '?', Point::new(2, 2), false),
            Entity::new("rat", 'r', Point::new(2, 2), true),
            Entity::new("hound", 'h', Point::new(4, 4), true),
        ];
        // The item at (2, 2) does not block; the rat does.
        assert_eq!(blocking_entity_at(&entities, Point::new(2, 2)), Some(1));
        assert_eq!(blocking_entity_at(&entities, Point::new(4, 4)), Some(2));
        assert_eq!(blocking_entity_at(&entities, Point::new(0, 0)), None);
    }

    #[test]
    fn index_is_first_match() {
        let entities = vec![
            Entity::new("a", 'a', Point::new(1, 1), true),
            Entity::new("b", 'b', Point::new(1, 1), true),
        ];
        assert_eq!(blocking_entity_at(&entities, Point::new(1, 1)), Some(0));
    }
}
