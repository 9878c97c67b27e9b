//! Tile attributes.

/// Static attributes of one map cell.
///
/// Tiles are immutable during a turn; only map generation or destructible
/// terrain logic (external to this crate) rewrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Impassable to movement.
    pub blocked: bool,
    /// Opaque to line of sight. Distinct from `blocked`: a chasm blocks
    /// movement but not sight, fog the other way around.
    pub block_sight: bool,
}

impl Tile {
    /// An open floor tile.
    pub const fn floor() -> Self {
        Self {
            blocked: false,
            block_sight: false,
        }
    }

    /// A solid wall tile.
    pub const fn wall() -> Self {
        Self {
            blocked: true,
            block_sight: true,
        }
    }

    /// Character representation of the tile.
    pub fn rune(self) -> char {
        if self.blocked { '#' } else { '.' }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert!(!Tile::floor().blocked);
        assert!(!Tile::floor().block_sight);
        assert!(Tile::wall().blocked);
        assert!(Tile::wall().block_sight);
        assert_eq!(Tile::default(), Tile::floor());
    }

    #[test]
    fn runes() {
        assert_eq!(Tile::wall().rune(), '#');
        assert_eq!(Tile::floor().rune(), '.');
    }
}
