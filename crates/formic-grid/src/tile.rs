//! Per-cell terrain classification and the observation vocabulary.

use formic_core::PlayerId;
use std::fmt;

/// What a board cell is currently known to hold.
///
/// `Unknown` is the initial state of every cell; it flips to `Land` the
/// first time the cell becomes visible. `Water` is permanent. `Food`,
/// `Dead`, and `Ant` are per-turn states that revert to `Land` when the
/// next turn's feed no longer reports them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tile {
    /// Never observed.
    #[default]
    Unknown,
    /// Observed, passable, empty.
    Land,
    /// Impassable, permanently.
    Water,
    /// Holds a food item.
    Food,
    /// An agent died here this turn.
    Dead,
    /// Occupied by a live agent of the given player.
    Ant(PlayerId),
}

impl Tile {
    /// Whether the cell blocks movement. Only water does.
    pub const fn is_water(self) -> bool {
        matches!(self, Tile::Water)
    }

    /// Whether the cell has ever been observed.
    pub const fn is_known(self) -> bool {
        !matches!(self, Tile::Unknown)
    }

    /// Debug-render glyph.
    pub fn glyph(self) -> char {
        match self {
            Tile::Unknown => '?',
            Tile::Land => '.',
            Tile::Water => '%',
            Tile::Food => '*',
            Tile::Dead => '!',
            Tile::Ant(owner) => (b'a' + owner.0 % 10) as char,
        }
    }
}

/// One entry of the per-turn observation feed.
///
/// The protocol layer (out of scope here) translates its wire tokens into
/// these values. Duplicate reports for the same cell within one turn are
/// tolerated: the last write wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// The cell is water.
    Water,
    /// The cell holds food.
    Food,
    /// The cell holds a live agent of the given player.
    Ant(PlayerId),
    /// An agent of the given player died on the cell this turn.
    Dead(PlayerId),
    /// The cell holds a hill of the given player.
    Hill(PlayerId),
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_the_only_blocker() {
        assert!(Tile::Water.is_water());
        for tile in [
            Tile::Unknown,
            Tile::Land,
            Tile::Food,
            Tile::Dead,
            Tile::Ant(PlayerId::ME),
        ] {
            assert!(!tile.is_water(), "{tile:?} should not block");
        }
    }

    #[test]
    fn glyphs_match_render_table() {
        assert_eq!(Tile::Unknown.glyph(), '?');
        assert_eq!(Tile::Water.glyph(), '%');
        assert_eq!(Tile::Food.glyph(), '*');
        assert_eq!(Tile::Land.glyph(), '.');
        assert_eq!(Tile::Dead.glyph(), '!');
        assert_eq!(Tile::Ant(PlayerId(1)).glyph(), 'b');
    }
}
