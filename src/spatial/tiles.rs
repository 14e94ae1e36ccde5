//! Tile catalog: the fixed set of tile kinds and their display attributes

use std::fmt;

/// Renderer-independent colour class of a tile
///
/// Mapped onto real terminal or image colours by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// Terminal default
    None,
    /// Void and markers
    Blue,
    /// Walls
    White,
    /// Floor
    Yellow,
    /// Bridges
    Red,
}

/// Kind of a single map cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Impassable empty space
    #[default]
    Void,
    /// Walkable mesa surface
    Floor,
    /// Mesa rim adjacent to floor
    Wall,
    /// Walkable connector between mesas
    Bridge,
    /// Debug marker stamped over other tiles
    Marker,
}

impl TileKind {
    /// Every tile kind, in catalog order
    pub const ALL: [Self; 5] = [
        Self::Void,
        Self::Floor,
        Self::Wall,
        Self::Bridge,
        Self::Marker,
    ];

    /// Display glyph
    pub const fn glyph(self) -> char {
        match self {
            Self::Void => '~',
            Self::Floor => '.',
            Self::Wall => '*',
            Self::Bridge => '#',
            Self::Marker => '@',
        }
    }

    /// Colour category used by renderers
    pub const fn color(self) -> ColorCategory {
        match self {
            Self::Void | Self::Marker => ColorCategory::Blue,
            Self::Wall => ColorCategory::White,
            Self::Floor => ColorCategory::Yellow,
            Self::Bridge => ColorCategory::Red,
        }
    }

    /// Whether an actor can stand on this tile
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Bridge | Self::Marker)
    }

    /// Inverse of [`TileKind::glyph`]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.glyph() == glyph)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
