//! Tile reflections and the closed set of four orientations
//!
//! Horizontal and vertical flips commute, and each orientation undoes itself,
//! so the four orientations form a group under composition.

use crate::io::configuration::{CHANNELS, TILE_BYTES, TILE_ROW_BYTES};
use crate::spatial::tiles::Tile;

/// One of the four axis-aligned reflections of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Unchanged
    Identity,
    /// Columns reversed within each row
    Horizontal,
    /// Row order reversed
    Vertical,
    /// Both reversals
    Both,
}

impl Orientation {
    /// Every orientation, in the order classes are searched
    pub const ALL: [Self; 4] = [Self::Identity, Self::Horizontal, Self::Vertical, Self::Both];

    /// Transform `tile` into this orientation
    pub fn apply(self, tile: &Tile) -> Tile {
        match self {
            Self::Identity => *tile,
            Self::Horizontal => flip_horizontal(tile),
            Self::Vertical => flip_vertical(tile),
            Self::Both => flip_both(tile),
        }
    }

    /// Flip flags as `(horizontal, vertical)`
    pub const fn flags(self) -> (bool, bool) {
        match self {
            Self::Identity => (false, false),
            Self::Horizontal => (true, false),
            Self::Vertical => (false, true),
            Self::Both => (true, true),
        }
    }

    /// Orientation with the given flip flags
    pub const fn from_flags(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (false, false) => Self::Identity,
            (true, false) => Self::Horizontal,
            (false, true) => Self::Vertical,
            (true, true) => Self::Both,
        }
    }

    /// Orientation equal to applying `self` and then `other`
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        let (h1, v1) = self.flags();
        let (h2, v2) = other.flags();
        Self::from_flags(h1 ^ h2, v1 ^ v2)
    }
}

/// The three non-identity reflections of one tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipVariants {
    /// Horizontal flip
    pub horizontal: Tile,
    /// Vertical flip
    pub vertical: Tile,
    /// Horizontal and vertical flip
    pub both: Tile,
}

impl FlipVariants {
    /// Compute all three reflections of `tile`
    pub fn of(tile: &Tile) -> Self {
        let horizontal = flip_horizontal(tile);
        Self {
            horizontal,
            vertical: flip_vertical(tile),
            both: flip_vertical(&horizontal),
        }
    }
}

/// Mirror a tile left to right
pub fn flip_horizontal(tile: &Tile) -> Tile {
    let mut out = [0; TILE_BYTES];
    for (dst_row, src_row) in out.chunks_exact_mut(TILE_ROW_BYTES).zip(tile.rows()) {
        for (dst, src) in dst_row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS).rev())
        {
            dst.copy_from_slice(src);
        }
    }
    Tile::from_bytes(out)
}

/// Mirror a tile top to bottom
pub fn flip_vertical(tile: &Tile) -> Tile {
    let mut out = [0; TILE_BYTES];
    for (dst_row, src_row) in out.chunks_exact_mut(TILE_ROW_BYTES).zip(tile.rows().rev()) {
        dst_row.copy_from_slice(src_row);
    }
    Tile::from_bytes(out)
}

/// Rotate a tile by 180 degrees, i.e. mirror it along both axes
pub fn flip_both(tile: &Tile) -> Tile {
    flip_vertical(&flip_horizontal(tile))
}
