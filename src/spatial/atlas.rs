//! Packs canonical tiles into a row-major atlas image

use crate::io::configuration::TILE_SIDE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::buffer::PixelBuffer;
use crate::spatial::tiles::{Tile, TilePosition};

/// Atlas grid size in tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasLayout {
    /// Tiles per atlas row
    pub tiles_wide: usize,
    /// Number of atlas rows
    pub tiles_high: usize,
}

impl AtlasLayout {
    /// Grid for `count` tiles with rows at most `row_tiles` wide
    ///
    /// Collections smaller than one row get a single narrower row. An empty
    /// collection gets a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `row_tiles` is zero
    pub fn for_count(count: usize, row_tiles: usize) -> Result<Self> {
        if row_tiles == 0 {
            return Err(invalid_parameter(
                "row_tiles",
                &row_tiles,
                &"atlas rows must hold at least one tile",
            ));
        }
        let tiles_wide = count.min(row_tiles);
        Ok(Self {
            tiles_wide,
            tiles_high: count.div_ceil(row_tiles),
        })
    }

    /// Number of slots in the grid, used or not
    pub const fn capacity(&self) -> usize {
        self.tiles_wide * self.tiles_high
    }

    /// Atlas width in pixels
    pub const fn pixel_width(&self) -> usize {
        self.tiles_wide * TILE_SIDE
    }

    /// Atlas height in pixels
    pub const fn pixel_height(&self) -> usize {
        self.tiles_high * TILE_SIDE
    }

    /// Grid slot of the `index`-th tile
    pub const fn slot(&self, index: usize) -> TilePosition {
        TilePosition::from_index(index, self.tiles_wide)
    }
}

/// Lay out `tiles` in a zero-filled atlas
///
/// Slots past the last tile stay black.
///
/// # Errors
///
/// Returns an error if `row_tiles` is zero
pub fn assemble_atlas(tiles: &[Tile], row_tiles: usize) -> Result<(AtlasLayout, PixelBuffer)> {
    let layout = AtlasLayout::for_count(tiles.len(), row_tiles)?;
    let mut atlas = PixelBuffer::new(layout.pixel_width(), layout.pixel_height());
    for (index, tile) in tiles.iter().enumerate() {
        atlas.write_tile(layout.slot(index), tile)?;
    }
    Ok((layout, atlas))
}
