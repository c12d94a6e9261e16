//! Fixed-size RGB tiles and their extraction from a pixel buffer
//!
//! Tiles are compared by exact bytes. Ordering is unsigned lexicographic over
//! the row-major channel data, which gives the sort used for deduplication.

use crate::io::configuration::{CHANNELS, TILE_BYTES, TILE_ROW_BYTES, TILE_SIDE};
use crate::io::error::{Result, invariant_violation};
use crate::spatial::buffer::PixelBuffer;
use ndarray::ArrayView3;

/// An 8x8 block of RGB pixels stored row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    data: [u8; TILE_BYTES],
}

impl Tile {
    /// Wrap raw tile bytes
    pub const fn from_bytes(data: [u8; TILE_BYTES]) -> Self {
        Self { data }
    }

    /// Copy a tile out of a byte slice
    ///
    /// # Errors
    ///
    /// Returns an error if the slice length differs from a full tile
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let data: [u8; TILE_BYTES] = bytes.try_into().map_err(|e| {
            invariant_violation(
                "tile construction",
                &format!("expected {TILE_BYTES} bytes, got {}: {e}", bytes.len()),
            )
        })?;
        Ok(Self { data })
    }

    /// A tile where every pixel has the same color
    pub fn filled(rgb: [u8; CHANNELS]) -> Self {
        let mut data = [0; TILE_BYTES];
        for pixel in data.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&rgb);
        }
        Self { data }
    }

    /// Copy a tile-shaped pixel block
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not cover exactly one tile, which
    /// would mean a partially filled tile
    pub fn from_view(block: &ArrayView3<'_, u8>) -> Result<Self> {
        if block.dim() != (TILE_SIDE, TILE_SIDE, CHANNELS) {
            return Err(invariant_violation(
                "tile extraction",
                &format!("block shape {:?} is not a full tile", block.dim()),
            ));
        }
        let mut data = [0; TILE_BYTES];
        for (dst, &src) in data.iter_mut().zip(block.iter()) {
            *dst = src;
        }
        Ok(Self { data })
    }

    /// Raw row-major bytes
    pub const fn as_bytes(&self) -> &[u8; TILE_BYTES] {
        &self.data
    }

    /// Iterate the tile's rows, each `TILE_SIDE * CHANNELS` bytes
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(TILE_ROW_BYTES)
    }

    /// RGB value at (`x`, `y`), if inside the tile
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; CHANNELS]> {
        if x >= TILE_SIDE || y >= TILE_SIDE {
            return None;
        }
        let start = (y * TILE_SIDE + x) * CHANNELS;
        self.data
            .get(start..start + CHANNELS)
            .and_then(|px| px.try_into().ok())
    }

    /// View as a `TILE_SIDE x TILE_SIDE x CHANNELS` array
    ///
    /// # Errors
    ///
    /// Returns an error only if the tile constants disagree with each other
    pub fn view(&self) -> Result<ArrayView3<'_, u8>> {
        ArrayView3::from_shape((TILE_SIDE, TILE_SIDE, CHANNELS), self.data.as_slice())
            .map_err(|e| invariant_violation("tile view", &e))
    }
}

/// Row and column of a tile within a tile grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TilePosition {
    /// Tile row, counted from the top
    pub row: usize,
    /// Tile column, counted from the left
    pub col: usize,
}

impl TilePosition {
    /// Position of the `index`-th tile in row-major order
    ///
    /// A grid with no columns maps every index to the origin.
    pub const fn from_index(index: usize, tiles_wide: usize) -> Self {
        if tiles_wide == 0 {
            return Self { row: 0, col: 0 };
        }
        Self {
            row: index / tiles_wide,
            col: index % tiles_wide,
        }
    }

    /// Row-major index of this position
    pub const fn index(self, tiles_wide: usize) -> usize {
        self.row * tiles_wide + self.col
    }
}

/// Split an image into its tiles in row-major order
///
/// # Errors
///
/// Returns [`crate::FlipTileError::Dimension`] if the image is not tile aligned
pub fn extract_tiles(source: &PixelBuffer) -> Result<Vec<Tile>> {
    source.ensure_tile_aligned()?;

    let tiles_wide = source.tiles_wide();
    let count = tiles_wide * source.tiles_high();
    (0..count)
        .map(|index| {
            let block = source.block(TilePosition::from_index(index, tiles_wide))?;
            Tile::from_view(&block)
        })
        .collect()
}
