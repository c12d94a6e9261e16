//! Owned RGB pixel buffer with tile-aligned block access

use crate::io::configuration::{CHANNELS, TILE_SIDE};
use crate::io::error::{FlipTileError, Result, invariant_violation};
use crate::spatial::tiles::{Tile, TilePosition};
use ndarray::{Array3, ArrayView3, ArrayViewMut3, Axis, Slice};

/// Row-major 8-bit RGB image stored as a `height x width x channel` array
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Wrap raw interleaved RGB bytes
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not hold exactly `width * height * 3` bytes
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let len = data.len();
        let pixels = Array3::from_shape_vec((height, width, CHANNELS), data).map_err(|e| {
            FlipTileError::InvalidSourceData {
                reason: format!(
                    "{len} bytes cannot form a {width}x{height} RGB image: {e}"
                ),
            }
        })?;
        Ok(Self { pixels })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Number of whole tiles per row
    pub fn tiles_wide(&self) -> usize {
        self.width() / TILE_SIDE
    }

    /// Number of whole tile rows
    pub fn tiles_high(&self) -> usize {
        self.height() / TILE_SIDE
    }

    /// Check that the image splits into whole tiles
    ///
    /// # Errors
    ///
    /// Returns [`FlipTileError::Dimension`] when either side is not a multiple of the tile side
    pub fn ensure_tile_aligned(&self) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if width % TILE_SIDE == 0 && height % TILE_SIDE == 0 {
            Ok(())
        } else {
            Err(FlipTileError::Dimension {
                width,
                height,
                tile_side: TILE_SIDE,
            })
        }
    }

    /// Borrow the pixel array
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Copy out the interleaved bytes in row-major order
    pub fn to_raw_vec(&self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }

    /// View the pixel block covered by the tile at `position`
    ///
    /// # Errors
    ///
    /// Returns an error if the block extends past the buffer edge
    pub fn block(&self, position: TilePosition) -> Result<ArrayView3<'_, u8>> {
        let (rows, cols) = self.block_range(position)?;
        let mut view = self.pixels.view();
        view.slice_axis_inplace(Axis(0), Slice::from(rows.0..rows.1));
        view.slice_axis_inplace(Axis(1), Slice::from(cols.0..cols.1));
        Ok(view)
    }

    /// Mutably view the pixel block covered by the tile at `position`
    ///
    /// # Errors
    ///
    /// Returns an error if the block extends past the buffer edge
    pub fn block_mut(&mut self, position: TilePosition) -> Result<ArrayViewMut3<'_, u8>> {
        let (rows, cols) = self.block_range(position)?;
        let mut view = self.pixels.view_mut();
        view.slice_axis_inplace(Axis(0), Slice::from(rows.0..rows.1));
        view.slice_axis_inplace(Axis(1), Slice::from(cols.0..cols.1));
        Ok(view)
    }

    /// Copy a tile into its slot
    ///
    /// # Errors
    ///
    /// Returns an error if the slot lies outside the buffer
    pub fn write_tile(&mut self, position: TilePosition, tile: &Tile) -> Result<()> {
        let source = tile.view()?;
        self.block_mut(position)?.assign(&source);
        Ok(())
    }

    fn block_range(&self, position: TilePosition) -> Result<((usize, usize), (usize, usize))> {
        let top = position.row * TILE_SIDE;
        let left = position.col * TILE_SIDE;
        let bottom = top + TILE_SIDE;
        let right = left + TILE_SIDE;
        if bottom > self.height() || right > self.width() {
            return Err(invariant_violation(
                "block access",
                &format!(
                    "tile ({}, {}) exceeds {}x{} buffer",
                    position.row,
                    position.col,
                    self.width(),
                    self.height()
                ),
            ));
        }
        Ok(((top, bottom), (left, right)))
    }
}
