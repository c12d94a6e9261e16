//! Per-tile class and flip flags for rebuilding the source image

use crate::algorithm::equivalence::{EquivalenceBuilder, Placement};
use crate::io::configuration::TILE_SIDE;
use crate::io::error::{Result, invariant_violation};
use crate::spatial::buffer::PixelBuffer;
use crate::spatial::tiles::{Tile, TilePosition};

/// Placement of every source tile, in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    tiles_wide: usize,
    tiles_high: usize,
    placements: Vec<Placement>,
}

impl TileMap {
    /// Locate each extracted tile among the builder's classes
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count disagrees with the grid size or a
    /// tile belongs to no class. Neither can happen when `builder` was fed
    /// the same tiles.
    pub fn build(
        tiles: &[Tile],
        tiles_wide: usize,
        tiles_high: usize,
        builder: &EquivalenceBuilder,
    ) -> Result<Self> {
        if tiles.len() != tiles_wide * tiles_high {
            return Err(invariant_violation(
                "tile map",
                &format!(
                    "{} tiles do not fill a {tiles_wide}x{tiles_high} grid",
                    tiles.len()
                ),
            ));
        }
        let placements = tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                builder.locate(tile).ok_or_else(|| {
                    invariant_violation(
                        "tile map",
                        &format!("tile {index} is not covered by any class"),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            tiles_wide,
            tiles_high,
            placements,
        })
    }

    /// Grid width in tiles
    pub const fn tiles_wide(&self) -> usize {
        self.tiles_wide
    }

    /// Grid height in tiles
    pub const fn tiles_high(&self) -> usize {
        self.tiles_high
    }

    /// All placements in row-major order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of the tile at `position`
    pub fn get(&self, position: TilePosition) -> Option<Placement> {
        if position.col >= self.tiles_wide {
            return None;
        }
        self.placements
            .get(position.index(self.tiles_wide))
            .copied()
    }

    /// Redraw the source image from class representatives
    ///
    /// # Errors
    ///
    /// Returns an error if a placement names a class missing from `representatives`
    pub fn reconstruct(&self, representatives: &[Tile]) -> Result<PixelBuffer> {
        let mut image = PixelBuffer::new(
            self.tiles_wide * TILE_SIDE,
            self.tiles_high * TILE_SIDE,
        );
        for (index, placement) in self.placements.iter().enumerate() {
            let representative = representatives.get(placement.class).ok_or_else(|| {
                invariant_violation(
                    "reconstruction",
                    &format!(
                        "class {} out of {} representatives",
                        placement.class,
                        representatives.len()
                    ),
                )
            })?;
            let tile = placement.orientation.apply(representative);
            image.write_tile(TilePosition::from_index(index, self.tiles_wide), &tile)?;
        }
        Ok(image)
    }
}
