//! End-to-end deduplication: extraction, classification, mapping and atlas assembly

use crate::algorithm::equivalence::classify;
use crate::algorithm::tilemap::TileMap;
use crate::io::configuration::ATLAS_ROW_TILES;
use crate::io::error::Result;
use crate::spatial::atlas::{AtlasLayout, assemble_atlas};
use crate::spatial::buffer::PixelBuffer;
use crate::spatial::tiles::{Tile, extract_tiles};
use log::debug;

/// Runtime knobs for a deduplication run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DedupConfig {
    /// Widest atlas row in tiles
    pub atlas_row_tiles: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            atlas_row_tiles: ATLAS_ROW_TILES,
        }
    }
}

/// Everything one run produces
#[derive(Clone, Debug)]
pub struct DedupOutcome {
    /// Tiles cut from the source
    pub source_tiles: usize,
    /// Byte-distinct tiles before flip merging
    pub unique_tiles: usize,
    /// One representative per flip-equivalence class, in discovery order
    pub representatives: Vec<Tile>,
    /// Class and flip flags of every source tile
    pub tile_map: TileMap,
    /// Atlas grid size
    pub layout: AtlasLayout,
    /// Atlas pixels
    pub atlas: PixelBuffer,
}

impl DedupOutcome {
    /// Number of flip-equivalence classes
    pub const fn class_count(&self) -> usize {
        self.representatives.len()
    }
}

/// Reduce `source` to its flip-unique tiles
///
/// # Errors
///
/// Returns an error if:
/// - The source is not a whole number of tiles in either direction
/// - The atlas row width is zero
pub fn deduplicate(source: &PixelBuffer, config: &DedupConfig) -> Result<DedupOutcome> {
    let tiles = extract_tiles(source)?;
    let (builder, unique_tiles) = classify(&tiles);
    let tile_map = TileMap::build(&tiles, source.tiles_wide(), source.tiles_high(), &builder)?;
    let representatives = builder.finish();
    let (layout, atlas) = assemble_atlas(&representatives, config.atlas_row_tiles)?;
    debug!(
        "atlas {}x{} tiles for {} classes",
        layout.tiles_wide,
        layout.tiles_high,
        representatives.len()
    );

    Ok(DedupOutcome {
        source_tiles: tiles.len(),
        unique_tiles,
        representatives,
        tile_map,
        layout,
        atlas,
    })
}
