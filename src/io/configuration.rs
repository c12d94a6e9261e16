//! Tile geometry constants and runtime configuration defaults

/// Side length of a square tile in pixels
pub const TILE_SIDE: usize = 8;

/// Channels per pixel (8-bit RGB)
pub const CHANNELS: usize = 3;

/// Bytes in one row of a tile
pub const TILE_ROW_BYTES: usize = TILE_SIDE * CHANNELS;

/// Bytes in one complete tile
pub const TILE_BYTES: usize = TILE_SIDE * TILE_ROW_BYTES;

/// Widest atlas row in tiles; smaller collections use a narrower row
pub const ATLAS_ROW_TILES: usize = 16;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_opt";
/// Extension for written atlases
pub const OUTPUT_EXTENSION: &str = "png";
/// Extension of the scratch file an atlas is encoded into before the final rename
pub const TEMP_EXTENSION: &str = "tmp";

// Progress bar display settings
/// Batches at or below this size log per-file summaries without a progress bar
pub const MIN_FILES_FOR_PROGRESS_BAR: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
