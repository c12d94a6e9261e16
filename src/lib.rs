//! Flip-aware tile deduplication for tile-based graphics assets
//!
//! The system cuts an image into 8x8 RGB tiles, treats tiles that are
//! horizontal, vertical or two-axis mirror images of each other as duplicates,
//! and packs one representative per equivalence class into an atlas. A per-tile
//! map of class indices and flip flags lets a renderer rebuild the source.

#![forbid(unsafe_code)]

/// Equivalence classes, tile map and the end-to-end pipeline
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel buffers, tiles, reflections and atlas layout
pub mod spatial;

pub use io::error::{FlipTileError, Result};
