//! Pixel and tile data structures
//!
//! This module contains spatial-related functionality including:
//! - The RGB pixel buffer shared by decoding, extraction and assembly
//! - Tile data structures and extraction
//! - Tile reflections
//! - Atlas layout

/// Canonical tile atlas layout and assembly
pub mod atlas;
/// Pixel buffer with tile-aligned block access
pub mod buffer;
/// Tile reflections and orientation algebra
pub mod orientation;
/// Tile data structures and extraction
pub mod tiles;

pub use buffer::PixelBuffer;
pub use orientation::Orientation;
pub use tiles::{Tile, TilePosition};
