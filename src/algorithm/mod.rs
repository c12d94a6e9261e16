//! Flip-aware deduplication algorithm

/// Flip-equivalence classes and canonical representative selection
pub mod equivalence;
/// Extraction-to-atlas pipeline
pub mod pipeline;
/// Per-tile placements for reconstruction
pub mod tilemap;
