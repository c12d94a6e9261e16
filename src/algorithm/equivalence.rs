//! Groups tiles into flip-equivalence classes
//!
//! Tiles are sorted and deduplicated by exact bytes, then visited in sorted
//! order. The first tile not yet covered by any class founds a new class and
//! becomes its representative; all four of its orientations are registered so
//! later mirror images are recognised as members.

use crate::spatial::orientation::{FlipVariants, Orientation};
use crate::spatial::tiles::Tile;
use log::debug;
use std::collections::HashMap;

/// Where a tile sits relative to the classes found so far
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the class, in discovery order
    pub class: usize,
    /// Orientation that turns the class representative into the tile
    pub orientation: Orientation,
}

/// Registered byte patterns of every class, one map per orientation
///
/// Each map sends a pattern to the class whose representative produces it
/// under that orientation.
#[derive(Debug, Default)]
struct OrientationSets {
    identity: HashMap<Tile, usize>,
    horizontal: HashMap<Tile, usize>,
    vertical: HashMap<Tile, usize>,
    both: HashMap<Tile, usize>,
}

impl OrientationSets {
    const fn get(&self, orientation: Orientation) -> &HashMap<Tile, usize> {
        match orientation {
            Orientation::Identity => &self.identity,
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
            Orientation::Both => &self.both,
        }
    }

    // A symmetric tile reuses the same pattern in several maps. Each map keeps
    // its first entry, so re-registration never changes an existing answer.
    fn register(&mut self, class: usize, tile: Tile, variants: &FlipVariants) {
        self.identity.entry(tile).or_insert(class);
        self.horizontal.entry(variants.horizontal).or_insert(class);
        self.vertical.entry(variants.vertical).or_insert(class);
        self.both.entry(variants.both).or_insert(class);
    }
}

/// Incrementally builds flip-equivalence classes for a single run
#[derive(Debug, Default)]
pub struct EquivalenceBuilder {
    seen: OrientationSets,
    representatives: Vec<Tile>,
}

impl EquivalenceBuilder {
    /// Create a builder with no classes
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `tile` matches any orientation of an existing class
    pub fn contains(&self, tile: &Tile) -> bool {
        Orientation::ALL
            .iter()
            .any(|&orientation| self.seen.get(orientation).contains_key(tile))
    }

    /// Find the class covering `tile` and the orientation it appears in
    ///
    /// Orientations are tried in [`Orientation::ALL`] order, so a tile that
    /// equals its representative always reports [`Orientation::Identity`].
    pub fn locate(&self, tile: &Tile) -> Option<Placement> {
        Orientation::ALL.iter().find_map(|&orientation| {
            self.seen
                .get(orientation)
                .get(tile)
                .map(|&class| Placement { class, orientation })
        })
    }

    /// Offer a tile; founds a new class unless it is already covered
    ///
    /// Returns `true` when a new class was created with `tile` as its representative.
    pub fn register(&mut self, tile: Tile) -> bool {
        if self.contains(&tile) {
            return false;
        }
        let class = self.representatives.len();
        self.seen.register(class, tile, &FlipVariants::of(&tile));
        self.representatives.push(tile);
        true
    }

    /// Number of classes found so far
    pub const fn class_count(&self) -> usize {
        self.representatives.len()
    }

    /// Representatives in discovery order
    pub fn representatives(&self) -> &[Tile] {
        &self.representatives
    }

    /// Release the representatives, discarding the orientation sets
    pub fn finish(self) -> Vec<Tile> {
        self.representatives
    }
}

/// Sort tiles by bytes and drop exact duplicates
pub fn sorted_unique(tiles: &[Tile]) -> Vec<Tile> {
    let mut unique = tiles.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}

/// Canonical tile collection produced by one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalTiles {
    representatives: Vec<Tile>,
    unique_tiles: usize,
}

impl CanonicalTiles {
    /// Number of flip-equivalence classes
    pub const fn class_count(&self) -> usize {
        self.representatives.len()
    }

    /// Number of byte-distinct tiles before flip merging
    pub const fn unique_tile_count(&self) -> usize {
        self.unique_tiles
    }

    /// One representative per class, in discovery order
    pub fn representatives(&self) -> &[Tile] {
        &self.representatives
    }

    /// Take ownership of the representatives
    pub fn into_representatives(self) -> Vec<Tile> {
        self.representatives
    }
}

/// Seed a builder with the classes of `tiles`
///
/// Returns the builder together with the byte-distinct tile count so callers
/// can keep locating tiles before finishing.
pub fn classify(tiles: &[Tile]) -> (EquivalenceBuilder, usize) {
    let unique = sorted_unique(tiles);
    let mut builder = EquivalenceBuilder::new();
    for tile in &unique {
        builder.register(*tile);
    }
    debug!(
        "{} tiles, {} byte-distinct, {} flip classes",
        tiles.len(),
        unique.len(),
        builder.class_count()
    );
    (builder, unique.len())
}

/// Collapse `tiles` into one representative per flip-equivalence class
pub fn build_classes(tiles: &[Tile]) -> CanonicalTiles {
    let (builder, unique_tiles) = classify(tiles);
    CanonicalTiles {
        representatives: builder.finish(),
        unique_tiles,
    }
}
