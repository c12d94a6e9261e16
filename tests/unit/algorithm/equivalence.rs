//! Tests for flip-equivalence classes and canonical representative selection

#[cfg(test)]
mod tests {
    use fliptile::algorithm::equivalence::{
        EquivalenceBuilder, Placement, build_classes, sorted_unique,
    };
    use fliptile::io::configuration::{TILE_BYTES, TILE_SIDE};
    use fliptile::spatial::orientation::{Orientation, flip_horizontal, flip_vertical};
    use fliptile::spatial::tiles::Tile;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn marker(x: usize, y: usize, value: u8) -> Tile {
        let mut data = [0; TILE_BYTES];
        data[(y * TILE_SIDE + x) * 3] = value;
        Tile::from_bytes(data)
    }

    // Low-entropy tiles so flips of one base collide with other draws
    fn random_tile(rng: &mut StdRng) -> Tile {
        let mut data = [0; TILE_BYTES];
        for byte in &mut data {
            *byte = rng.random_range(0..2);
        }
        Tile::from_bytes(data)
    }

    fn mixed_sequence(seed: u64) -> Vec<Tile> {
        let mut rng = StdRng::seed_from_u64(seed);
        let bases: Vec<Tile> = (0..12).map(|_| random_tile(&mut rng)).collect();
        (0..60)
            .map(|_| {
                let base = bases[rng.random_range(0..bases.len())];
                Orientation::ALL[rng.random_range(0..4)].apply(&base)
            })
            .collect()
    }

    // Tests an empty sequence yields no classes
    #[test]
    fn test_empty_input() {
        let classes = build_classes(&[]);
        assert_eq!(classes.class_count(), 0);
        assert_eq!(classes.unique_tile_count(), 0);
        assert!(classes.representatives().is_empty());
    }

    // Tests a single tile is its own class
    #[test]
    fn test_single_tile() {
        let tile = marker(0, 0, 9);
        let classes = build_classes(&[tile]);
        assert_eq!(classes.class_count(), 1);
        assert_eq!(classes.representatives(), &[tile]);
    }

    // Tests horizontal mirrors merge and the sorted-first tile represents them
    #[test]
    fn test_horizontal_mirrors_merge() {
        let a = marker(0, 0, 9);
        let b = flip_horizontal(&a);
        assert_ne!(a, b);

        let classes = build_classes(&[a, b]);
        assert_eq!(classes.class_count(), 1);
        assert_eq!(classes.unique_tile_count(), 2);
        assert_eq!(classes.representatives(), &[a.min(b)]);

        let reversed = build_classes(&[b, a]);
        assert_eq!(reversed, classes);
    }

    // Tests the owned representatives match the borrowed view in discovery order
    #[test]
    fn test_into_representatives() {
        let tiles = [marker(1, 0, 4), marker(0, 0, 9), marker(0, 0, 4)];
        let classes = build_classes(&tiles);
        let borrowed = classes.representatives().to_vec();

        let owned = classes.into_representatives();
        assert_eq!(owned, borrowed);
        assert_eq!(owned, sorted_unique(&tiles));
    }

    // Tests all four orientations of an asymmetric tile collapse to one class
    #[test]
    fn test_all_orientations_merge() {
        let base = marker(1, 2, 50);
        let tiles: Vec<Tile> = Orientation::ALL.iter().map(|o| o.apply(&base)).collect();

        let classes = build_classes(&tiles);
        assert_eq!(classes.unique_tile_count(), 4);
        assert_eq!(classes.class_count(), 1);
        assert_eq!(
            classes.representatives()[0],
            *tiles.iter().min().unwrap()
        );
    }

    // Tests a uniform tile repeated many times is one class
    #[test]
    fn test_symmetric_tile_single_class() {
        let uniform = Tile::filled([3, 3, 3]);
        let classes = build_classes(&vec![uniform; 50]);
        assert_eq!(classes.class_count(), 1);
        assert_eq!(classes.unique_tile_count(), 1);
        assert_eq!(classes.representatives(), &[uniform]);
    }

    // Tests a tile symmetric under one axis registers once and still merges its mirror
    #[test]
    fn test_partially_symmetric_tile() {
        // Marker on both ends of the top row: horizontal flip is a fixed point
        let mut data = [0; TILE_BYTES];
        data[0] = 7;
        data[(TILE_SIDE - 1) * 3] = 7;
        let tile = Tile::from_bytes(data);
        assert_eq!(flip_horizontal(&tile), tile);

        let mirrored = flip_vertical(&tile);
        let classes = build_classes(&[tile, mirrored, tile]);
        assert_eq!(classes.class_count(), 1);
        assert_eq!(classes.unique_tile_count(), 2);
    }

    // Tests unrelated tiles each found their own class in sorted order
    #[test]
    fn test_unrelated_tiles_sorted_representatives() {
        let tiles = vec![
            Tile::filled([3, 0, 0]),
            Tile::filled([1, 0, 0]),
            Tile::filled([2, 0, 0]),
        ];
        let classes = build_classes(&tiles);
        assert_eq!(classes.class_count(), 3);
        assert_eq!(classes.representatives(), sorted_unique(&tiles).as_slice());
    }

    // Tests class counts stay between the flip-merged lower bound and the distinct count
    #[test]
    fn test_class_count_bounds() {
        for seed in 0..20 {
            let tiles = mixed_sequence(seed);
            let classes = build_classes(&tiles);
            let unique = classes.unique_tile_count();

            assert!(classes.class_count() <= unique);
            assert!(classes.class_count() >= unique.div_ceil(4));
            assert!(classes.class_count() <= 12);
        }
    }

    // Tests repeated runs and shuffled input give the same classes
    #[test]
    fn test_idempotent_and_order_independent() {
        let tiles = mixed_sequence(42);
        let first = build_classes(&tiles);
        let second = build_classes(&tiles);
        assert_eq!(first, second);

        let mut reversed = tiles.clone();
        reversed.reverse();
        assert_eq!(build_classes(&reversed), first);

        let again = build_classes(first.representatives());
        assert_eq!(again.representatives(), first.representatives());
    }

    // Tests representatives are never flips of one another
    #[test]
    fn test_representatives_pairwise_unrelated() {
        let classes = build_classes(&mixed_sequence(7));
        let reps = classes.representatives();
        for (i, a) in reps.iter().enumerate() {
            for b in reps.iter().skip(i + 1) {
                for orientation in Orientation::ALL {
                    assert_ne!(orientation.apply(a), *b);
                }
            }
        }
    }

    // Tests registration reports whether a class was created
    #[test]
    fn test_register_and_contains() {
        let mut builder = EquivalenceBuilder::new();
        let tile = marker(2, 3, 1);

        assert!(!builder.contains(&tile));
        assert!(builder.register(tile));
        assert!(!builder.register(tile));
        assert!(!builder.register(flip_vertical(&tile)));
        assert!(builder.contains(&flip_horizontal(&tile)));
        assert_eq!(builder.class_count(), 1);

        assert!(builder.register(marker(2, 3, 2)));
        assert_eq!(builder.representatives().len(), 2);
        assert_eq!(builder.finish(), vec![tile, marker(2, 3, 2)]);
    }

    // Tests locating a tile reports its class and the orientation producing it
    #[test]
    fn test_locate_orientation() {
        let mut builder = EquivalenceBuilder::new();
        let first = marker(0, 1, 5);
        let second = marker(3, 3, 6);
        builder.register(first);
        builder.register(second);

        for orientation in Orientation::ALL {
            let placement = builder.locate(&orientation.apply(&second)).unwrap();
            assert_eq!(placement.class, 1);
            assert_eq!(placement.orientation.apply(&second), orientation.apply(&second));
        }

        assert_eq!(
            builder.locate(&first),
            Some(Placement {
                class: 0,
                orientation: Orientation::Identity,
            })
        );
        assert_eq!(builder.locate(&marker(4, 4, 4)), None);
    }

    // Tests symmetric tiles locate as identity since identity is tried first
    #[test]
    fn test_locate_prefers_identity() {
        let mut builder = EquivalenceBuilder::new();
        let uniform = Tile::filled([1, 1, 1]);
        builder.register(uniform);

        let placement = builder.locate(&uniform).unwrap();
        assert_eq!(placement.orientation, Orientation::Identity);
    }

    // Tests sorting and deduplication of raw tiles
    #[test]
    fn test_sorted_unique() {
        let a = Tile::filled([1, 0, 0]);
        let b = Tile::filled([2, 0, 0]);
        assert_eq!(sorted_unique(&[b, a, b, a, a]), vec![a, b]);
        assert!(sorted_unique(&[]).is_empty());
    }
}
