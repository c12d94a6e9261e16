//! Tests for pixel buffer construction and tile-aligned block access

#[cfg(test)]
mod tests {
    use fliptile::FlipTileError;
    use fliptile::io::configuration::{CHANNELS, TILE_SIDE};
    use fliptile::spatial::{PixelBuffer, Tile, TilePosition};

    // Tests a new buffer is zero filled with the requested size
    #[test]
    fn test_new_buffer_dimensions() {
        let buffer = PixelBuffer::new(24, 16);

        assert_eq!(buffer.width(), 24);
        assert_eq!(buffer.height(), 16);
        assert_eq!(buffer.tiles_wide(), 3);
        assert_eq!(buffer.tiles_high(), 2);
        assert_eq!(buffer.pixels().dim(), (16, 24, CHANNELS));
        assert!(buffer.to_raw_vec().iter().all(|&b| b == 0));
    }

    // Tests raw data must match the declared dimensions exactly
    #[test]
    fn test_from_raw_length_mismatch() {
        let result = PixelBuffer::from_raw(8, 8, vec![0; 8 * 8 * 3 - 1]);
        assert!(matches!(
            result,
            Err(FlipTileError::InvalidSourceData { .. })
        ));
    }

    // Tests raw bytes keep their row-major interleaved order
    #[test]
    fn test_raw_round_trip() {
        let data: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8).collect();
        let buffer = PixelBuffer::from_raw(3, 2, data.clone()).unwrap();

        assert_eq!(buffer.to_raw_vec(), data);
        // Second pixel of the second row
        assert_eq!(buffer.pixels()[(1, 1, 0)], 12);
    }

    // Tests alignment checking accepts multiples of the tile side only
    #[test]
    fn test_ensure_tile_aligned() {
        assert!(PixelBuffer::new(16, 8).ensure_tile_aligned().is_ok());
        assert!(PixelBuffer::new(0, 0).ensure_tile_aligned().is_ok());
        assert!(matches!(
            PixelBuffer::new(16, 9).ensure_tile_aligned(),
            Err(FlipTileError::Dimension { .. })
        ));
        assert!(matches!(
            PixelBuffer::new(7, 8).ensure_tile_aligned(),
            Err(FlipTileError::Dimension { .. })
        ));
    }

    // Tests written tiles land in their grid slot and nowhere else
    #[test]
    fn test_write_tile_places_block() {
        let mut buffer = PixelBuffer::new(2 * TILE_SIDE, 2 * TILE_SIDE);
        let tile = Tile::filled([1, 2, 3]);
        let slot = TilePosition { row: 1, col: 0 };

        buffer.write_tile(slot, &tile).unwrap();

        let block = buffer.block(slot).unwrap();
        assert_eq!(Tile::from_view(&block).unwrap(), tile);

        let untouched = buffer.block(TilePosition { row: 0, col: 1 }).unwrap();
        assert!(untouched.iter().all(|&b| b == 0));

        assert_eq!(buffer.pixels()[(TILE_SIDE, 0, 2)], 3);
        assert_eq!(buffer.pixels()[(TILE_SIDE - 1, 0, 2)], 0);
    }

    // Tests an interior block reads the matching rows and columns of the source
    #[test]
    fn test_block_reads_offset_region() {
        let width = 3 * TILE_SIDE;
        let height = 2 * TILE_SIDE;
        let data: Vec<u8> = (0..width * height * CHANNELS)
            .map(|i| (i % 251) as u8)
            .collect();
        let buffer = PixelBuffer::from_raw(width, height, data.clone()).unwrap();

        let block = buffer.block(TilePosition { row: 1, col: 2 }).unwrap();
        assert_eq!(block.shape(), &[TILE_SIDE, TILE_SIDE, CHANNELS]);
        for y in 0..TILE_SIDE {
            for x in 0..TILE_SIDE {
                let start = ((TILE_SIDE + y) * width + 2 * TILE_SIDE + x) * CHANNELS;
                for c in 0..CHANNELS {
                    assert_eq!(block[(y, x, c)], data[start + c]);
                }
            }
        }
    }

    // Tests mutable blocks only touch their own slot
    #[test]
    fn test_block_mut_writes_offset_region() {
        let mut buffer = PixelBuffer::new(2 * TILE_SIDE, 2 * TILE_SIDE);
        buffer
            .block_mut(TilePosition { row: 1, col: 1 })
            .unwrap()
            .fill(7);

        let pixels = buffer.pixels();
        assert_eq!(pixels[(TILE_SIDE, TILE_SIDE, 0)], 7);
        assert_eq!(pixels[(2 * TILE_SIDE - 1, 2 * TILE_SIDE - 1, 2)], 7);
        assert_eq!(pixels[(TILE_SIDE - 1, TILE_SIDE, 0)], 0);
        assert_eq!(pixels[(TILE_SIDE, TILE_SIDE - 1, 0)], 0);
        assert_eq!(pixels.iter().filter(|&&b| b == 7).count(), TILE_SIDE * TILE_SIDE * CHANNELS);
    }

    // Tests blocks outside the buffer are reported instead of panicking
    #[test]
    fn test_block_out_of_range() {
        let mut buffer = PixelBuffer::new(TILE_SIDE, TILE_SIDE);

        assert!(buffer.block(TilePosition { row: 0, col: 1 }).is_err());
        assert!(matches!(
            buffer.write_tile(TilePosition { row: 1, col: 0 }, &Tile::filled([9, 9, 9])),
            Err(FlipTileError::InvariantViolation { .. })
        ));
    }
}
