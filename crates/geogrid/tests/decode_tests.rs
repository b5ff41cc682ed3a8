//! Decoding geogrid files written by the test encoders.
//!
//! These tests cover the byte-order, signedness and scale handling of the
//! decoder end to end, going through real files on disk.

use geogrid::{decode, decode_bytes, decode_word, Endianness, GeogridError, GridSpec, WordSize};
use test_utils::fixtures::grid::{GeogridFixture, LANDUSE_LEVELS, SCALED_4BYTE, TOPO_TILE};
use test_utils::{
    assert_approx_eq, assert_slice_approx_eq, create_extreme_samples, create_terrain_samples, create_test_samples,
    encode_samples, encode_scaled, temp_test_dir, write_geogrid_file, TINY_2X2_BYTES,
};

fn spec_for(fixture: &GeogridFixture) -> GridSpec {
    GridSpec::new(
        fixture.nx,
        fixture.ny,
        fixture.nz,
        fixture.word_size,
        fixture.signed,
        endianness_for(fixture.little_endian),
        fixture.scale,
    )
    .unwrap()
}

fn endianness_for(little: bool) -> Endianness {
    if little {
        Endianness::Little
    } else {
        Endianness::Big
    }
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_round_trip_all_encodings() {
    for word_size in [1usize, 2, 4] {
        for signed in [false, true] {
            for little in [false, true] {
                let samples = create_extreme_samples(word_size, signed);
                let bytes = encode_samples(&samples, word_size, little);
                let spec = GridSpec::new(
                    samples.len(),
                    1,
                    1,
                    word_size,
                    signed,
                    endianness_for(little),
                    1.0,
                )
                .unwrap();

                let grid = decode_bytes(&bytes, &spec).unwrap();

                // Wide words lose precision in f32, so check the integer too.
                for (i, &expected) in samples.iter().enumerate() {
                    let word = &bytes[i * word_size..(i + 1) * word_size];
                    let ws = WordSize::try_from(word_size).unwrap();
                    assert_eq!(
                        decode_word(word, ws, endianness_for(little), signed),
                        expected,
                        "word_size={} signed={} little={}",
                        word_size,
                        signed,
                        little
                    );
                    assert_eq!(grid.as_slice()[i], expected as f32);
                }
            }
        }
    }
}

#[test]
fn test_round_trip_with_scale() {
    let fixture = SCALED_4BYTE;
    let samples: Vec<i64> = (0..fixture.size() as i64).map(|v| v * 37 - 200).collect();
    let bytes = encode_samples(&samples, fixture.word_size, fixture.little_endian);

    let dir = temp_test_dir();
    let path = write_geogrid_file(dir.path(), "albedo.dat", &bytes);
    let grid = decode(&path, &spec_for(&fixture)).unwrap();

    let recovered: Vec<f64> = grid
        .as_slice()
        .iter()
        .map(|&v| (v as f64 / fixture.scale).round())
        .collect();
    let expected: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
    assert_slice_approx_eq!(&recovered, &expected, 0.0);
}

#[test]
fn test_scaled_values_match_truncating_encoder() {
    let physical = [0.25, 1.5, -3.75, 12.0];
    let bytes = encode_scaled(&physical, 0.25, 2, false);
    let spec = GridSpec::new(4, 1, 1, 2, true, Endianness::Big, 0.25).unwrap();

    let grid = decode_bytes(&bytes, &spec).unwrap();
    assert_eq!(grid.as_slice(), &[0.25, 1.5, -3.75, 12.0]);
}

// ============================================================================
// Byte order
// ============================================================================

#[test]
fn test_endianness_swaps_multi_byte_words() {
    let bytes = [0x01, 0x02, 0x03, 0x04];

    let big = GridSpec::new(2, 1, 1, 2, false, Endianness::Big, 1.0).unwrap();
    let little = GridSpec::new(2, 1, 1, 2, false, Endianness::Little, 1.0).unwrap();
    assert_eq!(decode_bytes(&bytes, &big).unwrap().as_slice(), &[258.0, 772.0]);
    assert_eq!(decode_bytes(&bytes, &little).unwrap().as_slice(), &[513.0, 1027.0]);

    let big = GridSpec::new(1, 1, 1, 4, false, Endianness::Big, 1.0).unwrap();
    let little = GridSpec::new(1, 1, 1, 4, false, Endianness::Little, 1.0).unwrap();
    assert_eq!(decode_bytes(&bytes, &big).unwrap().as_slice(), &[0x0102_0304 as f32]);
    assert_eq!(decode_bytes(&bytes, &little).unwrap().as_slice(), &[0x0403_0201 as f32]);
}

#[test]
fn test_endianness_irrelevant_for_single_bytes() {
    let bytes: Vec<u8> = (0..=255).collect();
    for signed in [false, true] {
        let big = GridSpec::new(16, 16, 1, 1, signed, Endianness::Big, 1.0).unwrap();
        let little = GridSpec::new(16, 16, 1, 1, signed, Endianness::Little, 1.0).unwrap();
        assert_eq!(
            decode_bytes(&bytes, &big).unwrap(),
            decode_bytes(&bytes, &little).unwrap()
        );
    }
}

#[test]
fn test_endianness_is_pure_byte_reversal() {
    // Reversing each word and flipping the declared order gives the same grid.
    let samples = create_terrain_samples(7, 5);
    let be = encode_samples(&samples, 2, false);
    let le = encode_samples(&samples, 2, true);

    let spec_be = GridSpec::new(7, 5, 1, 2, true, Endianness::Big, 1.0).unwrap();
    let spec_le = GridSpec::new(7, 5, 1, 2, true, Endianness::Little, 1.0).unwrap();
    assert_eq!(
        decode_bytes(&be, &spec_be).unwrap(),
        decode_bytes(&le, &spec_le).unwrap()
    );
}

// ============================================================================
// Signedness
// ============================================================================

#[test]
fn test_signed_only_affects_high_bit_values() {
    for word_size in [1usize, 2, 4] {
        let small = [0i64, 1, 42, 127];
        let high = [-1i64, -128];
        let mut values = small.to_vec();
        values.extend_from_slice(&high);

        let bytes = encode_samples(&values, word_size, false);
        let unsigned =
            GridSpec::new(values.len(), 1, 1, word_size, false, Endianness::Big, 1.0).unwrap();
        let signed =
            GridSpec::new(values.len(), 1, 1, word_size, true, Endianness::Big, 1.0).unwrap();

        let u = decode_bytes(&bytes, &unsigned).unwrap();
        let s = decode_bytes(&bytes, &signed).unwrap();

        for i in 0..small.len() {
            assert_eq!(u.as_slice()[i], s.as_slice()[i]);
        }
        for i in small.len()..values.len() {
            assert_ne!(u.as_slice()[i], s.as_slice()[i]);
            assert!(u.as_slice()[i] > 0.0);
            assert_eq!(s.as_slice()[i], values[i] as f32);
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_file_order_maps_to_zyx() {
    let fixture = LANDUSE_LEVELS;
    let samples = create_test_samples(fixture.nx, fixture.ny, fixture.nz);
    // Byte words cannot hold the z*10000 pattern, reduce it modulo 251.
    let bytes: Vec<u8> = samples.iter().map(|&v| (v % 251) as u8).collect();

    let grid = decode_bytes(&bytes, &spec_for(&fixture)).unwrap();

    for z in 0..fixture.nz {
        for y in 0..fixture.ny {
            for x in 0..fixture.nx {
                let expected = ((z * 10000 + y * 100 + x) % 251) as f32;
                assert_eq!(grid.get(x, y, z), Some(expected), "at ({}, {}, {})", x, y, z);
            }
        }
    }
}

#[test]
fn test_topography_tile_from_disk() {
    let fixture = TOPO_TILE;
    let heights = create_terrain_samples(fixture.nx, fixture.ny);
    let bytes = encode_samples(&heights, fixture.word_size, fixture.little_endian);

    let dir = temp_test_dir();
    let path = write_geogrid_file(dir.path(), "00001-00012.00001-00008", &bytes);
    let grid = decode(&path, &spec_for(&fixture)).unwrap();

    assert_eq!(grid.nx(), 12);
    assert_eq!(grid.ny(), 8);
    assert_eq!(grid.nz(), 1);
    assert_approx_eq!(grid.get(0, 0, 0).unwrap(), -50.0, 1e-6);
    assert!(grid.as_slice().iter().any(|&h| h < 0.0));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_end_to_end_example() {
    let dir = temp_test_dir();
    let path = write_geogrid_file(dir.path(), "tiny.dat", &TINY_2X2_BYTES);
    let spec = GridSpec::new(2, 2, 1, 1, false, Endianness::Big, 1.0).unwrap();

    let grid = decode(&path, &spec).unwrap();
    assert_eq!(grid.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_short_file_is_io_error() {
    let dir = temp_test_dir();
    let path = write_geogrid_file(dir.path(), "short.dat", &[0u8; 10]);
    let spec = GridSpec::new(3, 2, 1, 2, false, Endianness::Big, 1.0).unwrap();

    let err = decode(&path, &spec).unwrap_err();
    assert!(err.is_io());
    match err {
        GeogridError::ShortInput {
            expected, actual, ..
        } => {
            assert_eq!(expected, 12);
            assert_eq!(actual, 10);
        }
        other => panic!("expected ShortInput, got {:?}", other),
    }
}

#[test]
fn test_unsupported_word_size() {
    for bad in [0usize, 3, 8] {
        let err = GridSpec::new(2, 2, 1, bad, false, Endianness::Big, 1.0).unwrap_err();
        assert!(matches!(err, GeogridError::UnsupportedWordSize(n) if n == bad));
    }
}
