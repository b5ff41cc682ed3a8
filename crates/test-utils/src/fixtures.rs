//! Common test fixtures for geogrid conversion tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Grid geometries used across the test suite.
pub mod grid {
    /// Extents and encoding of a geogrid fixture.
    #[derive(Debug, Clone, Copy)]
    pub struct GeogridFixture {
        pub nx: usize,
        pub ny: usize,
        pub nz: usize,
        pub word_size: usize,
        pub signed: bool,
        pub little_endian: bool,
        pub scale: f64,
    }

    impl GeogridFixture {
        /// Number of samples.
        pub fn size(&self) -> usize {
            self.nx * self.ny * self.nz
        }

        /// Number of bytes a file with this geometry holds.
        pub fn byte_len(&self) -> usize {
            self.size() * self.word_size
        }
    }

    /// The smallest useful case: 2x2 unsigned bytes, big endian.
    pub const TINY_2X2: GeogridFixture = GeogridFixture {
        nx: 2,
        ny: 2,
        nz: 1,
        word_size: 1,
        signed: false,
        little_endian: false,
        scale: 1.0,
    };

    /// A topography-like tile: signed 16-bit heights in metres.
    pub const TOPO_TILE: GeogridFixture = GeogridFixture {
        nx: 12,
        ny: 8,
        nz: 1,
        word_size: 2,
        signed: true,
        little_endian: false,
        scale: 1.0,
    };

    /// A categorical field with one level per category, stored little endian.
    pub const LANDUSE_LEVELS: GeogridFixture = GeogridFixture {
        nx: 5,
        ny: 4,
        nz: 3,
        word_size: 1,
        signed: false,
        little_endian: true,
        scale: 1.0,
    };

    /// A scaled 32-bit field (e.g. albedo in hundredths).
    pub const SCALED_4BYTE: GeogridFixture = GeogridFixture {
        nx: 6,
        ny: 3,
        nz: 2,
        word_size: 4,
        signed: true,
        little_endian: true,
        scale: 0.01,
    };
}

/// The end-to-end example: bytes `[1, 2, 3, 4]` for the 2x2 byte grid.
pub const TINY_2X2_BYTES: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

/// Writes raw bytes to `dir/name` and returns the full path.
pub fn write_geogrid_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("Failed to write geogrid fixture");
    path
}
