//! Reading geogrid files into a [`FloatGrid`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GeogridError, GeogridResult};
use crate::grid::{FloatGrid, GridSpec};
use crate::sample::decode_scaled;

/// Read and decode a geogrid file.
///
/// Only the first `spec.byte_len()` bytes are read; trailing bytes are
/// ignored. A file shorter than that is an error rather than a partially
/// filled grid.
pub fn decode<P: AsRef<Path>>(path: P, spec: &GridSpec) -> GeogridResult<FloatGrid> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let expected = spec.byte_len();
    let actual = file.metadata()?.len();
    if actual < expected {
        return Err(GeogridError::ShortInput {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    debug!(
        path = %path.display(),
        nx = spec.nx,
        ny = spec.ny,
        nz = spec.nz,
        word_size = spec.word_size.bytes(),
        file_bytes = actual,
        "Reading geogrid"
    );

    // `expected` fits in usize, checked when the spec was built.
    let mut bytes = Vec::with_capacity(expected as usize);
    BufReader::new(file).take(expected).read_to_end(&mut bytes)?;

    // The file may have shrunk between stat and read.
    if (bytes.len() as u64) < expected {
        return Err(GeogridError::ShortInput {
            path: path.to_path_buf(),
            expected,
            actual: bytes.len() as u64,
        });
    }

    decode_bytes(&bytes, spec)
}

/// Decode an in-memory geogrid image.
///
/// Words are consumed in storage order (x fastest, then y, then z), so the
/// i-th word lands at linear offset i of the returned grid.
pub fn decode_bytes(bytes: &[u8], spec: &GridSpec) -> GeogridResult<FloatGrid> {
    let word_len = spec.word_size.bytes();
    let needed = spec.num_points() * word_len;

    if bytes.len() < needed {
        return Err(GeogridError::ShortInput {
            path: PathBuf::from("<memory>"),
            expected: needed as u64,
            actual: bytes.len() as u64,
        });
    }

    let data: Vec<f32> = bytes[..needed]
        .chunks_exact(word_len)
        .map(|word| {
            decode_scaled(
                word,
                spec.word_size,
                spec.endianness,
                spec.signed,
                spec.scale,
            )
        })
        .collect();

    debug!(points = data.len(), "Decoded geogrid words");

    FloatGrid::from_vec(spec.nx, spec.ny, spec.nz, data)
        .ok_or_else(|| GeogridError::invalid_spec("decoded length does not match grid extents"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Endianness;

    #[test]
    fn test_decode_bytes_order() {
        // 2 x 2 x 2, one byte per word, value = file position
        let bytes: Vec<u8> = (0..8).collect();
        let spec = GridSpec::new(2, 2, 2, 1, false, Endianness::Big, 1.0).unwrap();
        let grid = decode_bytes(&bytes, &spec).unwrap();

        assert_eq!(grid.get(1, 0, 0), Some(1.0));
        assert_eq!(grid.get(0, 1, 0), Some(2.0));
        assert_eq!(grid.get(0, 0, 1), Some(4.0));
        assert_eq!(grid.get(1, 1, 1), Some(7.0));
    }

    #[test]
    fn test_decode_bytes_short() {
        let spec = GridSpec::new(2, 2, 1, 2, false, Endianness::Big, 1.0).unwrap();
        let err = decode_bytes(&[0u8; 7], &spec).unwrap_err();
        assert!(matches!(
            err,
            GeogridError::ShortInput {
                expected: 8,
                actual: 7,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_bytes_trailing_ignored() {
        let spec = GridSpec::new(2, 1, 1, 1, false, Endianness::Big, 1.0).unwrap();
        let grid = decode_bytes(&[5, 6, 7, 8], &spec).unwrap();
        assert_eq!(grid.as_slice(), &[5.0, 6.0]);
    }

    #[test]
    fn test_decode_missing_file() {
        let spec = GridSpec::new(2, 2, 1, 1, false, Endianness::Big, 1.0).unwrap();
        let err = decode("/nonexistent/geo_em.dat", &spec).unwrap_err();
        assert!(matches!(err, GeogridError::IoError(_)));
        assert!(err.is_io());
    }
}
