//! # Adobe Color Table input
//!
//! An ACT file is a flat run of 3-byte RGB records. Only the first 16 matter
//! here; anything after them (including the optional 4-byte colour-count and
//! transparency-index suffix) is ignored.

use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::palette::{Rgb, PALETTE_SIZE};

/// Bytes per colour record in an ACT file.
pub const ACT_RECORD_SIZE: usize = 3;

pub struct ActPalette {
    colors: [Rgb; PALETTE_SIZE],
}

impl ActPalette {
    /// Takes the first 16 complete RGB triples from `data` in file order.
    /// Fails if the data holds fewer than 16; a partial trailing triple does
    /// not count.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ConvertError> {
        let complete = data.len() / ACT_RECORD_SIZE;
        if complete < PALETTE_SIZE {
            return Err(ConvertError::ShortPalette {
                colors: complete,
                expected: PALETTE_SIZE,
            });
        }

        let mut colors = [Rgb::default(); PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            let offset = i * ACT_RECORD_SIZE;
            *color = Rgb {
                r: data[offset],
                g: data[offset + 1],
                b: data[offset + 2],
            };
        }

        Ok(ActPalette { colors })
    }

    /// Reads the whole file in one pass and parses the 48-byte prefix.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(n: u8) -> Vec<u8> {
        (0..n).flat_map(|i| [i, i, i]).collect()
    }

    #[test]
    fn parses_exactly_sixteen_records() {
        let palette = ActPalette::from_bytes(&triples(16)).unwrap();
        assert_eq!(palette.colors()[0], Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(palette.colors()[15], Rgb { r: 15, g: 15, b: 15 });
    }

    #[test]
    fn ignores_bytes_after_the_48th() {
        // A 256-colour ACT with the optional count/index suffix.
        let mut data = triples(16);
        data.extend(std::iter::repeat(0xAA).take(240 * 3));
        data.extend_from_slice(&[0x00, 0x10, 0x00, 0x00]);

        let palette = ActPalette::from_bytes(&data).unwrap();
        assert_eq!(palette.colors()[15], Rgb { r: 15, g: 15, b: 15 });
    }

    #[test]
    fn partial_trailing_triple_does_not_count() {
        let mut data = triples(15);
        data.extend_from_slice(&[1, 2]);

        match ActPalette::from_bytes(&data) {
            Err(ConvertError::ShortPalette { colors, expected }) => {
                assert_eq!(colors, 15);
                assert_eq!(expected, 16);
            }
            other => panic!("expected ShortPalette, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn short_input_fails_fast() {
        match ActPalette::from_bytes(&triples(8)) {
            Err(ConvertError::ShortPalette { colors, .. }) => assert_eq!(colors, 8),
            other => panic!("expected ShortPalette, got {:?}", other.map(|_| ())),
        }
    }
}
