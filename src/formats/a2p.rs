//! # A2P output
//!
//! An A2P file is 16 four-byte records, RGB plus one zero pad byte, in Apple
//! II colour order. 64 bytes total.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::palette::{Rgb, PALETTE_SIZE};

/// Bytes per colour record in an A2P file (RGB + zero pad).
pub const A2P_RECORD_SIZE: usize = 4;

/// Assembles the 64-byte A2P image for an already-remapped palette.
pub fn a2p_bytes(colors: &[Rgb; PALETTE_SIZE]) -> Vec<u8> {
    let mut out = Vec::with_capacity(PALETTE_SIZE * A2P_RECORD_SIZE);
    for color in colors {
        out.extend_from_slice(&[color.r, color.g, color.b, 0]);
    }
    out
}

pub fn write_a2p<W: Write>(writer: &mut W, colors: &[Rgb; PALETTE_SIZE]) -> io::Result<()> {
    writer.write_all(&a2p_bytes(colors))
}

/// Truncate-creates `path` and writes the palette to it.
pub fn to_file<P: AsRef<Path>>(path: P, colors: &[Rgb; PALETTE_SIZE]) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_a2p(&mut file, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_four_bytes_per_record_with_zero_pad() {
        let mut colors = [Rgb::default(); PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = Rgb {
                r: i as u8,
                g: 0x80,
                b: 0xFF,
            };
        }

        let bytes = a2p_bytes(&colors);
        assert_eq!(bytes.len(), PALETTE_SIZE * A2P_RECORD_SIZE);
        for (i, record) in bytes.chunks(A2P_RECORD_SIZE).enumerate() {
            assert_eq!(record, &[i as u8, 0x80, 0xFF, 0x00]);
        }
    }

    #[test]
    fn write_a2p_matches_a2p_bytes() {
        let colors = [Rgb { r: 1, g: 2, b: 3 }; PALETTE_SIZE];
        let mut sink = Vec::new();
        write_a2p(&mut sink, &colors).unwrap();
        assert_eq!(sink, a2p_bytes(&colors));
    }
}
