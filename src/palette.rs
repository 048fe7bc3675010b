//! # Palette model
//!
//! Colour records and the fixed reordering between ACT file order (the
//! colodore C64 layout) and Apple II colour order.

use crate::formats::act::ActPalette;

pub const PALETTE_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The 16 Apple II colour slots, declared in A2P file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppleColor {
    Black,
    Magenta,
    DarkBlue,
    Purple,
    DarkGreen,
    Gray,
    MediumBlue,
    LightBlue,
    Brown,
    Orange,
    Gray2,
    Pink,
    Green,
    Yellow,
    Aquamarine,
    White,
}

impl AppleColor {
    pub const ALL: [AppleColor; PALETTE_SIZE] = [
        AppleColor::Black,
        AppleColor::Magenta,
        AppleColor::DarkBlue,
        AppleColor::Purple,
        AppleColor::DarkGreen,
        AppleColor::Gray,
        AppleColor::MediumBlue,
        AppleColor::LightBlue,
        AppleColor::Brown,
        AppleColor::Orange,
        AppleColor::Gray2,
        AppleColor::Pink,
        AppleColor::Green,
        AppleColor::Yellow,
        AppleColor::Aquamarine,
        AppleColor::White,
    ];

    /// Position of this colour in ACT file order.
    pub fn act_index(self) -> usize {
        ACT_SOURCE_INDEX[self as usize]
    }
}

/// For each Apple II slot (enumeration order = output order), the position of
/// that colour in ACT file order. A bijection over 0..15.
pub const ACT_SOURCE_INDEX: [usize; PALETTE_SIZE] =
    [0, 2, 6, 4, 5, 11, 14, 3, 9, 8, 12, 10, 13, 7, 15, 1];

/// Reorders an ACT palette into Apple II colour order. Pure permutation; the
/// records themselves are copied unchanged.
pub fn remap(palette: &ActPalette) -> [Rgb; PALETTE_SIZE] {
    let mut out = [Rgb::default(); PALETTE_SIZE];
    for color in AppleColor::ALL {
        out[color as usize] = palette.colors()[color.act_index()];
    }
    out
}
