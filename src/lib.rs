//! # act2a2p
//!
//! Converts Adobe Color Table (`.act`) palettes into `.a2p` palettes for the
//! Apple II display context, e.g. to process files from colodore.com. The
//! first 16 RGB triples are reordered from the C64 storage layout into Apple
//! II colour order and padded to 4-byte records.

pub mod converter;
pub mod error;
pub mod formats;
pub mod palette;
