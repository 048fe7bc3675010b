use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The given path does not carry the `.act` extension token.
    #[error("input file must be .act: {}", .path.display())]
    NotAnActFile { path: PathBuf },

    /// The input ended before 16 complete RGB triples were found.
    #[error("palette too short: found {colors} colours, expected {expected}")]
    ShortPalette { colors: usize, expected: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}
