//! # Conversion pipeline
//!
//! One linear pass per invocation: validate the path, parse the ACT palette,
//! reorder it, write the A2P file next to the input. Any failure aborts the
//! run; there is no retry or partial output.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::formats::{a2p, act::ActPalette};
use crate::palette;

const ACT_EXTENSION: &str = ".act";
const A2P_EXTENSION: &str = ".a2p";

/// Case-insensitive check that the file name carries the `.act` token.
pub fn is_act_path(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_ascii_lowercase().contains(ACT_EXTENSION),
        None => false,
    }
}

/// Derives the output path: a trailing `.act` (any case) is stripped and
/// `.a2p` appended, in the same directory as the input.
pub fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let stem = if name.to_ascii_lowercase().ends_with(ACT_EXTENSION) {
        &name[..name.len() - ACT_EXTENSION.len()]
    } else {
        name
    };
    input.with_file_name(format!("{}{}", stem, A2P_EXTENSION))
}

/// Converts one ACT file and returns the path of the written A2P file.
pub fn convert_file(input: &Path) -> Result<PathBuf, ConvertError> {
    if !is_act_path(input) {
        return Err(ConvertError::NotAnActFile {
            path: input.to_path_buf(),
        });
    }

    let act = ActPalette::from_file(input)?;
    let remapped = palette::remap(&act);

    let output = output_path(input);
    a2p::to_file(&output, &remapped)?;
    Ok(output)
}
