//! Errors for host-supplied font data.

use std::fmt;

/// Failure to turn host-supplied bytes into a usable font.
///
/// Font files are never embedded in this crate: the CLI reads the
/// catalog's TTFs from a directory and the browser host hands over
/// fetched bytes. The one thing that can go wrong at this layer is
/// bytes that do not parse as an OpenType/TrueType font.
#[derive(Debug)]
pub enum FontError {
    /// The bytes are not a parseable font file.
    Parse(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(reason) => write!(f, "unusable font data: {reason}"),
        }
    }
}

impl std::error::Error for FontError {}
