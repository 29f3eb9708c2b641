//! Error and warning types for stencil generation.

use std::fmt;

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

/// The underlying font resource became unusable while shaping.
///
/// Fatal: generation aborts with no partial document, since a stencil
/// missing some glyphs is not a valid physical output.
#[derive(Debug, Clone)]
pub struct GlyphSourceError {
    message: String,
}

impl GlyphSourceError {
    /// Create an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for GlyphSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "glyph source error: {}", self.message)
    }
}

impl std::error::Error for GlyphSourceError {}

/// An error produced by [`generate`](crate::generate).
///
/// Both variants abort the whole call; all-blank input is not an error
/// and returns the empty document instead.
#[derive(Debug)]
pub enum StencilError {
    /// A precondition on the inputs does not hold. The core asserts
    /// rather than clamping; range clamping belongs to the calling layer.
    InvalidParameter(String),
    /// The glyph source failed mid-generation.
    GlyphSource(GlyphSourceError),
}

impl fmt::Display for StencilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::GlyphSource(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StencilError {}

impl From<GlyphSourceError> for StencilError {
    fn from(e: GlyphSourceError) -> Self {
        Self::GlyphSource(e)
    }
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// A code point with no glyph in the selected font.
///
/// Non-fatal: the character contributes no geometry and no advance, the
/// warning is reported alongside the (possibly visually incomplete)
/// document, and export is not blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmappedGlyph {
    /// The character that has no outline.
    pub ch: char,
}

impl fmt::Display for UnmappedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no glyph for {:?} in the selected font", self.ch)
    }
}
