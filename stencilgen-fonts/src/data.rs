//! Font data wrapper around `ttf-parser`.

use std::sync::Arc;

use crate::error::FontError;
use crate::outline::OutlineSink;

/// Parsed font data.
///
/// Stores owned font bytes and the cached em size. Creates a
/// `ttf_parser::Face` on demand for individual queries — parsing is
/// sub-microsecond (no allocation, just header validation and offset
/// table construction).
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            bytes,
        })
    }

    /// Create a temporary `Face` reference for queries.
    ///
    /// The bytes were validated at construction, so re-parsing cannot fail.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Scale factor from design units to points at the given font size.
    #[must_use]
    pub fn scale(&self, font_size: f64) -> f64 {
        font_size / f64::from(self.units_per_em)
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Horizontal advance for a glyph, scaled to the given font size.
    ///
    /// Glyphs without advance data (rare, malformed `hmtx`) advance by 0.
    #[must_use]
    pub fn advance(&self, glyph_id: u16, font_size: f64) -> f64 {
        self.face()
            .glyph_hor_advance(ttf_parser::GlyphId(glyph_id))
            .map_or(0.0, |adv| f64::from(adv) * self.scale(font_size))
    }

    /// Kerning adjustment between two glyphs, scaled to the given font size.
    /// Negative values mean tighter spacing.
    #[must_use]
    pub fn kern(&self, left: u16, right: u16, font_size: f64) -> f64 {
        let raw = self
            .face()
            .tables()
            .kern
            .and_then(|kern| {
                kern.subtables.into_iter().find_map(|st| {
                    st.glyphs_kerning(ttf_parser::GlyphId(left), ttf_parser::GlyphId(right))
                })
            })
            .unwrap_or(0);
        f64::from(raw) * self.scale(font_size)
    }

    /// Extract the outline of a glyph into the given sink.
    ///
    /// Coordinates are pre-scaled from design units to the given font size.
    /// Returns `false` if the glyph has no outline (e.g., space character).
    pub fn outline(&self, glyph_id: u16, font_size: f64, sink: &mut dyn OutlineSink) -> bool {
        let face = self.face();
        let scale = self.scale(font_size);
        let mut adapter = OutlineAdapter { sink, scale };
        face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut adapter)
            .is_some()
    }
}

/// Adapter from [`OutlineSink`] to `ttf_parser::OutlineBuilder`.
struct OutlineAdapter<'a> {
    sink: &'a mut dyn OutlineSink,
    scale: f64,
}

impl ttf_parser::OutlineBuilder for OutlineAdapter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.sink
            .move_to(f64::from(x) * self.scale, f64::from(y) * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.sink
            .line_to(f64::from(x) * self.scale, f64::from(y) * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.sink.quad_to(
            f64::from(x1) * self.scale,
            f64::from(y1) * self.scale,
            f64::from(x) * self.scale,
            f64::from(y) * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.sink.curve_to(
            f64::from(x1) * self.scale,
            f64::from(y1) * self.scale,
            f64::from(x2) * self.scale,
            f64::from(y2) * self.scale,
            f64::from(x) * self.scale,
            f64::from(y) * self.scale,
        );
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let bytes: Arc<[u8]> = Arc::from(&b"definitely not a font"[..]);
        let err = FontData::from_bytes(bytes);
        assert!(matches!(err, Err(FontError::Parse(_))));
    }

    #[test]
    fn empty_bytes_fail_to_parse() {
        let bytes: Arc<[u8]> = Arc::from(&[][..]);
        assert!(FontData::from_bytes(bytes).is_err());
    }
}
