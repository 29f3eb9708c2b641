//! Glyph outline sources.
//!
//! [`GlyphSource`] is the single capability the compiler needs from a
//! font backend: shape one line of text at a point size and hand back
//! its outline geometry. Concrete backends are swappable behind the
//! trait; [`FontGlyphSource`] is the production implementation on top of
//! `stencilgen-fonts`.

use kurbo::Point;

use stencilgen_fonts::{FontData, OutlineSink};

use crate::error::{GlyphSourceError, UnmappedGlyph};
use crate::types::{BoundingBox, PathCommand, Scalar};

/// One shaped line of text in glyph space.
///
/// Glyph space is Y-up with the pen origin at `(0, 0)`; the bounding box
/// is the control-point hull of `commands`, in the same coordinates.
/// Produced fresh per query and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LineOutline {
    /// Outline commands for the whole line.
    pub commands: Vec<PathCommand>,
    /// Control-point hull of `commands`. Has no extent when the line
    /// produced no geometry at all.
    pub bbox: BoundingBox,
    /// Code points that had no glyph in the font.
    pub unmapped: Vec<UnmappedGlyph>,
}

/// Capability to turn one line of text into outline geometry.
///
/// `text` must be a single line (no embedded line breaks) and
/// `point_size` positive; both are guaranteed by the layout layer.
/// Implementations are pure: no state across calls, safe to share
/// across concurrent generations.
pub trait GlyphSource {
    /// Shape `text` at `point_size` and return its outline.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphSourceError`] only when the underlying resource is
    /// unusable; characters without a glyph are reported per-character
    /// in [`LineOutline::unmapped`] instead.
    fn line_outline(&self, text: &str, point_size: Scalar)
    -> Result<LineOutline, GlyphSourceError>;
}

// ---------------------------------------------------------------------------
// Production implementation on stencilgen-fonts
// ---------------------------------------------------------------------------

/// [`GlyphSource`] backed by a parsed font.
///
/// Walks the line's characters: cmap lookup, kerning against the
/// previous glyph, outline extraction at the current pen position, then
/// the horizontal advance. Characters missing from the cmap contribute
/// no geometry and no advance and are recorded as [`UnmappedGlyph`]s.
#[derive(Debug, Clone, Copy)]
pub struct FontGlyphSource<'a> {
    font: &'a FontData,
}

impl<'a> FontGlyphSource<'a> {
    /// Wrap a parsed font.
    #[must_use]
    pub const fn new(font: &'a FontData) -> Self {
        Self { font }
    }
}

impl GlyphSource for FontGlyphSource<'_> {
    fn line_outline(
        &self,
        text: &str,
        point_size: Scalar,
    ) -> Result<LineOutline, GlyphSourceError> {
        let mut sink = PenSink::new();
        let mut unmapped = Vec::new();
        let mut prev_gid: Option<u16> = None;

        for ch in text.chars() {
            let Some(gid) = self.font.glyph_id(ch) else {
                unmapped.push(UnmappedGlyph { ch });
                continue;
            };

            if let Some(prev) = prev_gid {
                sink.pen_x += self.font.kern(prev, gid, point_size);
            }

            self.font.outline(gid, point_size, &mut sink);
            sink.pen_x += self.font.advance(gid, point_size);
            prev_gid = Some(gid);
        }

        Ok(LineOutline {
            commands: sink.commands,
            bbox: sink.bbox,
            unmapped,
        })
    }
}

/// Outline sink that offsets every point by the current pen position
/// and records the command-point hull as it goes.
struct PenSink {
    pen_x: Scalar,
    commands: Vec<PathCommand>,
    bbox: BoundingBox,
}

impl PenSink {
    const fn new() -> Self {
        Self {
            pen_x: 0.0,
            commands: Vec::new(),
            bbox: BoundingBox::EMPTY,
        }
    }

    fn place(&mut self, x: Scalar, y: Scalar) -> Point {
        let p = Point::new(x + self.pen_x, y);
        self.bbox.include_point(p);
        p
    }
}

impl OutlineSink for PenSink {
    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.place(x, y);
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.place(x, y);
        self.commands.push(PathCommand::LineTo(p));
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let c = self.place(x1, y1);
        let p = self.place(x, y);
        self.commands.push(PathCommand::QuadTo(c, p));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let c1 = self.place(x1, y1);
        let c2 = self.place(x2, y2);
        let p = self.place(x, y);
        self.commands.push(PathCommand::CurveTo(c1, c2, p));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
