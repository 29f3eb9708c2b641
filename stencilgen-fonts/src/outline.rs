//! Glyph outline extraction.
//!
//! [`OutlineSink`] is the callback surface this crate drives while
//! walking a glyph's contours. It is deliberately not
//! `ttf_parser::OutlineBuilder`: consumers implement this trait and
//! stay ignorant of the parsing backend.

/// Receiver for one glyph's outline commands.
///
/// Coordinates arrive in points (design units already scaled to the
/// requested size), Y-up with the origin on the glyph's baseline. The
/// stencil pipeline keeps that orientation through layout and stacking
/// and only flips to Y-down document space at the very end; a sink that
/// lays glyphs along a line applies its own pen offset as commands
/// arrive.
pub trait OutlineSink {
    /// Begin a new contour at the given point.
    fn move_to(&mut self, x: f64, y: f64);
    /// Extend the contour with a straight segment.
    fn line_to(&mut self, x: f64, y: f64);
    /// Extend the contour with a quadratic Bezier (one control point,
    /// TrueType outlines).
    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);
    /// Extend the contour with a cubic Bezier (two control points, CFF
    /// outlines).
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    /// Close the contour back to where it began.
    fn close(&mut self);
}
