//! Text-to-stencil path compiler.
//!
//! Turns multi-line text into a single compound vector path: a solid
//! backing rectangle with the text's glyph outlines cut out as holes
//! (even-odd fill), plus the overall padded dimensions — ready for
//! laser cutting or 3D printing.
//!
//! The pipeline is a straight line: a [`GlyphSource`] shapes each line,
//! [`layout`](layout::layout) stacks the lines bottom-up,
//! [`align`](align::resolve_offsets) slides each line horizontally,
//! [`transform`](transform::StencilTransform) maps glyph space into the
//! padded document, and [`compile`](compile::compile) emits the compound
//! command stream. [`generate`] sequences the whole thing.
//!
//! Every call is a pure function of its inputs: no state is kept between
//! invocations and the shared font data is only ever read, so concurrent
//! generations never interfere.

pub mod align;
pub mod compile;
pub mod document;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod transform;
pub mod types;

pub use document::StencilDocument;
pub use error::{GlyphSourceError, StencilError, UnmappedGlyph};
pub use glyph::{FontGlyphSource, GlyphSource, LineOutline};
pub use layout::{LINE_HEIGHT_FACTOR, LineRecord};
pub use types::{Alignment, BoundingBox, PathCommand, Point, Scalar};

/// A generated stencil: the document plus non-fatal shaping warnings.
#[derive(Debug, Clone)]
pub struct Stencil {
    /// The compiled document.
    pub document: StencilDocument,
    /// Unmapped-glyph warnings. The document is complete except for the
    /// listed characters; callers may surface these without blocking
    /// export.
    pub warnings: Vec<UnmappedGlyph>,
}

/// Generate a stencil document from text.
///
/// Input with no visible characters is not an error: it yields the
/// zero-dimension empty document. Identical inputs always produce
/// byte-identical output.
///
/// # Errors
///
/// - [`StencilError::InvalidParameter`] if `point_size` is not a finite
///   positive number or `padding` is not finite and non-negative. The
///   core asserts these preconditions; range clamping is the calling
///   layer's job.
/// - [`StencilError::GlyphSource`] if the glyph source fails, in which
///   case no partial document is produced.
pub fn generate(
    glyphs: &dyn GlyphSource,
    text: &str,
    point_size: Scalar,
    padding: Scalar,
    alignment: Alignment,
) -> Result<Stencil, StencilError> {
    if !point_size.is_finite() || point_size <= 0.0 {
        return Err(StencilError::InvalidParameter(format!(
            "point size must be a positive number, got {point_size}"
        )));
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(StencilError::InvalidParameter(format!(
            "padding must be a non-negative number, got {padding}"
        )));
    }

    let stack = layout::layout(glyphs, text, point_size)?;
    let Some(metrics) = transform::BlockMetrics::measure(&stack.records, padding) else {
        return Ok(Stencil {
            document: StencilDocument::empty(),
            warnings: stack.warnings,
        });
    };

    let offsets = align::resolve_offsets(&stack.records, metrics.block_width, alignment);
    let transform = transform::StencilTransform::new(&metrics);
    let commands = compile::compile(
        &stack.records,
        &offsets,
        &transform,
        metrics.rect_width,
        metrics.rect_height,
    );

    Ok(Stencil {
        document: StencilDocument::new(commands, metrics.rect_width, metrics.rect_height),
        warnings: stack.warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use kurbo::Point;

    /// Test glyph source: `'A'` is a unit square scaled by the point
    /// size, `' '` advances without geometry, everything else is
    /// unmapped. Makes every expectation below literal.
    struct SquareGlyphs;

    impl GlyphSource for SquareGlyphs {
        fn line_outline(
            &self,
            text: &str,
            point_size: Scalar,
        ) -> Result<LineOutline, GlyphSourceError> {
            let mut commands = Vec::new();
            let mut bbox = BoundingBox::EMPTY;
            let mut unmapped = Vec::new();
            let mut pen_x = 0.0;
            for ch in text.chars() {
                match ch {
                    'A' => {
                        let s = point_size;
                        let quad = [
                            Point::new(pen_x, 0.0),
                            Point::new(pen_x + s, 0.0),
                            Point::new(pen_x + s, s),
                            Point::new(pen_x, s),
                        ];
                        commands.push(PathCommand::MoveTo(quad[0]));
                        commands.push(PathCommand::LineTo(quad[1]));
                        commands.push(PathCommand::LineTo(quad[2]));
                        commands.push(PathCommand::LineTo(quad[3]));
                        commands.push(PathCommand::Close);
                        for p in quad {
                            bbox.include_point(p);
                        }
                        pen_x += s;
                    }
                    ' ' => pen_x += point_size,
                    other => unmapped.push(UnmappedGlyph { ch: other }),
                }
            }
            Ok(LineOutline {
                commands,
                bbox,
                unmapped,
            })
        }
    }

    fn make(text: &str, size: Scalar, padding: Scalar, alignment: Alignment) -> Stencil {
        generate(&SquareGlyphs, text, size, padding, alignment).unwrap()
    }

    fn points_of(commands: &[PathCommand]) -> Vec<Point> {
        let mut points = Vec::new();
        for cmd in commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
                PathCommand::QuadTo(c, p) => points.extend([c, p]),
                PathCommand::CurveTo(c1, c2, p) => points.extend([c1, c2, p]),
                PathCommand::Close => {}
            }
        }
        points
    }

    #[test]
    fn single_glyph_document() {
        let stencil = make("A", 40.0, 10.0, Alignment::Center);
        let doc = &stencil.document;
        assert!((doc.width() - 60.0).abs() < 1e-9);
        assert!((doc.height() - 60.0).abs() < 1e-9);
        assert_eq!(
            doc.path_data(),
            "M 0.00 0.00 L 60.00 0.00 L 60.00 60.00 L 0.00 60.00 Z \
             M 10.00 50.00 L 50.00 50.00 L 50.00 10.00 L 10.00 10.00 Z"
        );
        assert!(stencil.warnings.is_empty());
    }

    #[test]
    fn blank_input_yields_the_empty_document() {
        for text in ["", "   ", " \n\t\n "] {
            let stencil = make(text, 40.0, 10.0, Alignment::Center);
            assert!(stencil.document.is_empty(), "text {text:?}");
            assert!(stencil.document.width().abs() < 1e-9);
            assert!(stencil.document.height().abs() < 1e-9);
        }
    }

    #[test]
    fn two_stacked_lines() {
        // Line height 48: total text height 48 + 40 = 88.
        let doc = make("A\nA", 40.0, 0.0, Alignment::Center).document;
        assert!((doc.width() - 40.0).abs() < 1e-9);
        assert!((doc.height() - 88.0).abs() < 1e-9);
    }

    #[test]
    fn trailing_blank_line_adds_space_below() {
        let plain = make("A", 40.0, 10.0, Alignment::Center).document;
        let trailing = make("A\n", 40.0, 10.0, Alignment::Center).document;
        assert!((trailing.height() - plain.height() - 48.0).abs() < 1e-9);
        assert!((trailing.width() - plain.width()).abs() < 1e-9);
    }

    #[test]
    fn leading_blank_line_is_dropped() {
        let plain = make("A", 40.0, 10.0, Alignment::Center).document;
        let leading = make("\nA", 40.0, 10.0, Alignment::Center).document;
        assert!((leading.height() - plain.height()).abs() < 1e-9);
    }

    #[test]
    fn padding_strictly_grows_dimensions() {
        let mut last = make("A\nA A", 40.0, 0.0, Alignment::Center).document;
        for padding in [1.0, 10.0, 25.0] {
            let doc = make("A\nA A", 40.0, padding, Alignment::Center).document;
            assert!(doc.width() > last.width());
            assert!(doc.height() > last.height());
            last = doc;
        }
    }

    #[test]
    fn alignment_never_changes_dimensions() {
        let center = make("A\nA A", 40.0, 10.0, Alignment::Center).document;
        for alignment in [Alignment::Left, Alignment::Right] {
            let doc = make("A\nA A", 40.0, 10.0, alignment).document;
            assert!((doc.width() - center.width()).abs() < 1e-9);
            assert!((doc.height() - center.height()).abs() < 1e-9);
            assert_ne!(doc.path_data(), center.path_data());
        }
    }

    #[test]
    fn left_and_right_edges_respect_padding() {
        // Single line fills the block: its left edge sits at the padding
        // when left-aligned, its right edge at width - padding when
        // right-aligned.
        let left = make("A", 40.0, 10.0, Alignment::Left).document;
        let glyphs = &points_of(left.commands())[4..];
        let min_x = glyphs.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        assert!((min_x - 10.0).abs() < 1e-9);

        let right = make("A", 40.0, 10.0, Alignment::Right).document;
        let glyphs = &points_of(right.commands())[4..];
        let max_x = glyphs.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        assert!((max_x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn short_line_slides_with_alignment() {
        // Block width 120 from "A A"; the lone "A" line has 80 of slack.
        let xs = |alignment: Alignment| {
            let doc = make("A\nA A", 40.0, 0.0, alignment).document;
            // The lone "A" is the top line: highest document points.
            let points = points_of(&doc.commands()[5..]);
            points
                .iter()
                .filter(|p| p.y < 41.0)
                .map(|p| p.x)
                .fold(f64::INFINITY, f64::min)
        };
        assert!((xs(Alignment::Left) - 0.0).abs() < 1e-9);
        assert!((xs(Alignment::Center) - 40.0).abs() < 1e-9);
        assert!((xs(Alignment::Right) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn every_vertex_is_contained_in_the_document() {
        for (text, padding) in [("A", 10.0), ("A\nA A\n\nA", 3.5), ("A A A", 0.0)] {
            let doc = make(text, 40.0, padding, Alignment::Center).document;
            for p in points_of(doc.commands()) {
                assert!(
                    p.x >= -0.01 && p.x <= doc.width() + 0.01,
                    "x {} outside [0, {}] for {text:?}",
                    p.x,
                    doc.width()
                );
                assert!(
                    p.y >= -0.01 && p.y <= doc.height() + 0.01,
                    "y {} outside [0, {}] for {text:?}",
                    p.y,
                    doc.height()
                );
            }
        }
    }

    #[test]
    fn identical_inputs_are_byte_identical() {
        let a = make("A\nA A", 42.5, 7.25, Alignment::Right).document;
        let b = make("A\nA A", 42.5, 7.25, Alignment::Right).document;
        assert_eq!(a.path_data(), b.path_data());
        assert_eq!(a, b);
    }

    #[test]
    fn dimensions_rederive_from_block_metrics() {
        // width == blockWidth + 2*padding, height == textHeight + 2*padding.
        let doc = make("A A\nA", 40.0, 12.0, Alignment::Left).document;
        assert!((doc.width() - (120.0 + 24.0)).abs() < 1e-9);
        assert!((doc.height() - (88.0 + 24.0)).abs() < 1e-9);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = generate(&SquareGlyphs, "A", size, 10.0, Alignment::Center);
            assert!(
                matches!(err, Err(StencilError::InvalidParameter(_))),
                "size {size} should be rejected"
            );
        }
        for padding in [-0.5, f64::NAN] {
            let err = generate(&SquareGlyphs, "A", 40.0, padding, Alignment::Center);
            assert!(
                matches!(err, Err(StencilError::InvalidParameter(_))),
                "padding {padding} should be rejected"
            );
        }
    }

    #[test]
    fn unmapped_characters_warn_but_do_not_abort() {
        let stencil = make("Ax", 40.0, 10.0, Alignment::Center);
        assert_eq!(stencil.warnings, vec![UnmappedGlyph { ch: 'x' }]);
        // The mapped glyph still renders.
        assert!(!stencil.document.is_empty());
        assert!((stencil.document.width() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn fully_unmapped_line_keeps_warnings_and_block_metrics() {
        let stencil = make("xy\nA", 40.0, 0.0, Alignment::Center);
        assert_eq!(stencil.warnings.len(), 2);
        let doc = &stencil.document;
        // Only the "A" line has geometry; the unmapped line still
        // occupies its stacking step above it.
        assert!((doc.width() - 40.0).abs() < 1e-9);
        assert!((doc.height() - 40.0).abs() < 1e-9);
    }
}
