//! Multiline stacking.
//!
//! Splits input text into lines and assigns each non-blank line a
//! vertical stacking offset. Glyph space is Y-up while the input reads
//! top-to-bottom, so lines are processed in **reverse** input order,
//! stacking upward from `stack_y = 0`: the first input line ends up at
//! the greatest Y and comes out on top after the document transform
//! flips the axis.

use crate::error::UnmappedGlyph;
use crate::glyph::{GlyphSource, LineOutline};
use crate::types::{BoundingBox, PathCommand, Scalar};

/// Fixed multiplier on point size for vertical spacing between lines.
pub const LINE_HEIGHT_FACTOR: Scalar = 1.2;

/// One stacked non-blank line.
///
/// Records are in processing order: the first record sits at the bottom
/// of the stack (smallest `stack_y`), the last at the top.
#[derive(Debug, Clone)]
pub struct LineRecord {
    /// The line's text, exactly as it appeared in the input.
    pub text: String,
    /// Vertical offset of the line's pen origin in glyph space.
    pub stack_y: Scalar,
    /// Outline commands in glyph space, relative to the line's own origin.
    pub commands: Vec<PathCommand>,
    /// Control-point hull of `commands`, relative to the line's own origin.
    pub bbox: BoundingBox,
}

/// The stacked lines of one input text, plus shaping warnings.
#[derive(Debug, Clone, Default)]
pub struct LineStack {
    /// Non-blank lines bottom-up. Empty when the input has no visible text.
    pub records: Vec<LineRecord>,
    /// Unmapped-glyph warnings from every shaped line, including lines
    /// that produced no geometry and therefore no record.
    pub warnings: Vec<UnmappedGlyph>,
}

/// Split `text` on `'\n'` and stack its lines bottom-up.
///
/// Every line, blank or not, advances the stack by
/// `point_size * LINE_HEIGHT_FACTOR`; only lines with non-blank trimmed
/// content are shaped and recorded. A shaped line whose every glyph is
/// empty advances the stack but produces no record, keeping the block
/// metrics finite.
///
/// # Errors
///
/// Propagates [`GlyphSourceError`](crate::GlyphSourceError) from the
/// glyph source; shaping aborts at the first failure.
pub fn layout(
    glyphs: &dyn GlyphSource,
    text: &str,
    point_size: Scalar,
) -> Result<LineStack, crate::GlyphSourceError> {
    let mut stack = LineStack::default();
    let mut stack_y = 0.0;

    for line in text.split('\n').rev() {
        if !line.trim().is_empty() {
            let LineOutline {
                commands,
                bbox,
                mut unmapped,
            } = glyphs.line_outline(line, point_size)?;
            stack.warnings.append(&mut unmapped);
            if bbox.has_extent() {
                stack.records.push(LineRecord {
                    text: line.to_owned(),
                    stack_y,
                    commands,
                    bbox,
                });
            }
        }
        stack_y += point_size * LINE_HEIGHT_FACTOR;
    }

    Ok(stack)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use crate::GlyphSourceError;
    use kurbo::Point;

    /// Every character shapes to a `size`-sided square at the pen, except
    /// `'?'` which is unmapped.
    struct Squares;

    impl GlyphSource for Squares {
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
                if ch == '?' {
                    unmapped.push(UnmappedGlyph { ch });
                    continue;
                }
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
            Ok(LineOutline {
                commands,
                bbox,
                unmapped,
            })
        }
    }

    #[test]
    fn lines_stack_in_reverse_input_order() {
        let stack = layout(&Squares, "AB\nC", 10.0).unwrap();
        assert_eq!(stack.records.len(), 2);
        // Bottom of the stack is the *last* input line.
        assert_eq!(stack.records[0].text, "C");
        assert!(stack.records[0].stack_y.abs() < 1e-9);
        assert_eq!(stack.records[1].text, "AB");
        assert!((stack.records[1].stack_y - 12.0).abs() < 1e-9);
        assert!((stack.records[1].bbox.max_x - 20.0).abs() < 1e-9);
    }

    #[test]
    fn blank_lines_advance_without_records() {
        let stack = layout(&Squares, "A\n \nB", 10.0).unwrap();
        assert_eq!(stack.records.len(), 2);
        assert!(stack.records[0].stack_y.abs() < 1e-9);
        // The blank middle line pushed the top line up a full step.
        assert!((stack.records[1].stack_y - 24.0).abs() < 1e-9);
    }

    #[test]
    fn all_blank_input_yields_no_records() {
        let stack = layout(&Squares, "  \n\n\t", 10.0).unwrap();
        assert!(stack.records.is_empty());
        assert!(stack.warnings.is_empty());
    }

    #[test]
    fn geometry_less_line_advances_but_keeps_warnings() {
        let stack = layout(&Squares, "A\n??", 10.0).unwrap();
        // "??" shapes to nothing: no record, but its warnings survive
        // and it still occupies a stacking step below "A".
        assert_eq!(stack.records.len(), 1);
        assert_eq!(stack.records[0].text, "A");
        assert!((stack.records[0].stack_y - 12.0).abs() < 1e-9);
        assert_eq!(stack.warnings.len(), 2);
        assert_eq!(stack.warnings[0].ch, '?');
    }
}
