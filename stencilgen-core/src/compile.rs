//! Compound path compilation.
//!
//! Emits the backing rectangle first, then every line's outline shifted
//! to its aligned position and mapped into document space. Nested glyph
//! contours become holes in the rectangle under the document's even-odd
//! fill rule.

use kurbo::Point;

use crate::layout::LineRecord;
use crate::transform::StencilTransform;
use crate::types::{PathCommand, Scalar};

/// Compile the stacked lines into one compound command sequence.
///
/// `offsets` must be parallel to `records` (one x offset per line).
/// Command kinds are preserved; every coordinate pair, control points
/// included, goes through the same affine map.
#[must_use]
pub fn compile(
    records: &[LineRecord],
    offsets: &[Scalar],
    transform: &StencilTransform,
    rect_width: Scalar,
    rect_height: Scalar,
) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(
        5 + records
            .iter()
            .map(|record| record.commands.len())
            .sum::<usize>(),
    );

    // Backing rectangle, clockwise from the top-left document corner.
    out.push(PathCommand::MoveTo(Point::new(0.0, 0.0)));
    out.push(PathCommand::LineTo(Point::new(rect_width, 0.0)));
    out.push(PathCommand::LineTo(Point::new(rect_width, rect_height)));
    out.push(PathCommand::LineTo(Point::new(0.0, rect_height)));
    out.push(PathCommand::Close);

    for (record, &x_offset) in records.iter().zip(offsets) {
        let place = |p: Point| transform.apply(Point::new(p.x + x_offset, p.y + record.stack_y));
        for cmd in &record.commands {
            out.push(match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(place(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(place(p)),
                PathCommand::QuadTo(c, p) => PathCommand::QuadTo(place(c), place(p)),
                PathCommand::CurveTo(c1, c2, p) => {
                    PathCommand::CurveTo(place(c1), place(c2), place(p))
                }
                PathCommand::Close => PathCommand::Close,
            });
        }
    }

    out
}
