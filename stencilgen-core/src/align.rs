//! Per-line horizontal alignment.
//!
//! Alignment never changes the block's dimensions: the block width is
//! the union of all line widths, and each line is only slid inside it.

use crate::layout::LineRecord;
use crate::types::{Alignment, BoundingBox, Scalar};

/// Horizontal offset placing one line within the block.
///
/// The offset also cancels the line's own `min_x`, so a left-aligned
/// line starts exactly at the block's left edge even when its first
/// glyph has a negative side bearing.
#[must_use]
pub fn x_offset(alignment: Alignment, block_width: Scalar, bbox: &BoundingBox) -> Scalar {
    let line_width = bbox.width();
    match alignment {
        Alignment::Left => -bbox.min_x,
        Alignment::Center => (block_width - line_width) / 2.0 - bbox.min_x,
        Alignment::Right => (block_width - line_width) - bbox.min_x,
    }
}

/// Resolve the horizontal offset of every line, in record order.
#[must_use]
pub fn resolve_offsets(
    records: &[LineRecord],
    block_width: Scalar,
    alignment: Alignment,
) -> Vec<Scalar> {
    records
        .iter()
        .map(|record| x_offset(alignment, block_width, &record.bbox))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    const fn bbox(min_x: Scalar, max_x: Scalar) -> BoundingBox {
        BoundingBox {
            min_x,
            min_y: 0.0,
            max_x,
            max_y: 1.0,
        }
    }

    #[test]
    fn left_cancels_side_bearing() {
        let off = x_offset(Alignment::Left, 100.0, &bbox(2.5, 42.5));
        assert!((off + 2.5).abs() < EPSILON);
    }

    #[test]
    fn center_splits_the_slack() {
        // Line is 40 wide in a 100 block: 30 on each side.
        let off = x_offset(Alignment::Center, 100.0, &bbox(0.0, 40.0));
        assert!((off - 30.0).abs() < EPSILON);
    }

    #[test]
    fn right_uses_all_the_slack() {
        let off = x_offset(Alignment::Right, 100.0, &bbox(0.0, 40.0));
        assert!((off - 60.0).abs() < EPSILON);
    }

    #[test]
    fn full_width_line_is_alignment_invariant() {
        let bb = bbox(1.0, 41.0);
        let left = x_offset(Alignment::Left, 40.0, &bb);
        let center = x_offset(Alignment::Center, 40.0, &bb);
        let right = x_offset(Alignment::Right, 40.0, &bb);
        assert!((left - center).abs() < EPSILON);
        assert!((center - right).abs() < EPSILON);
    }
}
