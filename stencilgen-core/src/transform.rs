//! Block metrics and the glyph-space to document-space transform.
//!
//! Glyph space has an arbitrary origin with Y increasing upward;
//! document space has its origin at the padded rectangle's top-left
//! corner with Y increasing downward. The transform between them is a
//! single affine map, so curves transform point-wise.

use kurbo::{Affine, Point};

use crate::layout::LineRecord;
use crate::types::{BoundingBox, Scalar};

/// Overall metrics of a stacked text block, computed once per generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMetrics {
    /// Union width of all line bounding boxes.
    pub block_width: Scalar,
    /// `min_y` of the bottom record's bounding box. The bottom record's
    /// stack offset is deliberately not folded in: trailing blank input
    /// lines push the text up and leave space below it, matching how the
    /// stack is later flipped top-to-bottom.
    pub y_min_total: Scalar,
    /// Top record's stack offset plus its bounding box `max_y`.
    pub y_max_total: Scalar,
    /// Padding on every side of the text block.
    pub padding: Scalar,
    /// Final document width: `block_width + 2 * padding`.
    pub rect_width: Scalar,
    /// Final document height: `(y_max_total - y_min_total) + 2 * padding`.
    pub rect_height: Scalar,
}

impl BlockMetrics {
    /// Measure a non-empty record stack. Returns `None` for an empty
    /// stack — the empty-document case, not an error.
    #[must_use]
    pub fn measure(records: &[LineRecord], padding: Scalar) -> Option<Self> {
        let first = records.first()?;
        let last = records.last()?;

        let mut union = BoundingBox::EMPTY;
        for record in records {
            union.union(&record.bbox);
        }
        let block_width = union.width();

        let y_min_total = first.bbox.min_y;
        let y_max_total = last.stack_y + last.bbox.max_y;
        let total_text_height = y_max_total - y_min_total;

        Some(Self {
            block_width,
            y_min_total,
            y_max_total,
            padding,
            rect_width: 2.0f64.mul_add(padding, block_width),
            rect_height: 2.0f64.mul_add(padding, total_text_height),
        })
    }
}

/// The affine map from glyph space to document space.
///
/// `tx = x + padding` and `ty = rect_height - (y - y_min_total + padding)`:
/// the Y axis flips and both axes shift so the padded rectangle's
/// top-left corner lands on document-space `(0, 0)`.
#[derive(Debug, Clone, Copy)]
pub struct StencilTransform(Affine);

impl StencilTransform {
    /// Build the transform for a measured block.
    #[must_use]
    pub fn new(metrics: &BlockMetrics) -> Self {
        Self(Affine::new([
            1.0,
            0.0,
            0.0,
            -1.0,
            metrics.padding,
            metrics.rect_height + metrics.y_min_total - metrics.padding,
        ]))
    }

    /// Map a glyph-space point into document space.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        self.0 * p
    }
}
