//! Core geometry types for the stencil compiler.

pub use kurbo::Point;

/// Convenience alias. All stencil geometry is computed in f64 for
/// compatibility with `kurbo` and WASM.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Horizontal alignment of text lines within the block.
///
/// A closed enum: unknown modes are unrepresentable here and must be
/// rejected by whichever outer layer owns the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Flush every line against the left edge of the block.
    Left,
    /// Center every line within the block.
    #[default]
    Center,
    /// Flush every line against the right edge of the block.
    Right,
}

// ---------------------------------------------------------------------------
// PathCommand
// ---------------------------------------------------------------------------

/// A single vector path command.
///
/// A closed sum type: the compiler is one exhaustive match over these
/// variants, with curve control points transforming point-wise exactly
/// like endpoints (the document transform is affine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour at the given point.
    MoveTo(Point),
    /// Straight line to the given point.
    LineTo(Point),
    /// Quadratic Bezier: control point, then endpoint.
    QuadTo(Point, Point),
    /// Cubic Bezier: two control points, then endpoint.
    CurveTo(Point, Point, Point),
    /// Close the current contour.
    Close,
}

// ---------------------------------------------------------------------------
// BoundingBox
// ---------------------------------------------------------------------------

/// Axis-aligned extents of a set of points.
///
/// Starts out inverted (infinite mins, negative-infinite maxes) so the
/// first included point snaps it to a real rectangle. A box that never
/// saw a point has no extent and zero dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: Scalar,
    pub min_y: Scalar,
    pub max_x: Scalar,
    pub max_y: Scalar,
}

impl BoundingBox {
    /// The inverted box: the identity for [`include_point`] and [`union`].
    ///
    /// [`include_point`]: Self::include_point
    /// [`union`]: Self::union
    pub const EMPTY: Self = Self {
        min_x: Scalar::INFINITY,
        min_y: Scalar::INFINITY,
        max_x: Scalar::NEG_INFINITY,
        max_y: Scalar::NEG_INFINITY,
    };

    /// Whether at least one point has been included.
    #[must_use]
    pub fn has_extent(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// `(width, height)`, both zero for a box with no extent.
    #[must_use]
    pub fn size(&self) -> (Scalar, Scalar) {
        if self.has_extent() {
            (self.max_x - self.min_x, self.max_y - self.min_y)
        } else {
            (0.0, 0.0)
        }
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> Scalar {
        self.size().0
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> Scalar {
        self.size().1
    }

    /// Grow to cover a point.
    pub const fn include_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Grow to cover another box. A box with no extent contributes
    /// nothing: folding its inverted corners in would poison the mins
    /// and maxes.
    pub fn union(&mut self, other: &Self) {
        if other.has_extent() {
            self.include_point(Point::new(other.min_x, other.min_y));
            self.include_point(Point::new(other.max_x, other.max_y));
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Compute the control-point hull of a command sequence.
///
/// Includes curve control points, not just endpoints, so every
/// coordinate a later transform emits stays inside the hull.
#[must_use]
pub fn commands_bbox(commands: &[PathCommand]) -> BoundingBox {
    commands.iter().fold(BoundingBox::EMPTY, |mut bb, cmd| {
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => bb.include_point(p),
            PathCommand::QuadTo(c, p) => {
                bb.include_point(c);
                bb.include_point(p);
            }
            PathCommand::CurveTo(c1, c2, p) => {
                bb.include_point(c1);
                bb.include_point(c2);
                bb.include_point(p);
            }
            PathCommand::Close => {}
        }
        bb
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
