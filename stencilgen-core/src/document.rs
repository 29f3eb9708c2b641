//! The finished stencil document.

use std::fmt::Write;

use crate::types::{PathCommand, Scalar};

/// A compiled stencil: one compound path plus the overall dimensions.
///
/// Immutable once produced. The compound path is the backing rectangle
/// followed by the glyph outlines; under the even-odd fill rule the
/// glyph interiors read as see-through holes, which is the stencil's
/// defining property.
#[derive(Debug, Clone, PartialEq)]
pub struct StencilDocument {
    commands: Vec<PathCommand>,
    width: Scalar,
    height: Scalar,
}

impl StencilDocument {
    /// The fill rule every stencil document renders with. Changing this
    /// to a nonzero/winding rule would fill the glyph holes solid.
    pub const FILL_RULE: &'static str = "evenodd";

    /// Wrap a compiled command sequence with its dimensions.
    #[must_use]
    pub const fn new(commands: Vec<PathCommand>, width: Scalar, height: Scalar) -> Self {
        Self {
            commands,
            width,
            height,
        }
    }

    /// The zero-dimension document for input with no visible text.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            commands: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// The compound path commands, rectangle first.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Document width in millimeters.
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    /// Document height in millimeters.
    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.height
    }

    /// Whether this is the empty document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render the commands as a textual path-data string.
    ///
    /// Grammar: `M x y`, `L x y`, `Q cx cy x y`, `C c1x c1y c2x c2y x y`,
    /// `Z`, all tokens joined by single spaces. Every number is printed
    /// with exactly two decimal places so identical inputs yield
    /// byte-identical, diff-stable output.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 16);
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    d.push('M');
                    write_coord(&mut d, p.x);
                    write_coord(&mut d, p.y);
                }
                PathCommand::LineTo(p) => {
                    d.push('L');
                    write_coord(&mut d, p.x);
                    write_coord(&mut d, p.y);
                }
                PathCommand::QuadTo(c, p) => {
                    d.push('Q');
                    write_coord(&mut d, c.x);
                    write_coord(&mut d, c.y);
                    write_coord(&mut d, p.x);
                    write_coord(&mut d, p.y);
                }
                PathCommand::CurveTo(c1, c2, p) => {
                    d.push('C');
                    write_coord(&mut d, c1.x);
                    write_coord(&mut d, c1.y);
                    write_coord(&mut d, c2.x);
                    write_coord(&mut d, c2.y);
                    write_coord(&mut d, p.x);
                    write_coord(&mut d, p.y);
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Append " {v:.2}", normalizing values that round to zero so the
/// output never contains `-0.00`.
fn write_coord(d: &mut String, v: Scalar) {
    let rounded = (v * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let _ = write!(d, " {rounded:.2}");
}
