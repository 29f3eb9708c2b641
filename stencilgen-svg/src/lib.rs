//! SVG renderer for stencil documents.
//!
//! Wraps a [`StencilDocument`] in an SVG [`Document`] using the `svg`
//! crate. The path data is passed through as the raw `d` string the
//! compiler already formatted — re-encoding it through a builder would
//! put the deterministic two-decimal output at risk.
//!
//! Dimensions are emitted in millimeters, which is what fabrication
//! tools expect, and the `viewBox` matches them one-to-one.

use svg::Document;
use svg::node::element::Path;

use stencilgen_core::{Scalar, StencilDocument};

/// Render a [`StencilDocument`] to an SVG [`Document`].
///
/// The document carries exactly one path element with
/// `fill="black" stroke="none"` and the even-odd fill rule that cuts
/// the glyph holes out of the backing rectangle.
#[must_use]
pub fn render(document: &StencilDocument) -> Document {
    let w = fmt_len(document.width());
    let h = fmt_len(document.height());

    let path = Path::new()
        .set("fill", "black")
        .set("stroke", "none")
        .set("fill-rule", StencilDocument::FILL_RULE)
        .set("d", document.path_data());

    Document::new()
        .set("viewBox", format!("0 0 {w} {h}"))
        .set("width", format!("{w}mm"))
        .set("height", format!("{h}mm"))
        .add(path)
}

/// Render a [`StencilDocument`] to an SVG string.
#[must_use]
pub fn render_to_string(document: &StencilDocument) -> String {
    render(document).to_string()
}

/// Format a length to the same two-decimal precision as the path data.
fn fmt_len(v: Scalar) -> String {
    format!("{v:.2}")
}
