//! Browser bindings for the stencil compiler.
//!
//! The host fetches the catalog's font files, mounts them into a
//! [`StencilEngine`], and then regenerates stencils as the user edits.
//! Generation itself is pure and re-entrant; debouncing rapid-fire
//! calls and discarding superseded results stays on the JavaScript
//! side.

use wasm_bindgen::prelude::*;

use stencilgen_core::{Alignment, FontGlyphSource, generate};
use stencilgen_fonts::{FontCatalog, FontError, FontProvider};
use stencilgen_svg::render_to_string;

/// One generation result handed back to JavaScript.
#[wasm_bindgen]
pub struct StencilOutput {
    svg: String,
    width: f64,
    height: f64,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl StencilOutput {
    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Stateful engine holding the mounted fonts.
#[wasm_bindgen]
#[derive(Default)]
pub struct StencilEngine {
    fonts: FontCatalog,
}

#[wasm_bindgen]
impl StencilEngine {
    /// Create an engine with no fonts mounted yet.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fetched font under the given catalog name.
    ///
    /// # Errors
    ///
    /// Rejects bytes that do not parse as an OpenType/TrueType font;
    /// the engine keeps whatever fonts were already mounted.
    #[wasm_bindgen(js_name = loadFont)]
    pub fn load_font(&mut self, name: &str, bytes: &[u8]) -> Result<(), JsError> {
        self.mount_font(name, bytes)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Generate a stencil from the current inputs.
    ///
    /// Fatal problems (unknown alignment or font, invalid parameters,
    /// glyph source failure) come back as an output with `hasError`
    /// set and no SVG; unmapped-glyph warnings are listed in
    /// `diagnostics` without blocking the result.
    #[must_use]
    pub fn generate(
        &self,
        text: &str,
        point_size: f64,
        padding: f64,
        font: &str,
        align: &str,
    ) -> StencilOutput {
        self.generate_output(text, point_size, padding, font, align)
    }
}

impl StencilEngine {
    fn mount_font(&mut self, name: &str, bytes: &[u8]) -> Result<(), FontError> {
        self.fonts.load_font(name, bytes.to_vec())
    }

    fn generate_output(
        &self,
        text: &str,
        point_size: f64,
        padding: f64,
        font: &str,
        align: &str,
    ) -> StencilOutput {
        let Some(alignment) = parse_alignment(align) else {
            return error_output(format!("unknown alignment \"{align}\""));
        };
        let Some(font_data) = self.fonts.font(font) else {
            return error_output(format!("font \"{font}\" is not mounted"));
        };

        let glyphs = FontGlyphSource::new(font_data);
        match generate(&glyphs, text, point_size, padding, alignment) {
            Ok(stencil) => {
                let diagnostics = stencil
                    .warnings
                    .iter()
                    .map(|w| format!("warning {w}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let svg = if stencil.document.is_empty() {
                    String::new()
                } else {
                    render_to_string(&stencil.document)
                };
                StencilOutput {
                    svg,
                    width: stencil.document.width(),
                    height: stencil.document.height(),
                    diagnostics,
                    has_error: false,
                }
            }
            Err(e) => error_output(format!("fatal {e}")),
        }
    }
}

fn parse_alignment(s: &str) -> Option<Alignment> {
    match s.to_lowercase().as_str() {
        "left" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        _ => None,
    }
}

fn error_output(diagnostics: String) -> StencilOutput {
    StencilOutput {
        svg: String::new(),
        width: 0.0,
        height: 0.0,
        diagnostics,
        has_error: true,
    }
}
