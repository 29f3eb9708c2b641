//! `stencilgen` CLI — turn text into a fabrication-ready stencil SVG.
//!
//! This is the validating outer layer: raw inputs are clamped to the
//! supported ranges here (with warnings), so the core only ever sees
//! values its preconditions accept.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use stencilgen_core::{Alignment, FontGlyphSource, generate};
use stencilgen_fonts::{FontData, catalog};
use stencilgen_svg::render_to_string;

/// Supported font size range in points.
const SIZE_RANGE: (f64, f64) = (5.0, 200.0);
/// Supported padding range in millimeters.
const PADDING_RANGE: (f64, f64) = (0.0, 100.0);
/// Maximum input text length in characters.
const TEXT_MAX_CHARS: usize = 1000;

#[derive(Parser)]
#[command(version, about = "stencilgen \u{2014} text to laser-cuttable stencil SVG")]
struct Cli {
    /// Text to render; literal newlines stack lines
    text: Option<String>,

    /// Font size in points
    #[arg(short, long, default_value_t = 40.0)]
    size: f64,

    /// Padding around the text block in millimeters
    #[arg(short, long, default_value_t = 10.0)]
    padding: f64,

    /// Horizontal alignment: "left", "center" or "right"
    #[arg(long, default_value = "center", value_parser = parse_alignment)]
    align: Alignment,

    /// Typeface name from the built-in catalog (see --list-fonts)
    #[arg(short, long, default_value = "allerta-stencil")]
    font: String,

    /// Directory containing the catalog's font files
    #[arg(long = "font-dir", value_name = "DIR", default_value = "fonts")]
    font_dir: PathBuf,

    /// Output SVG file
    #[arg(short, long, default_value = "stencil.svg")]
    output: PathBuf,

    /// List the built-in typeface catalog and exit
    #[arg(long)]
    list_fonts: bool,
}

fn parse_alignment(s: &str) -> Result<Alignment, String> {
    match s.to_lowercase().as_str() {
        "left" => Ok(Alignment::Left),
        "center" => Ok(Alignment::Center),
        "right" => Ok(Alignment::Right),
        _ => Err(format!(
            "unknown alignment \"{s}\": expected \"left\", \"center\" or \"right\""
        )),
    }
}

/// Clamp a numeric input to its supported range, warning when the
/// given value had to be adjusted.
fn clamp_input(value: f64, (min, max): (f64, f64), default: f64, what: &str) -> f64 {
    if value.is_nan() {
        eprintln!("Warning: {what} must be a number; using {default}");
        return default;
    }
    if value < min || value > max {
        eprintln!("Warning: {what} must be between {min} and {max}; clamping {value}");
        return value.clamp(min, max);
    }
    value
}

/// Truncate over-long input text, warning when characters are dropped.
fn clamp_text(text: &str) -> String {
    if text.chars().count() > TEXT_MAX_CHARS {
        eprintln!("Warning: text exceeds {TEXT_MAX_CHARS} characters; truncating");
        text.chars().take(TEXT_MAX_CHARS).collect()
    } else {
        text.to_owned()
    }
}

/// Load the requested catalog font from the font directory.
fn load_font(name: &str, font_dir: &std::path::Path) -> Result<FontData, String> {
    let entry = catalog::find(name).ok_or_else(|| {
        format!("unknown font \"{name}\" (use --list-fonts to see the catalog)")
    })?;
    let path = font_dir.join(entry.file);
    let bytes = fs::read(&path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    FontData::from_bytes(Arc::from(bytes.into_boxed_slice()))
        .map_err(|e| format!("{}: {e}", path.display()))
}

fn list_fonts() {
    for entry in catalog::ENTRIES {
        println!("{:<24}{} ({})", entry.name, entry.label, entry.file);
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.list_fonts {
        list_fonts();
        return;
    }

    let Some(ref raw_text) = cli.text else {
        eprintln!("No text specified");
        process::exit(1);
    };

    let text = clamp_text(raw_text);
    let size = clamp_input(cli.size, SIZE_RANGE, 40.0, "font size");
    let padding = clamp_input(cli.padding, PADDING_RANGE, 10.0, "padding");

    let font = match load_font(&cli.font, &cli.font_dir) {
        Ok(font) => font,
        Err(msg) => {
            eprintln!("Error: {msg}");
            process::exit(1);
        }
    };

    let glyphs = FontGlyphSource::new(&font);
    let stencil = match generate(&glyphs, &text, size, padding, cli.align) {
        Ok(stencil) => stencil,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    for warning in &stencil.warnings {
        eprintln!("Warning: {warning}");
    }
    if stencil.document.is_empty() {
        eprintln!("Warning: input has no visible text");
    }

    let svg = render_to_string(&stencil.document);
    if let Err(e) = fs::write(&cli.output, &svg) {
        eprintln!("Error writing {}: {e}", cli.output.display());
        process::exit(1);
    }
    eprintln!("Wrote {}", cli.output.display());
    println!(
        "Dimensions: {:.1}mm x {:.1}mm",
        stencil.document.width(),
        stencil.document.height()
    );
}
