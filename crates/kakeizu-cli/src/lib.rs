//! CLI logic for the kakeizu chart tool.

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{error, info};

use kakeizu::{ChartBuilder, ChartError, export::svg::SvgCanvas};

/// Font file used when none is given on the command line. The default
/// configuration expects the IPAMincho family.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/opentype/ipafont-mincho/ipam.ttf";

/// Run the kakeizu CLI application
///
/// Processes the input file through parsing, layout, and composition, and
/// writes the resulting SVG pages next to the output path.
///
/// # Errors
///
/// Returns `ChartError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Font registration failures
pub fn run(args: &Args) -> Result<(), ChartError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing chart"
    );

    let chart_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    // The font is a hard precondition: verify it before composing anything.
    let font_path = args.font.as_deref().unwrap_or(DEFAULT_FONT_PATH);
    let font_bytes = fs::read(font_path).inspect_err(|err| {
        error!(font_path, err:err = *err; "Failed to read font file");
    })?;

    let mut canvas = SvgCanvas::new(&chart_config);
    canvas.register_font(font_bytes)?;

    let builder = ChartBuilder::new(chart_config);
    let record = builder.parse(&source);
    builder.render(&record, &mut canvas)?;

    canvas.write_pages(Path::new(&args.output))?;

    info!(output_path = args.output, pages = canvas.pages().len(); "SVG pages exported");

    Ok(())
}
