//! Preview command implementation.
//!
//! Renders a single frame of the loop and writes it as a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::error::{PinwheelError, Result};
use crate::output::{display_path, Printer};
use crate::render::{render_frame, write_preview};
use crate::types::RenderConfig;

/// Write a single frame as a PNG for inspection
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// SVG file to render
    #[arg(required = true)]
    pub input: PathBuf,

    /// Frame index to render
    #[arg(long, default_value = "0")]
    pub frame: u32,

    /// Output path (defaults to the input with a .png extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale factor
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Built-in preset to render with
    #[arg(long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PreviewArgs, printer: &Printer) -> Result<()> {
    let config = RenderConfig::resolve(args.preset.as_deref(), args.config.as_deref())?;
    if args.frame >= config.frames {
        return Err(PinwheelError::Config {
            message: format!("Frame {} is out of range", args.frame),
            help: Some(format!(
                "The configuration renders frames 0-{}",
                config.frames - 1
            )),
        });
    }

    let polygons = super::render::load_polygons(&args.input, &config)?;
    let frame = render_frame(&polygons, &config, args.frame);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("png"));
    write_preview(&frame, &config, &output, args.scale)?;

    printer.success(
        "Wrote",
        &format!("{} (frame {})", display_path(&output), args.frame),
    );

    Ok(())
}
