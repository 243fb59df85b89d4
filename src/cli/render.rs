//! Render command implementation.
//!
//! Reads an SVG, renders the animation frames and writes the looping GIF.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PinwheelError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_svg;
use crate::render::{render_frames, write_gif, FitTransform};
use crate::types::{Polygon, RenderConfig};

/// Render an SVG into a looping animated GIF
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// SVG file to render
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output path (defaults to the input with a .gif extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Built-in preset to render with
    #[arg(long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the configured frame count
    #[arg(long)]
    pub frames: Option<u32>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let mut config = RenderConfig::resolve(args.preset.as_deref(), args.config.as_deref())?;
    if let Some(frames) = args.frames {
        config.frames = frames;
        config.validate()?;
    }

    let polygons = load_polygons(&args.input, &config)?;
    printer.status(
        "Rendering",
        &format!(
            "{} from {} across {} frames",
            plural(polygons.len(), "polygon", "polygons"),
            display_path(&args.input),
            config.frames
        ),
    );

    let frames = render_frames(&polygons, &config);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("gif"));
    let bytes = write_gif(&config, &frames, &output)?;

    printer.success(
        "Wrote",
        &format!("{} ({} bytes)", display_path(&output), bytes),
    );

    Ok(())
}

/// Parse the SVG and fit its polygons onto the canvas.
pub(super) fn load_polygons(input: &PathBuf, config: &RenderConfig) -> Result<Vec<Polygon>> {
    let source = fs::read_to_string(input).map_err(|e| PinwheelError::Io {
        path: input.clone(),
        message: format!("Failed to read SVG: {}", e),
    })?;

    let polygons = parse_svg(&source, config.curve_steps)?;
    let fit = FitTransform::for_config(config);
    Ok(polygons.iter().map(|p| fit.apply_polygon(p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TRIANGLES: &str = r##"<svg viewBox="0 0 146 198">
  <path d="M20,20 L126,20 L73,90 Z"/>
  <path d="M20,120 L126,120 L73,178 Z"/>
</svg>"##;

    fn quiet() -> Printer {
        Printer::new()
    }

    #[test]
    fn test_render_writes_gif() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.svg");
        let output = dir.path().join("logo-out.gif");
        fs::write(&input, TRIANGLES).unwrap();

        let args = RenderArgs {
            input,
            output: Some(output.clone()),
            preset: None,
            config: None,
            frames: Some(4),
        };
        run(args, &quiet()).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(*bytes.last().unwrap(), 0x3B);
    }

    #[test]
    fn test_render_defaults_output_beside_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("loader.svg");
        fs::write(&input, TRIANGLES).unwrap();

        let args = RenderArgs {
            input: input.clone(),
            output: None,
            preset: Some("sweep".to_string()),
            config: None,
            frames: Some(3),
        };
        run(args, &quiet()).unwrap();

        assert!(dir.path().join("loader.gif").exists());
    }

    #[test]
    fn test_render_rejects_unknown_preset() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.svg");
        fs::write(&input, TRIANGLES).unwrap();

        let args = RenderArgs {
            input,
            output: None,
            preset: Some("spiral".to_string()),
            config: None,
            frames: None,
        };
        assert!(run(args, &quiet()).is_err());
    }

    #[test]
    fn test_render_rejects_empty_svg() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.svg");
        fs::write(&input, "<svg viewBox=\"0 0 10 10\"></svg>").unwrap();

        let args = RenderArgs {
            input,
            output: None,
            preset: None,
            config: None,
            frames: Some(2),
        };
        assert!(run(args, &quiet()).is_err());
    }

    #[test]
    fn test_render_with_config_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.svg");
        let config_path = dir.path().join("loader.yaml");
        fs::write(&input, TRIANGLES).unwrap();
        fs::write(&config_path, "width: 32\nheight: 32\nframes: 2").unwrap();

        let args = RenderArgs {
            input: input.clone(),
            output: None,
            preset: None,
            config: Some(config_path),
            frames: None,
        };
        run(args, &quiet()).unwrap();

        let bytes = fs::read(dir.path().join("logo.gif")).unwrap();
        // Logical screen descriptor carries the configured canvas size
        assert_eq!(&bytes[6..8], &[32, 0]);
        assert_eq!(&bytes[8..10], &[32, 0]);
    }
}
