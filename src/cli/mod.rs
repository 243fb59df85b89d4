pub mod completions;
pub mod presets;
pub mod preview;
pub mod render;

use clap::{Parser, Subcommand};

/// pinwheel - Looping GIF loader generator
#[derive(Parser, Debug)]
#[command(name = "pinwheel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an SVG into a looping animated GIF
    Render(render::RenderArgs),

    /// Write a single frame as a PNG for inspection
    Preview(preview::PreviewArgs),

    /// List the built-in configuration presets
    Presets(presets::PresetsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
