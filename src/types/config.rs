//! Render configuration and built-in presets.
//!
//! Everything the pipeline treats as a knob lives here: canvas geometry,
//! frame timing, palette, background/disposal behaviour, rotation speed,
//! and the colour-selection policy. Two presets capture the shipped loader
//! variants; a YAML file can override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PinwheelError, Result};

use super::{Colour, Palette};

/// How a decoder treats a frame's pixels before drawing the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disposal {
    /// Leave the frame in place and draw over it.
    Keep,
    /// Clear to the background before the next frame.
    RestoreBackground,
}

impl Disposal {
    /// Disposal method code as written into a graphic control extension.
    pub const fn wire_code(self) -> u8 {
        match self {
            Disposal::Keep => 1,
            Disposal::RestoreBackground => 2,
        }
    }
}

impl fmt::Display for Disposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposal::Keep => write!(f, "keep"),
            Disposal::RestoreBackground => write!(f, "restore-background"),
        }
    }
}

/// Per-frame colour selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourPolicy {
    /// Continuous per-polygon brightness pulse, phase-shifted by polygon
    /// index and clamped into three tiers.
    Pulse,
    /// Cyclic traveling highlight: one polygon bright, its predecessor in
    /// afterglow, the rest dim.
    Sweep,
}

impl fmt::Display for ColourPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourPolicy::Pulse => write!(f, "pulse"),
            ColourPolicy::Sweep => write!(f, "sweep"),
        }
    }
}

/// Full parameter set for one animation render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u16,

    /// Canvas height in pixels.
    pub height: u16,

    /// Number of frames in one loop.
    pub frames: u32,

    /// Per-frame delay in hundredths of a second.
    pub delay_cs: u16,

    /// The four-colour table; index 0 is the background slot.
    pub palette: Palette,

    /// Palette index every frame is cleared to before drawing.
    pub background_index: u8,

    /// Mark the background index transparent in the output.
    pub transparent: bool,

    /// Frame disposal mode.
    pub disposal: Disposal,

    /// Fraction of a full turn completed over one loop.
    pub rotation_speed: f64,

    /// Colour selection policy.
    pub policy: ColourPolicy,

    /// Uniform parameter steps when flattening cubic curves.
    pub curve_steps: u32,

    /// Horizontal fraction of the canvas the artwork may occupy.
    pub fit_x: f64,

    /// Vertical fraction of the canvas the artwork may occupy.
    pub fit_y: f64,

    /// Source coordinate space width.
    pub view_box_width: f64,

    /// Source coordinate space height.
    pub view_box_height: f64,
}

/// Palette of the transparent loader variant.
const PULSE_PALETTE: Palette = Palette::new([
    Colour::BLACK,
    Colour::new(0x12, 0x1E, 0x3A),
    Colour::new(0x35, 0x63, 0xE9),
    Colour::WHITE,
]);

/// Palette of the opaque badge variant.
const SWEEP_PALETTE: Palette = Palette::new([
    Colour::new(0x0D, 0x12, 0x20),
    Colour::new(0x22, 0x30, 0x50),
    Colour::new(0x56, 0x78, 0xE9),
    Colour::WHITE,
]);

impl Default for RenderConfig {
    fn default() -> Self {
        Self::pulse()
    }
}

impl RenderConfig {
    /// Transparent loader: quarter-turn drift, pulsing brightness tiers.
    pub fn pulse() -> Self {
        Self {
            width: 220,
            height: 220,
            frames: 24,
            delay_cs: 4,
            palette: PULSE_PALETTE,
            background_index: Palette::BACKGROUND,
            transparent: true,
            disposal: Disposal::RestoreBackground,
            rotation_speed: 0.25,
            policy: ColourPolicy::Pulse,
            curve_steps: 16,
            fit_x: 0.68,
            fit_y: 0.82,
            view_box_width: 146.0,
            view_box_height: 198.0,
        }
    }

    /// Opaque badge: slow drift, traveling highlight.
    pub fn sweep() -> Self {
        Self {
            width: 96,
            height: 96,
            frames: 36,
            delay_cs: 5,
            palette: SWEEP_PALETTE,
            background_index: Palette::BACKGROUND,
            transparent: false,
            disposal: Disposal::Keep,
            rotation_speed: 0.10,
            policy: ColourPolicy::Sweep,
            curve_steps: 18,
            fit_x: 0.86,
            fit_y: 0.86,
            view_box_width: 146.0,
            view_box_height: 198.0,
        }
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "pulse" => Some(Self::pulse()),
            "sweep" => Some(Self::sweep()),
            _ => None,
        }
    }

    /// Names accepted by [`RenderConfig::preset`].
    pub fn preset_names() -> &'static [&'static str] {
        &["pulse", "sweep"]
    }

    /// Resolve a configuration from an optional YAML file or preset name,
    /// falling back to the default.
    pub fn resolve(preset: Option<&str>, path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        if let Some(name) = preset {
            return Self::preset(name).ok_or_else(|| PinwheelError::Config {
                message: format!("Unknown preset '{}'", name),
                help: Some(format!(
                    "Available presets: {}",
                    Self::preset_names().join(", ")
                )),
            });
        }
        Ok(Self::default())
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PinwheelError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a configuration from YAML. Missing fields fall back to the
    /// `pulse` preset.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| PinwheelError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the YAML against `pinwheel presets` output".to_string()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter sets the pipeline cannot render.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(config_error(
                format!("Canvas must be at least 1x1, got {}x{}", self.width, self.height),
                None,
            ));
        }
        if self.frames == 0 {
            return Err(config_error("Frame count must be at least 1".to_string(), None));
        }
        if self.curve_steps == 0 {
            return Err(config_error("Curve steps must be at least 1".to_string(), None));
        }
        if !(self.fit_x > 0.0 && self.fit_x <= 1.0) || !(self.fit_y > 0.0 && self.fit_y <= 1.0) {
            return Err(config_error(
                format!("Fit fractions must be in (0, 1], got {} and {}", self.fit_x, self.fit_y),
                Some("Fractions describe how much of the canvas the artwork may cover".to_string()),
            ));
        }
        if !(self.view_box_width > 0.0) || !(self.view_box_height > 0.0) {
            return Err(config_error(
                "View box extents must be positive".to_string(),
                None,
            ));
        }
        if self.palette.get(self.background_index).is_none() {
            return Err(config_error(
                format!("Background index {} is outside the palette", self.background_index),
                Some("The palette has entries 0-3".to_string()),
            ));
        }
        Ok(())
    }
}

fn config_error(message: String, help: Option<String>) -> PinwheelError {
    PinwheelError::Config { message, help }
}
