//! Presets command implementation.
//!
//! Prints the built-in presets as ready-to-edit YAML.

use clap::Args;

use crate::error::{PinwheelError, Result};
use crate::types::RenderConfig;

/// List the built-in configuration presets
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print a single preset
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: PresetsArgs) -> Result<()> {
    let names: Vec<&str> = match &args.name {
        Some(name) => {
            if RenderConfig::preset(name).is_none() {
                return Err(PinwheelError::Config {
                    message: format!("Unknown preset '{}'", name),
                    help: Some(format!(
                        "Available presets: {}",
                        RenderConfig::preset_names().join(", ")
                    )),
                });
            }
            vec![name.as_str()]
        }
        None => RenderConfig::preset_names().to_vec(),
    };

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("# {}", name);
        print!("{}", preset_yaml(name)?);
    }

    Ok(())
}

fn preset_yaml(name: &str) -> Result<String> {
    let config = RenderConfig::preset(name).ok_or_else(|| PinwheelError::Config {
        message: format!("Unknown preset '{}'", name),
        help: None,
    })?;

    serde_yaml::to_string(&config).map_err(|e| PinwheelError::Config {
        message: format!("Failed to serialize preset: {}", e),
        help: None,
    })
}
