use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "color-convert")]
#[command(about = "A small tool for converting colors between hex and RGB")]
pub struct CliConfig {
    #[arg(long, help = "Hex color to convert to RGB, e.g. '#FF00AA'")]
    pub hex: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "RGB channels to convert to hex, e.g. 255,0,170"
    )]
    pub rgb: Vec<String>,

    #[arg(long, help = "Print the API JSON body instead of plain text")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.hex.is_some() && !self.rgb.is_empty() {
            return Err(ConvertError::ConfigError {
                message: "--hex and --rgb cannot be combined".to_string(),
            });
        }

        if self.hex.is_none() && self.rgb.is_empty() {
            return Err(ConvertError::ConfigError {
                message: "one of --hex or --rgb is required".to_string(),
            });
        }

        if self.hex.is_none() && self.rgb.len() != 3 {
            return Err(ConvertError::ConfigError {
                message: format!("--rgb expects 3 components, got {}", self.rgb.len()),
            });
        }

        Ok(())
    }
}
