pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::convert::{hex_to_rgb, rgb_to_hex};
pub use crate::domain::model::Rgb;
pub use crate::utils::error::{ConvertError, Result};
