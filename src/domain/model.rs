use crate::utils::error::Result;
use crate::utils::validation::validate_channel;
use serde::{Deserialize, Serialize};

// 三個通道都保證落在 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Validated construction from integer-like channels; out-of-range
    /// values are rejected, never clamped.
    pub fn new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: validate_channel(r)?,
            g: validate_channel(g)?,
            b: validate_channel(b)?,
        })
    }

    /// Formats as `#RRGGBB`, uppercase, zero-padded.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
