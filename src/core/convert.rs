use crate::domain::model::Rgb;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::is_hex_color;

/// Parses a 6-digit hex color, with or without a leading `#`, into channels.
pub fn hex_to_rgb(input: &str) -> Result<Rgb> {
    if !is_hex_color(input) {
        return Err(ConvertError::InvalidFormat);
    }

    let hex = input.strip_prefix('#').unwrap_or(input);

    // 兩個十六進位數字最大 FF，通道值必定落在 0..=255
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ConvertError::InvalidFormat)?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ConvertError::InvalidFormat)?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ConvertError::InvalidFormat)?;

    Ok(Rgb { r, g, b })
}

/// Formats three channels as `#RRGGBB`. Scalar companion to [`Rgb::to_hex`];
/// both shapes validate through the same channel gate.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String> {
    Ok(Rgb::new(r, g, b)?.to_hex())
}
