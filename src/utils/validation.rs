use crate::utils::error::{ConvertError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Anchored match: the whole string must be 6 hex digits, `#` prefix optional.
pub fn is_hex_color(value: &str) -> bool {
    let re = Regex::new(r"^#?[0-9A-Fa-f]{6}$").unwrap();
    re.is_match(value)
}

/// Parses a channel given as text. Anything that is not a plain base-10
/// integer ("1.5", "abc", "") is rejected; range is checked separately.
pub fn parse_channel(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| ConvertError::InvalidRgb)
}

pub fn validate_channel(value: i64) -> Result<u8> {
    if !(0..=255).contains(&value) {
        return Err(ConvertError::InvalidRgb);
    }
    Ok(value as u8)
}
