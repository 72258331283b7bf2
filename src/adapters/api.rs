use crate::core::convert::{hex_to_rgb, rgb_to_hex};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::parse_channel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RgbResponse {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexResponse {
    pub hex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status code plus serialized JSON body, ready for an embedding server
/// to write out.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(body: &T) -> Result<Self> {
        Ok(Self {
            status: 200,
            body: serde_json::to_string(body)?,
        })
    }

    pub fn bad_request(error: &ConvertError) -> Result<Self> {
        let body = ErrorResponse {
            error: error.to_string(),
        };
        Ok(Self {
            status: 400,
            body: serde_json::to_string(&body)?,
        })
    }
}

/// `GET /hextorgb/{hex}` — 200 with channel JSON, 400 on a malformed color.
pub fn handle_hex_to_rgb(hex: &str) -> Result<ApiResponse> {
    match hex_to_rgb(hex) {
        Ok(rgb) => ApiResponse::ok(&RgbResponse {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }),
        Err(e) => ApiResponse::bad_request(&e),
    }
}

/// `GET /rgbtohex/{r}/{g}/{b}` — 200 with the hex JSON, 400 on any channel
/// that is not an integer in 0..=255.
pub fn handle_rgb_to_hex(r: &str, g: &str, b: &str) -> Result<ApiResponse> {
    match convert_channels(r, g, b) {
        Ok(hex) => ApiResponse::ok(&HexResponse { hex }),
        Err(e) => ApiResponse::bad_request(&e),
    }
}

fn convert_channels(r: &str, g: &str, b: &str) -> Result<String> {
    let r = parse_channel(r)?;
    let g = parse_channel(g)?;
    let b = parse_channel(b)?;
    rgb_to_hex(r, g, b)
}

/// Maps a request path onto the two conversion endpoints. `None` means the
/// path is not ours; the embedding server decides what a 404 looks like.
pub fn route(path: &str) -> Result<Option<ApiResponse>> {
    tracing::debug!("Routing request path: {}", path);

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match segments.as_slice() {
        ["hextorgb", hex] => handle_hex_to_rgb(hex).map(Some),
        ["rgbtohex", r, g, b] => handle_rgb_to_hex(r, g, b).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_dispatches_hex_endpoint() {
        let response = route("/hextorgb/ff00aa").unwrap().unwrap();
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_route_dispatches_rgb_endpoint() {
        let response = route("/rgbtohex/255/0/170").unwrap().unwrap();
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_route_ignores_unknown_paths() {
        assert!(route("/").unwrap().is_none());
        assert!(route("/nosuch").unwrap().is_none());
        assert!(route("/hextorgb").unwrap().is_none());
        assert!(route("/rgbtohex/1/2").unwrap().is_none());
        assert!(route("/rgbtohex/1/2/3/4").unwrap().is_none());
    }

    #[test]
    fn test_empty_path_segment_is_a_validation_error() {
        // "/hextorgb/" still reaches the handler; the empty color fails there
        let response = route("/hextorgb/").unwrap().unwrap();
        assert_eq!(response.status, 400);
    }
}
