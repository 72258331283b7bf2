use color_convert::adapters::api::{handle_hex_to_rgb, handle_rgb_to_hex, route};
use serde_json::Value;

fn body_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_hextorgb_endpoint_returns_channel_json() {
    let response = route("/hextorgb/ff00aa").unwrap().unwrap();
    assert_eq!(response.status, 200);

    let body = body_json(&response.body);
    assert_eq!(body["r"], 255);
    assert_eq!(body["g"], 0);
    assert_eq!(body["b"], 170);
}

#[test]
fn test_hextorgb_endpoint_accepts_prefixed_input() {
    let response = handle_hex_to_rgb("#FF00AA").unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response.body)["r"], 255);
}

#[test]
fn test_hextorgb_endpoint_rejects_malformed_color() {
    let response = route("/hextorgb/ZZZZZZ").unwrap().unwrap();
    assert_eq!(response.status, 400);
    assert_eq!(body_json(&response.body)["error"], "Invalid hex color");
}

#[test]
fn test_rgbtohex_endpoint_returns_hex_json() {
    let response = route("/rgbtohex/255/0/170").unwrap().unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response.body)["hex"], "#FF00AA");
}

#[test]
fn test_rgbtohex_endpoint_rejects_out_of_range() {
    for path in ["/rgbtohex/256/0/0", "/rgbtohex/-1/0/0"] {
        let response = route(path).unwrap().unwrap();
        assert_eq!(response.status, 400, "expected 400 for {:?}", path);
        assert_eq!(
            body_json(&response.body)["error"],
            "Invalid RGB components. Each must be an integer between 0 and 255"
        );
    }
}

#[test]
fn test_rgbtohex_endpoint_rejects_non_integral_channels() {
    for path in ["/rgbtohex/1.5/0/0", "/rgbtohex/a/0/0", "/rgbtohex//0/0"] {
        let response = route(path).unwrap().unwrap();
        assert_eq!(response.status, 400, "expected 400 for {:?}", path);
    }
}

#[test]
fn test_rgbtohex_endpoint_accepts_boundaries() {
    let response = handle_rgb_to_hex("0", "0", "0").unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response.body)["hex"], "#000000");

    let response = handle_rgb_to_hex("255", "255", "255").unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(body_json(&response.body)["hex"], "#FFFFFF");
}

#[test]
fn test_unknown_paths_are_not_routed() {
    assert!(route("/").unwrap().is_none());
    assert!(route("/static/index.html").unwrap().is_none());
    assert!(route("/hextorgb/ff00aa/extra").unwrap().is_none());
}
