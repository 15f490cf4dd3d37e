use super::*;

#[test]
fn parse_hex_accepts_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#635045").unwrap(), Rgb8::new(0x63, 0x50, 0x45));
    assert_eq!(Rgb8::parse_hex("FF00ff").unwrap(), Rgb8::new(255, 0, 255));
}

#[test]
fn parse_hex_rejects_malformed() {
    for bad in ["", "#fff", "#gg0000", "#ff00ff00", "#ff00é"] {
        assert!(Rgb8::parse_hex(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn hex_serde_is_stable() {
    let c = Rgb8::new(0xdf, 0xbb, 0x35);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#dfbb35\"");
    let back: Rgb8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn matches_ignores_alpha() {
    let key = Rgb8::new(255, 0, 255);
    assert!(key.matches(&[255, 0, 255, 0]));
    assert!(!key.matches(&[255, 0, 254, 255]));
}

#[test]
fn canvas_area() {
    let c = Canvas {
        width: 300,
        height: 200,
    };
    assert_eq!(c.area(), 60_000);
}
