use super::*;
use serde_json::json;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::parse_hex("#FF6B6B").unwrap(), Color::hex(0xFF6B6B));
    assert_eq!(Color::parse_hex("ff6b6b").unwrap(), Color::hex(0xFF6B6B));

    let c = Color::parse_hex("#0000ff80").unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));
    assert!(!c.is_opaque());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
    assert!(Color::parse_hex("").is_err());
}

#[test]
fn hex_serde_keeps_exact_values() {
    let c: Color = serde_json::from_value(json!("#764ba2")).unwrap();
    assert_eq!(c, Color::hex(0x764BA2));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#764BA2"));

    let translucent = Color::WHITE.with_alpha(0.25);
    assert_eq!(translucent.to_hex(), "#FFFFFF40");
    assert_eq!(translucent.to_svg_rgb(), "#ffffff");
}

#[test]
fn yiq_splits_light_and_dark() {
    assert!(Color::WHITE.yiq() >= 128.0);
    assert!(Color::BLACK.yiq() < 128.0);
    assert!(Color::BLACK.is_pure_black());
    assert!(!Color::hex(0x111111).is_pure_black());
}
