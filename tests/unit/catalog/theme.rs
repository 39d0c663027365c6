use super::*;

#[test]
fn css_descriptor_matches_catalog_format() {
    const STOPS: &[GradientStop] = &[
        GradientStop::new(Color::hex(0x0F2027), 0.0),
        GradientStop::new(Color::hex(0x203A43), 30.0),
        GradientStop::new(Color::hex(0x8E44AD), 100.0),
    ];
    let g = Gradient::new(135.0, STOPS);
    assert_eq!(
        g.to_css(),
        "linear-gradient(135deg, #0F2027 0%, #203A43 30%, #8E44AD 100%)"
    );
}

#[test]
fn parse_css_accepts_lowercase_hex() {
    let g = Gradient::parse_css("linear-gradient(135deg, #667eea 0%, #764ba2 100%)").unwrap();
    assert_eq!(g.angle_deg, 135.0);
    assert_eq!(g.stops.len(), 2);
    assert_eq!(g.stops[0].color, Color::hex(0x667EEA));
    assert_eq!(g.stops[1].percent, 100.0);
}

#[test]
fn parse_css_rejects_malformed_descriptors() {
    assert!(Gradient::parse_css("radial-gradient(#fff 0%, #000 100%)").is_err());
    assert!(Gradient::parse_css("linear-gradient(135deg, #fff 0%)").is_err());
    assert!(Gradient::parse_css("linear-gradient(north, #fff 0%, #000 100%)").is_err());
    assert!(Gradient::parse_css("linear-gradient(90deg, #fff, #000 100%)").is_err());
}

#[test]
fn tiers_are_ordered() {
    assert!(Tier::Free < Tier::Pro);
    assert!(Tier::Pro < Tier::Premium);
    assert_eq!("premium".parse::<Tier>().unwrap(), Tier::Premium);
    assert!("gold".parse::<Tier>().is_err());
    assert_eq!("luxury".parse::<Category>().unwrap(), Category::Luxury);
}
