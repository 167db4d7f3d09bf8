use super::*;

#[test]
fn short_hex_expands_nibbles() {
    let color: Color = "#ccc".parse().expect("valid color");
    assert_eq!(color, Color::LIGHT_GRAY);
    assert_eq!(color, Color::from_rgb_u8(0xcc, 0xcc, 0xcc));
}

#[test]
fn long_hex_with_alpha_parses() {
    let color = Color::from_hex("#11223380").expect("valid color");
    assert_eq!(color, Color::from_rgba_u8(0x11, 0x22, 0x33, 0x80));
}

#[test]
fn hex_without_hash_is_accepted() {
    assert_eq!(Color::from_hex("ffffff"), Ok(Color::WHITE));
}

#[test]
fn malformed_hex_is_rejected() {
    assert_eq!(
        Color::from_hex("#12345"),
        Err(ColorParseError::InvalidLength(5))
    );
    assert!(matches!(
        Color::from_hex("#zzz"),
        Err(ColorParseError::InvalidDigit(_))
    ));
    assert!(matches!(
        Color::from_hex("#ééé"),
        Err(ColorParseError::InvalidDigit(_))
    ));
}

#[test]
fn interpolate_maps_and_extrapolates() {
    assert_eq!(interpolate(0.0, (0.0, 1.0), (800.0, 0.0)), 800.0);
    assert_eq!(interpolate(0.25, (0.0, 1.0), (800.0, 0.0)), 600.0);
    assert_eq!(interpolate(1.5, (0.0, 1.0), (800.0, 0.0)), -400.0);
    assert_eq!(interpolate(3.0, (1.0, 1.0), (5.0, 9.0)), 5.0);
}

#[test]
fn translation_moves_rects() {
    let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
    let moved = Translation::vertical(5.0).apply_to_rect(rect);
    assert_eq!(moved, Rect::new(0.0, 5.0, 10.0, 20.0));
    assert_eq!(moved.bottom(), 25.0);
}

#[test]
fn corner_radii_resolve_clamps_to_half_extent() {
    let radii = CornerRadii::uniform(16.0).resolve(20.0, 100.0);
    assert_eq!(radii, CornerRadii::uniform(10.0));
}
