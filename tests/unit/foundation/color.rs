use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_css_color("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(parse_css_color("#FFF").unwrap(), Rgba8::WHITE);
    assert_eq!(
        parse_css_color("#0000ff80").unwrap(),
        Rgba8::rgba(0, 0, 255, 128)
    );
    assert!(parse_css_color("#12345").is_err());
    assert!(parse_css_color("#gg0000").is_err());
}

#[test]
fn parses_rgba_functions_used_by_palettes() {
    let c = parse_css_color("rgba(255,215,0,0.3)").unwrap();
    assert_eq!((c.r, c.g, c.b), (255, 215, 0));
    assert_eq!(c.a, 77);

    let c = parse_css_color("rgba(255, 255, 255, 0.5)").unwrap();
    assert_eq!(c.a, 128);

    let c = parse_css_color("rgb(10,20,30)").unwrap();
    assert_eq!(c, Rgba8::rgb(10, 20, 30));
}

#[test]
fn parses_hsl() {
    let c = parse_css_color("hsl(0, 100%, 50%)").unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));
    let c = parse_css_color("hsla(120, 100%, 50%, 0.5)").unwrap();
    assert_eq!((c.r, c.g, c.b, c.a), (0, 255, 0, 128));
}

#[test]
fn rejects_unknown_forms() {
    assert!(parse_css_color("red").is_err());
    assert!(parse_css_color("rgba(1,2,3)").is_err());
    assert!(parse_css_color("rgb(1,2,x)").is_err());
}

#[test]
fn transparent_keyword() {
    assert_eq!(parse_css_color("transparent").unwrap().a, 0);
}
