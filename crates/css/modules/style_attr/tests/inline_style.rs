#![cfg(test)]

use css_style_attr::InlineStyle;

#[test]
fn attribute_round_trips_through_inline_style() {
    let _ = env_logger::builder().is_test(true).try_init();
    let style = InlineStyle::parse("opacity: 0.5; height: 5px");
    assert_eq!(style.css_text(), "opacity: 0.5; height: 5px;");
    assert_eq!(InlineStyle::parse(&style.css_text()), style);
    assert_eq!(style.len(), 2);
}

#[test]
fn values_keep_internal_spaces() {
    let mut style = InlineStyle::from("animation-iteration-count: infinite, 2, 5");
    assert_eq!(style.get("animation-iteration-count"), Some("infinite, 2, 5"));
    style.set("  Animation-Iteration-Count ", " 4, 5 ");
    assert_eq!(style.get("animation-iteration-count"), Some("4, 5"));
    let names: Vec<&str> = style.iter().map(|decl| decl.property.as_str()).collect();
    assert_eq!(names, vec!["animation-iteration-count"]);
}

#[test]
fn parse_keeps_the_last_duplicate_at_its_position() {
    let style = InlineStyle::parse("width: 1px; height: 3px; WIDTH: 2px");
    assert_eq!(style.get("width"), Some("2px"));
    assert_eq!(style.len(), 2);
    assert_eq!(style.css_text(), "height: 3px; width: 2px;");
}

#[test]
fn empty_input_gives_an_empty_style() {
    let style = InlineStyle::parse("");
    assert!(style.is_empty());
    assert_eq!(style.css_text(), "");
}
