use super::*;

#[test]
fn identity_transform_css() {
    assert_eq!(Transform::IDENTITY.css(), "translate(0px, 0px) rotate(0deg) scale(1)");
}

#[test]
fn mixed_units_render_per_axis() {
    let transform = Transform { x: Length::Px(300.0), y: Length::Percent(-50.0), rotate_deg: 10.0, scale: 1.5 };
    assert_eq!(transform.css(), "translate(300px, -50%) rotate(10deg) scale(1.5)");
}

#[test]
fn declarations_only_include_set_properties() {
    let style = Style::offset_y(Length::Px(18.0));
    let props = style.declarations().into_iter().map(|(p, _)| p).collect::<Vec<_>>();
    assert_eq!(props, vec![Property::Transform]);
}

#[test]
fn inline_joins_css_declarations() {
    let style = Style::clip(ClipPolygon::TOP_EDGE).with_opacity(0.25);
    assert_eq!(style.inline(), "opacity: 0.25; clip-path: polygon(0% 0%, 100% 0%, 100% 0%, 0% 0%);");
}

#[test]
fn keyframe_names_are_camel_case() {
    assert_eq!(Property::ClipPath.keyframe_name(), "clipPath");
    assert_eq!(Property::ClipPath.css_name(), "clip-path");
}

#[test]
fn same_properties_compares_shape_not_values() {
    let a = Style::offset_y(Length::Px(50.0));
    let b = Style::offset_y(Length::ZERO);
    let c = Style::offset_y(Length::ZERO).with_opacity(1.0);
    assert!(a.same_properties(&b));
    assert!(!a.same_properties(&c));
}
