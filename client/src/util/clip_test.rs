use super::*;

#[test]
fn full_renders_as_css_polygon() {
    assert_eq!(ClipPolygon::FULL.css(), "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)");
}

#[test]
fn bottom_edge_renders_as_css_polygon() {
    assert_eq!(ClipPolygon::BOTTOM_EDGE.css(), "polygon(0% 100%, 100% 100%, 100% 100%, 0% 100%)");
}

#[test]
fn edges_are_collapsed_and_full_shapes_are_not() {
    assert!(ClipPolygon::TOP_EDGE.is_collapsed());
    assert!(ClipPolygon::BOTTOM_EDGE.is_collapsed());
    assert!(!ClipPolygon::FULL.is_collapsed());
    assert!(!ClipPolygon::FULL_FROM_BOTTOM.is_collapsed());
}

#[test]
fn fractional_coordinates_keep_decimals() {
    let clip = ClipPolygon([(12.5, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
    assert!(clip.css().starts_with("polygon(12.5% 0%"));
}

#[test]
fn fmt_num_drops_trailing_zero() {
    assert_eq!(fmt_num(-50.0), "-50");
    assert_eq!(fmt_num(1.5), "1.5");
    assert_eq!(fmt_num(0.25), "0.25");
}
