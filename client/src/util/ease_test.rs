use super::*;

#[test]
fn default_is_linear() {
    assert_eq!(Ease::default(), Ease::Linear);
    assert_eq!(Ease::Linear.css(), "linear");
}

#[test]
fn power_curves_render_as_cubic_bezier() {
    for ease in [Ease::Power2Out, Ease::Power2InOut, Ease::Power3Out, Ease::Power4InOut] {
        assert!(ease.css().starts_with("cubic-bezier("), "{ease:?}");
    }
}

#[test]
fn in_out_curves_are_distinct() {
    assert_ne!(Ease::Power2InOut.css(), Ease::Power4InOut.css());
}
