use super::*;

// =============================================================
// SlideNumber
// =============================================================

#[test]
fn slide_number_rejects_out_of_range() {
    assert_eq!(SlideNumber::new(0), None);
    assert_eq!(SlideNumber::new(SLIDE_COUNT + 1), None);
    assert_eq!(SlideNumber::new(4).map(SlideNumber::get), Some(4));
}

#[test]
fn next_wraps_last_to_first() {
    assert_eq!(SlideNumber::LAST.next(), SlideNumber::FIRST);
}

#[test]
fn prev_wraps_first_to_last() {
    assert_eq!(SlideNumber::FIRST.prev(), SlideNumber::LAST);
}

#[test]
fn next_then_prev_is_identity_for_every_slide() {
    for n in 1..=SLIDE_COUNT {
        let slide = SlideNumber::new(n).unwrap();
        assert_eq!(slide.next().prev(), slide);
    }
}

#[test]
fn full_cycle_returns_to_start() {
    let mut slide = SlideNumber::FIRST;
    for _ in 0..SLIDE_COUNT {
        slide = slide.next();
    }
    assert_eq!(slide, SlideNumber::FIRST);
}

#[test]
fn display_is_plain_number() {
    assert_eq!(SlideNumber::new(6).unwrap().to_string(), "6");
}

// =============================================================
// Catalog contents
// =============================================================

#[test]
fn entry_maps_to_catalog_row() {
    let third = SlideNumber::new(3).unwrap().entry();
    assert_eq!(third.title, "Eclipse Core");
    assert_eq!(third.description, "Experimental Film");
    assert_eq!(third.image, "/slider_img_03.jpg");
}

#[test]
fn slide_images_are_unique_and_ordered() {
    let images = slide_images().collect::<Vec<_>>();
    assert_eq!(images.len(), SLIDE_COUNT);
    assert_eq!(images.first(), Some(&"/slider_img_01.jpg"));
    assert_eq!(images.last(), Some(&"/slider_img_07.jpg"));
    let mut deduped = images.clone();
    deduped.dedup();
    assert_eq!(deduped, images);
}

#[test]
fn default_preview_is_first_menu_link_preview() {
    assert_eq!(MENU_LINKS[0].preview, DEFAULT_PREVIEW_IMAGE);
}
