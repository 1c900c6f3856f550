use super::*;

#[test]
fn report_splits_results_in_order() {
    let report = PreloadReport::from_results([
        Ok("/slider_img_01.jpg".to_owned()),
        Err(ImageLoadError::Failed { src: "/slider_img_02.jpg".to_owned() }),
        Ok("/slider_img_03.jpg".to_owned()),
    ]);
    assert_eq!(report.loaded, vec!["/slider_img_01.jpg", "/slider_img_03.jpg"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.settled(), 3);
    assert!(!report.is_clean());
}

#[test]
fn all_failures_still_settle() {
    let report = PreloadReport::from_results(
        crate::state::catalog::slide_images().map(|src| Err(ImageLoadError::Failed { src: src.to_owned() })),
    );
    assert_eq!(report.settled(), crate::state::catalog::SLIDE_COUNT);
    assert!(report.loaded.is_empty());
}

#[test]
fn empty_report_is_clean() {
    let report = PreloadReport::default();
    assert!(report.is_clean());
    assert_eq!(report.settled(), 0);
}
