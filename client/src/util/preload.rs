//! Slide image preloading.
//!
//! Every catalog image is requested up front and the carousel waits until
//! all of them have settled. A failed image is logged and counted but does
//! not block readiness; the slide then shows the browser's broken-image
//! placeholder.

#[cfg(test)]
#[path = "preload_test.rs"]
mod preload_test;

use crate::error::ImageLoadError;

/// Outcome of one preload pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<ImageLoadError>,
}

impl PreloadReport {
    /// Fold per-image results, preserving request order.
    pub fn from_results(results: impl IntoIterator<Item = Result<String, ImageLoadError>>) -> Self {
        let mut report = Self::default();
        for result in results {
            match result {
                Ok(src) => report.loaded.push(src),
                Err(err) => report.failed.push(err),
            }
        }
        report
    }

    #[must_use]
    pub fn settled(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Request every image in `paths` and wait until each has loaded or failed.
#[cfg(feature = "hydrate")]
pub async fn preload_images(paths: impl IntoIterator<Item = &'static str>) -> PreloadReport {
    let results = futures::future::join_all(paths.into_iter().map(load_image)).await;
    let report = PreloadReport::from_results(results);
    for err in &report.failed {
        log::warn!("carousel image failed to load: {}", err.src());
    }
    log::debug!("carousel images settled: {} loaded, {} failed", report.loaded.len(), report.failed.len());
    report
}

#[cfg(feature = "hydrate")]
async fn load_image(src: &'static str) -> Result<String, ImageLoadError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let img = web_sys::HtmlImageElement::new().map_err(|_| ImageLoadError::Unavailable { src: src.to_owned() })?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(false);
            }
        })
    };
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    img.set_src(src);

    let ok = rx.await.unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);
    drop((on_load, on_error));

    if ok { Ok(src.to_owned()) } else { Err(ImageLoadError::Failed { src: src.to_owned() }) }
}
