//! DOM elements making up one visible slide.
//!
//! A `SlideFrame` owns the five top-level nodes of a slide (background
//! layer, main image wrapper, title, description, counter label). Dropping
//! the frame removes them from the document, so a transition that holds the
//! outgoing frame until its completion callback returns is exactly what
//! keeps those nodes alive.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::MountError;
use crate::state::carousel::Direction;
use crate::state::catalog::SlideNumber;
use crate::util::choreography::{SlidePart, slide_entry_styles};
use crate::util::motion::apply_style;

/// Parents the carousel appends slide nodes into.
#[derive(Clone)]
pub struct SlideContainers {
    pub slider: HtmlElement,
    pub main: HtmlElement,
    pub title: HtmlElement,
    pub description: HtmlElement,
    pub counter: HtmlElement,
}

pub struct SlideFrame {
    slide: HtmlElement,
    background: HtmlElement,
    background_image: HtmlElement,
    main_wrapper: HtmlElement,
    main_image: HtmlElement,
    title: HtmlElement,
    description: HtmlElement,
    counter: HtmlElement,
}

impl SlideFrame {
    /// Take ownership of the slide already rendered into `containers`.
    ///
    /// # Errors
    ///
    /// Returns `MissingAnchor` naming the first element that is not present.
    pub fn adopt(containers: &SlideContainers) -> Result<Self, MountError> {
        let slide = find(&containers.slider, ".slide")?;
        let background = find(&slide, ".slide-bg-img")?;
        let background_image = find(&background, "img")?;
        let main_wrapper = find(&containers.main, ".slide-main-img-wrapper")?;
        let main_image = find(&main_wrapper, "img")?;
        Ok(Self {
            slide,
            background,
            background_image,
            main_wrapper,
            main_image,
            title: find(&containers.title, "h1")?,
            description: find(&containers.description, "p")?,
            counter: find(&containers.counter, "p")?,
        })
    }

    /// Create and append the nodes for `number`, posed to enter from the
    /// edge `direction` implies.
    ///
    /// # Errors
    ///
    /// Returns `MissingAnchor("document")` if element creation is refused.
    pub fn build(
        document: &Document,
        containers: &SlideContainers,
        number: SlideNumber,
        direction: Direction,
    ) -> Result<Self, MountError> {
        let entry = number.entry();
        let slide = create(document, "div", Some("slide"))?;
        let background = create(document, "div", Some("slide-bg-img"))?;
        let background_image = image(document, entry.image)?;
        let main_wrapper = create(document, "div", Some("slide-main-img-wrapper"))?;
        let main_image = image(document, entry.image)?;
        let title = create(document, "h1", None)?;
        let description = create(document, "p", None)?;
        let counter = create(document, "p", None)?;

        title.set_text_content(Some(entry.title));
        description.set_text_content(Some(entry.description));
        counter.set_text_content(Some(&number.to_string()));

        let frame = Self { slide, background, background_image, main_wrapper, main_image, title, description, counter };
        for (part, style) in slide_entry_styles(direction) {
            apply_style(frame.part(part), &style);
        }

        append(&frame.background, &frame.background_image)?;
        append(&frame.slide, &frame.background)?;
        append(&frame.main_wrapper, &frame.main_image)?;
        append(&containers.slider, &frame.slide)?;
        append(&containers.main, &frame.main_wrapper)?;
        append(&containers.title, &frame.title)?;
        append(&containers.description, &frame.description)?;
        append(&containers.counter, &frame.counter)?;
        Ok(frame)
    }

    #[must_use]
    pub fn part(&self, part: SlidePart) -> &HtmlElement {
        match part {
            SlidePart::Background => &self.background,
            SlidePart::BackgroundImage => &self.background_image,
            SlidePart::MainWrapper => &self.main_wrapper,
            SlidePart::MainImage => &self.main_image,
            SlidePart::Title => &self.title,
            SlidePart::Description => &self.description,
            SlidePart::Counter => &self.counter,
        }
    }
}

impl Drop for SlideFrame {
    fn drop(&mut self) {
        for node in [&self.slide, &self.main_wrapper, &self.title, &self.description, &self.counter] {
            node.remove();
        }
    }
}

fn find(parent: &Element, selector: &'static str) -> Result<HtmlElement, MountError> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(MountError::MissingAnchor(selector))
}

fn create(document: &Document, tag: &str, class: Option<&str>) -> Result<HtmlElement, MountError> {
    let el = document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(MountError::MissingAnchor("document"))?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    Ok(el)
}

fn image(document: &Document, src: &str) -> Result<HtmlElement, MountError> {
    let img = create(document, "img", None)?;
    let _ = img.set_attribute("src", src);
    let _ = img.set_attribute("alt", "");
    Ok(img)
}

fn append(parent: &Element, child: &Element) -> Result<(), MountError> {
    parent.append_child(child).map(|_| ()).map_err(|_| MountError::MissingAnchor("document"))
}
