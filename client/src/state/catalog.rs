//! Static slide catalog and the circular slide index.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Number of slides in the hero carousel.
pub const SLIDE_COUNT: usize = 7;

/// Image shown in the menu preview when nothing has been hovered.
pub const DEFAULT_PREVIEW_IMAGE: &str = "/slide-img-1.jpg";

/// One carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Slides in display order. Slide number `n` lives at index `n - 1`.
pub const SLIDES: [SlideEntry; SLIDE_COUNT] = [
    SlideEntry { title: "Field Unit", description: "Concept Art", image: "/slider_img_01.jpg" },
    SlideEntry { title: "Astral Convergence", description: "Soundscape", image: "/slider_img_02.jpg" },
    SlideEntry { title: "Eclipse Core", description: "Experimental Film", image: "/slider_img_03.jpg" },
    SlideEntry { title: "Luminous", description: "Editorial", image: "/slider_img_04.jpg" },
    SlideEntry { title: "Serenity", description: "Music Video", image: "/slider_img_05.jpg" },
    SlideEntry { title: "Nebula Point", description: "VFX", image: "/slider_img_06.jpg" },
    SlideEntry { title: "Horizon", description: "Set Design", image: "/slider_img_07.jpg" },
];

/// A menu link with the preview image it reveals on hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    pub preview: &'static str,
}

pub const MENU_LINKS: [MenuLink; 4] = [
    MenuLink { label: "Visions", preview: "/slide-img-1.jpg" },
    MenuLink { label: "Core", preview: "/slide-img-2.jpg" },
    MenuLink { label: "Signals", preview: "/slide-img-3.jpg" },
    MenuLink { label: "Connect", preview: "/slide-img-4.jpg" },
];

pub const SOCIAL_LINKS: [&str; 4] = ["Instagram", "Twitter", "Github", "Linkedin"];

/// Image paths of every slide, in order.
pub fn slide_images() -> impl Iterator<Item = &'static str> {
    SLIDES.iter().map(|slide| slide.image)
}

/// 1-based slide position, always within `1..=SLIDE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideNumber(usize);

impl SlideNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(SLIDE_COUNT);

    /// Returns `None` when `n` is outside `1..=SLIDE_COUNT`.
    #[must_use]
    pub fn new(n: usize) -> Option<Self> {
        (1..=SLIDE_COUNT).contains(&n).then_some(Self(n))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Following slide; the last wraps to the first.
    #[must_use]
    pub fn next(self) -> Self {
        if self.0 == SLIDE_COUNT { Self::FIRST } else { Self(self.0 + 1) }
    }

    /// Preceding slide; the first wraps to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        if self.0 == 1 { Self::LAST } else { Self(self.0 - 1) }
    }

    #[must_use]
    pub fn entry(self) -> &'static SlideEntry {
        &SLIDES[self.0 - 1]
    }
}

impl Default for SlideNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for SlideNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
