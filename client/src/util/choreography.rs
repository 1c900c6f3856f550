//! Declarative tween plans for the menu and the carousel.
//!
//! DESIGN
//! ======
//! Every sequence the page plays is described here as a `Timeline` of
//! from/to tweens over abstract targets. The browser driver in
//! `util::motion` resolves targets to elements and plays them; this module
//! never touches the DOM, so timings and geometry are unit-tested directly.
//!
//! All tweens in a timeline share start offset 0; per-tween `delay_ms`
//! shifts a member within the group. A timeline either completes when one
//! named target's tween finishes or, by default, when all of them have.

#[cfg(test)]
#[path = "choreography_test.rs"]
mod choreography_test;

use crate::config::MotionConfig;
use crate::state::carousel::Direction;
use crate::util::clip::ClipPolygon;
use crate::util::ease::Ease;
use crate::util::style::{Length, Style, Transform};

// =============================================================================
// TIMELINE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub target: T,
    pub from: Style,
    pub to: Style,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl<T> Tween<T> {
    #[must_use]
    pub fn new(target: T, from: Style, to: Style, duration_ms: f64, ease: Ease) -> Self {
        Self { target, from, to, duration_ms, delay_ms: 0.0, ease }
    }

    #[must_use]
    pub fn delayed(self, delay_ms: f64) -> Self {
        Self { delay_ms, ..self }
    }

    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T> {
    pub tweens: Vec<Tween<T>>,
    completes_on: Option<T>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { tweens: Vec::new(), completes_on: None }
    }
}

impl<T: Copy + PartialEq> Timeline<T> {
    #[must_use]
    pub fn push(mut self, tween: Tween<T>) -> Self {
        self.tweens.push(tween);
        self
    }

    #[must_use]
    pub fn extend(mut self, tweens: impl IntoIterator<Item = Tween<T>>) -> Self {
        self.tweens.extend(tweens);
        self
    }

    /// Complete as soon as `target`'s tween finishes instead of waiting for
    /// the whole group.
    #[must_use]
    pub fn completing_on(mut self, target: T) -> Self {
        self.completes_on = Some(target);
        self
    }

    /// Whether `tween` gates the completion callback.
    #[must_use]
    pub fn gates_completion(&self, tween: &Tween<T>) -> bool {
        self.completes_on.is_none_or(|target| target == tween.target)
    }

    /// Time at which the completion callback fires.
    #[must_use]
    pub fn completion_ms(&self) -> f64 {
        self.tweens
            .iter()
            .filter(|tween| self.gates_completion(tween))
            .map(Tween::end_ms)
            .fold(0.0, f64::max)
    }
}

/// Same tween over several targets, each starting `each_ms` after the last.
pub fn stagger<T>(
    targets: impl IntoIterator<Item = T>,
    from: Style,
    to: Style,
    duration_ms: f64,
    delay_ms: f64,
    each_ms: f64,
    ease: Ease,
) -> Vec<Tween<T>> {
    let mut offset = delay_ms;
    targets
        .into_iter()
        .map(|target| {
            let tween = Tween::new(target, from, to, duration_ms, ease).delayed(offset);
            offset += each_ms;
            tween
        })
        .collect()
}

// =============================================================================
// MENU
// =============================================================================

/// Elements the menu sequences animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuTarget {
    /// Page container tilted away behind the overlay.
    Container,
    Overlay,
    Content,
    /// Staggered link/social entry, in document order.
    Reveal(usize),
    OpenLabel,
    CloseLabel,
}

const LABEL_EXIT_DELAY_MS: f64 = 250.0;
const LABEL_ENTER_DELAY_MS: f64 = 500.0;
const LABEL_DURATION_MS: f64 = 500.0;
const REVEAL_DELAY_MS: f64 = 750.0;
const REVEAL_DURATION_MS: f64 = 1000.0;
const REVEAL_STAGGER_MS: f64 = 100.0;
const PREVIEW_DURATION_MS: f64 = 750.0;

/// Container pose while the menu is open.
#[must_use]
pub fn container_open() -> Style {
    Style::transform(Transform { x: Length::Px(300.0), y: Length::Px(450.0), rotate_deg: 10.0, scale: 1.5 })
}

#[must_use]
pub fn container_closed() -> Style {
    Style::transform(Transform::IDENTITY)
}

#[must_use]
pub fn overlay_closed() -> Style {
    Style::clip(ClipPolygon::TOP_EDGE)
}

#[must_use]
pub fn overlay_open() -> Style {
    Style::clip(ClipPolygon::FULL)
}

#[must_use]
pub fn content_closed() -> Style {
    Style::transform(Transform { x: Length::Px(-100.0), y: Length::Px(-100.0), rotate_deg: -15.0, scale: 1.5 })
        .with_opacity(0.25)
}

#[must_use]
pub fn content_open() -> Style {
    Style::transform(Transform::IDENTITY).with_opacity(1.0)
}

/// Off-screen baseline for links and socials while the menu is closed.
#[must_use]
pub fn reveal_hidden() -> Style {
    Style::offset_y(Length::Percent(120.0)).with_opacity(0.0)
}

#[must_use]
pub fn reveal_shown() -> Style {
    Style::offset_y(Length::Percent(0.0)).with_opacity(1.0)
}

/// Resting pose of a toggle label.
#[must_use]
pub fn label_shown() -> Style {
    Style::transform(Transform::IDENTITY).with_opacity(1.0)
}

/// Hidden pose of a toggle label. `sign` -1 parks it up-left (where "Menu"
/// exits to), +1 down-right (where "Close" waits).
#[must_use]
pub fn label_hidden(sign: f64) -> Style {
    Style::transform(Transform {
        x: Length::Px(5.0 * sign),
        y: Length::Px(10.0 * sign),
        rotate_deg: 5.0 * sign,
        scale: 1.0,
    })
    .with_opacity(0.0)
}

/// Swap the "Menu" and "Close" labels.
fn label_swap(opening: bool) -> Vec<Tween<MenuTarget>> {
    let (leaving, entering, sign) = if opening {
        (MenuTarget::OpenLabel, MenuTarget::CloseLabel, -1.0)
    } else {
        (MenuTarget::CloseLabel, MenuTarget::OpenLabel, 1.0)
    };
    vec![
        Tween::new(leaving, label_shown(), label_hidden(sign), LABEL_DURATION_MS, Ease::Power2Out)
            .delayed(LABEL_EXIT_DELAY_MS),
        Tween::new(entering, label_hidden(-sign), label_shown(), LABEL_DURATION_MS, Ease::Power2Out)
            .delayed(LABEL_ENTER_DELAY_MS),
    ]
}

/// Open sequence. Completes when the overlay clip-path lands.
#[must_use]
pub fn menu_open(cfg: &MotionConfig, reveal_count: usize) -> Timeline<MenuTarget> {
    let d = cfg.menu_duration_ms;
    Timeline::default()
        .extend(label_swap(true))
        .push(Tween::new(MenuTarget::Container, container_closed(), container_open(), d, Ease::Power4InOut))
        .push(Tween::new(MenuTarget::Content, content_closed(), content_open(), d, Ease::Power4InOut))
        .extend(stagger(
            (0..reveal_count).map(MenuTarget::Reveal),
            reveal_hidden(),
            reveal_shown(),
            REVEAL_DURATION_MS,
            REVEAL_DELAY_MS,
            REVEAL_STAGGER_MS,
            Ease::Power3Out,
        ))
        .push(Tween::new(MenuTarget::Overlay, overlay_closed(), overlay_open(), d, Ease::Power4InOut))
        .completing_on(MenuTarget::Overlay)
}

/// Close sequence. Completes when the overlay clip-path collapses.
#[must_use]
pub fn menu_close(cfg: &MotionConfig) -> Timeline<MenuTarget> {
    let d = cfg.menu_duration_ms;
    Timeline::default()
        .push(Tween::new(MenuTarget::Container, container_open(), container_closed(), d, Ease::Power4InOut))
        .extend(label_swap(false))
        .push(Tween::new(MenuTarget::Content, content_open(), content_closed(), d, Ease::Power4InOut))
        .push(Tween::new(MenuTarget::Overlay, overlay_open(), overlay_closed(), d, Ease::Power4InOut))
        .completing_on(MenuTarget::Overlay)
}

/// Starting pose of a freshly hovered preview image.
#[must_use]
pub fn preview_enter() -> Style {
    Style::transform(Transform { rotate_deg: 10.0, scale: 1.25, ..Transform::IDENTITY }).with_opacity(0.0)
}

#[must_use]
pub fn preview_reveal() -> Timeline<()> {
    Timeline::default().push(Tween::new(
        (),
        preview_enter(),
        Style::transform(Transform::IDENTITY).with_opacity(1.0),
        PREVIEW_DURATION_MS,
        Ease::Power2Out,
    ))
}

// =============================================================================
// CAROUSEL
// =============================================================================

/// Element roles within one slide's markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlidePart {
    /// Full-bleed `.slide-bg-img` layer.
    Background,
    BackgroundImage,
    /// Framed `.slide-main-img-wrapper`.
    MainWrapper,
    MainImage,
    Title,
    Description,
    Counter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideTarget {
    Outgoing(SlidePart),
    Incoming(SlidePart),
}

const TITLE_TRAVEL_PX: f64 = 50.0;
const DESCRIPTION_TRAVEL_PX: f64 = 20.0;
const COUNTER_TRAVEL_PX: f64 = 18.0;
const MAIN_IMAGE_TRAVEL_PCT: f64 = 50.0;
const BACKGROUND_EXIT_SCALE: f64 = 1.5;

fn text_travel(part: SlidePart) -> Option<f64> {
    match part {
        SlidePart::Title => Some(TITLE_TRAVEL_PX),
        SlidePart::Description => Some(DESCRIPTION_TRAVEL_PX),
        SlidePart::Counter => Some(COUNTER_TRAVEL_PX),
        _ => None,
    }
}

/// Collapsed/expanded clip pair for the incoming background layer.
fn background_clips(direction: Direction) -> (ClipPolygon, ClipPolygon) {
    match direction {
        Direction::Down => (ClipPolygon::BOTTOM_EDGE, ClipPolygon::FULL_FROM_BOTTOM),
        Direction::Up => (ClipPolygon::TOP_EDGE, ClipPolygon::FULL),
    }
}

/// Collapsed/expanded clip pair for the incoming main image wrapper.
fn wrapper_clips(direction: Direction) -> (ClipPolygon, ClipPolygon) {
    match direction {
        Direction::Down => (ClipPolygon::TOP_EDGE, ClipPolygon::FULL),
        Direction::Up => (ClipPolygon::BOTTOM_EDGE, ClipPolygon::FULL_FROM_BOTTOM),
    }
}

/// Pre-transition pose of each incoming part that starts off its rest pose.
#[must_use]
pub fn slide_entry_styles(direction: Direction) -> Vec<(SlidePart, Style)> {
    let sign = direction.sign();
    let mut styles = vec![
        (SlidePart::Background, Style::clip(background_clips(direction).0)),
        (SlidePart::MainWrapper, Style::clip(wrapper_clips(direction).0)),
        (SlidePart::MainImage, Style::offset_y(Length::Percent(-MAIN_IMAGE_TRAVEL_PCT * sign))),
    ];
    for part in [SlidePart::Title, SlidePart::Description, SlidePart::Counter] {
        if let Some(travel) = text_travel(part) {
            styles.push((part, Style::offset_y(Length::Px(travel * sign))));
        }
    }
    styles
}

/// The synchronized slide change: every member starts at 0 with the same
/// duration and ease, differing between directions only in geometry sign.
#[must_use]
pub fn slide_timeline(direction: Direction, cfg: &MotionConfig) -> Timeline<SlideTarget> {
    let d = cfg.slide_duration_ms;
    let ease = Ease::Power2InOut;
    let sign = direction.sign();
    let (bg_from, bg_to) = background_clips(direction);
    let (wrap_from, wrap_to) = wrapper_clips(direction);
    let at_rest_pct = Style::offset_y(Length::Percent(0.0));

    let mut timeline = Timeline::default()
        .push(Tween::new(
            SlideTarget::Incoming(SlidePart::Background),
            Style::clip(bg_from),
            Style::clip(bg_to),
            d,
            ease,
        ))
        .push(Tween::new(
            SlideTarget::Outgoing(SlidePart::BackgroundImage),
            Style::transform(Transform::IDENTITY),
            Style::transform(Transform { scale: BACKGROUND_EXIT_SCALE, ..Transform::IDENTITY }),
            d,
            ease,
        ))
        .push(Tween::new(
            SlideTarget::Incoming(SlidePart::MainWrapper),
            Style::clip(wrap_from),
            Style::clip(wrap_to),
            d,
            ease,
        ))
        .push(Tween::new(
            SlideTarget::Outgoing(SlidePart::MainImage),
            at_rest_pct,
            Style::offset_y(Length::Percent(MAIN_IMAGE_TRAVEL_PCT * sign)),
            d,
            ease,
        ))
        .push(Tween::new(
            SlideTarget::Incoming(SlidePart::MainImage),
            Style::offset_y(Length::Percent(-MAIN_IMAGE_TRAVEL_PCT * sign)),
            at_rest_pct,
            d,
            ease,
        ));

    for part in [SlidePart::Title, SlidePart::Description, SlidePart::Counter] {
        let Some(travel) = text_travel(part) else {
            continue;
        };
        timeline = timeline
            .push(Tween::new(
                SlideTarget::Outgoing(part),
                Style::offset_y(Length::ZERO),
                Style::offset_y(Length::Px(-travel * sign)),
                d,
                ease,
            ))
            .push(Tween::new(
                SlideTarget::Incoming(part),
                Style::offset_y(Length::Px(travel * sign)),
                Style::offset_y(Length::ZERO),
                d,
                ease,
            ));
    }
    timeline
}
