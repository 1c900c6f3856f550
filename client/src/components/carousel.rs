//! Hero carousel with wheel/touch-driven slide transitions.
//!
//! ARCHITECTURE
//! ============
//! `CarouselState` decides whether a gesture is accepted. An accepted
//! gesture builds the incoming `SlideFrame`, swaps it in as current, and
//! hands the outgoing frame to the timeline's completion callback; dropping
//! it there removes the old nodes. Window listeners are attached only after
//! every slide image has settled and are removed when the component's
//! owner is disposed.

use leptos::html;
use leptos::prelude::*;

use crate::config::MotionConfig;
use crate::state::carousel::CarouselState;
use crate::state::catalog::{SLIDE_COUNT, SlideNumber};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use web_sys::HtmlElement;

#[cfg(feature = "hydrate")]
use crate::error::MountError;
#[cfg(feature = "hydrate")]
use crate::state::carousel::Direction;
#[cfg(feature = "hydrate")]
use crate::state::catalog::slide_images;
#[cfg(feature = "hydrate")]
use crate::util::choreography::{SlideTarget, slide_timeline};
#[cfg(feature = "hydrate")]
use crate::util::gesture::{TouchTracker, wheel_direction};
#[cfg(feature = "hydrate")]
use crate::util::listeners::WindowListener;
#[cfg(feature = "hydrate")]
use crate::util::motion::play;
#[cfg(feature = "hydrate")]
use crate::util::preload::preload_images;
#[cfg(feature = "hydrate")]
use crate::util::slide_frame::{SlideContainers, SlideFrame};

/// Owns the visible slide and runs transitions against it.
#[cfg(feature = "hydrate")]
struct SlideDriver {
    document: web_sys::Document,
    containers: SlideContainers,
    current: RefCell<Option<SlideFrame>>,
    carousel: RwSignal<CarouselState>,
    cfg: MotionConfig,
}

#[cfg(feature = "hydrate")]
impl SlideDriver {
    fn advance(&self, direction: Direction) {
        let now = js_sys::Date::now();
        let transition = match self.carousel.try_update(|state| state.begin(direction, now)) {
            Some(Ok(transition)) => transition,
            Some(Err(reason)) => {
                log::trace!("gesture dropped: {reason}");
                return;
            }
            None => return,
        };

        let incoming = match SlideFrame::build(&self.document, &self.containers, transition.to, direction) {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("slide {} could not be built: {err}", transition.to);
                let _ = self.carousel.try_update(CarouselState::abort);
                return;
            }
        };
        log::debug!("slide {} -> {} ({direction:?})", transition.from, transition.to);

        let outgoing = self.current.replace(Some(incoming)).map(Rc::new);
        let timeline = slide_timeline(direction, &self.cfg);
        let resolve = {
            let outgoing = outgoing.clone();
            move |target: SlideTarget| -> Option<HtmlElement> {
                match target {
                    SlideTarget::Outgoing(part) => outgoing.as_ref().map(|frame| frame.part(part).clone()),
                    SlideTarget::Incoming(part) => self.current.borrow().as_ref().map(|frame| frame.part(part).clone()),
                }
            }
        };

        let carousel = self.carousel;
        let settle_ms = self.cfg.settle_delay_ms;
        play(&timeline, resolve, move || {
            drop(outgoing);
            let _ = carousel.try_update(CarouselState::finish);
            Timeout::new(settle_ms, move || {
                let _ = carousel.try_update(|state| state.settle(js_sys::Date::now()));
            })
            .forget();
        });
    }
}

/// Gesture listeners bound to a driver; dropping this detaches them.
#[cfg(feature = "hydrate")]
struct GestureBindings {
    _listeners: Vec<WindowListener>,
}

#[cfg(feature = "hydrate")]
impl GestureBindings {
    fn attach(driver: &Rc<SlideDriver>) -> Result<Self, MountError> {
        let touch = Rc::new(RefCell::new(TouchTracker::default()));
        let threshold = driver.cfg.touch_threshold_px;

        let wheel = {
            let driver = Rc::clone(driver);
            WindowListener::new("wheel", false, move |ev: web_sys::WheelEvent| {
                ev.prevent_default();
                if let Some(direction) = wheel_direction(ev.delta_y()) {
                    driver.advance(direction);
                }
            })?
        };
        let touch_start = {
            let touch = Rc::clone(&touch);
            WindowListener::new("touchstart", false, move |ev: web_sys::TouchEvent| {
                if let Some(point) = ev.touches().get(0) {
                    touch.borrow_mut().start(f64::from(point.client_y()));
                }
            })?
        };
        let touch_move = {
            let touch = Rc::clone(&touch);
            let driver = Rc::clone(driver);
            WindowListener::new("touchmove", false, move |ev: web_sys::TouchEvent| {
                ev.prevent_default();
                if !driver.carousel.with_untracked(CarouselState::accepts_gestures) {
                    return;
                }
                let Some(point) = ev.touches().get(0) else {
                    return;
                };
                let direction = touch.borrow_mut().moved(f64::from(point.client_y()), threshold);
                if let Some(direction) = direction {
                    driver.advance(direction);
                }
            })?
        };
        let touch_end = WindowListener::new("touchend", true, move |_ev: web_sys::Event| {
            touch.borrow_mut().end();
        })?;

        Ok(Self { _listeners: vec![wheel, touch_start, touch_move, touch_end] })
    }
}

#[component]
pub fn Carousel() -> impl IntoView {
    let cfg = use_context::<MotionConfig>().unwrap_or_default();
    let carousel = RwSignal::new(CarouselState::new(cfg.gesture_debounce_ms));
    let ready = Memo::new(move |_| carousel.with(CarouselState::images_loaded));

    let slider_ref = NodeRef::<html::Div>::new();
    let main_ref = NodeRef::<html::Div>::new();
    let title_ref = NodeRef::<html::Div>::new();
    let description_ref = NodeRef::<html::Div>::new();
    let counter_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                let report = preload_images(slide_images()).await;
                if !report.is_clean() {
                    log::warn!("{} of {SLIDE_COUNT} carousel images failed; continuing", report.failed.len());
                }
                let _ = carousel.try_update(CarouselState::mark_images_loaded);
            });
        });

        let bindings: Rc<RefCell<Option<GestureBindings>>> = Rc::new(RefCell::new(None));
        Effect::new(move || {
            if !ready.get() || bindings.borrow().is_some() {
                return;
            }
            let (Some(slider), Some(main), Some(title), Some(description), Some(counter)) =
                (slider_ref.get(), main_ref.get(), title_ref.get(), description_ref.get(), counter_ref.get())
            else {
                return;
            };
            let containers = SlideContainers {
                slider: slider.into(),
                main: main.into(),
                title: title.into(),
                description: description.into(),
                counter: counter.into(),
            };
            let mounted = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(MountError::MissingAnchor("document"))
                .and_then(|document| {
                    let current = SlideFrame::adopt(&containers)?;
                    let driver = Rc::new(SlideDriver {
                        document,
                        containers,
                        current: RefCell::new(Some(current)),
                        carousel,
                        cfg,
                    });
                    GestureBindings::attach(&driver)
                });
            match mounted {
                Ok(attached) => *bindings.borrow_mut() = Some(attached),
                Err(err) => log::debug!("carousel controller disabled: {err}"),
            }
        });
    }

    let first = SlideNumber::FIRST.entry();
    let current_label = move || carousel.with(|state| state.current.to_string());

    view! {
        <Show
            when=move || ready.get()
            fallback=|| {
                view! {
                    <div class="carousel-loading">
                        <div class="loading-spinner"></div>
                        <p>"Loading carousel..."</p>
                    </div>
                }
            }
        >
            <footer>
                <p>"All Projects"</p>
                <div class="slider-counter" data-current=current_label>
                    <div class="count" node_ref=counter_ref>
                        <p>"1"</p>
                    </div>
                    <p>"/"</p>
                    <p>{SLIDE_COUNT}</p>
                </div>
            </footer>

            <div class="slider" node_ref=slider_ref>
                <div class="slide">
                    <div class="slide-bg-img">
                        <img src=first.image alt=""/>
                    </div>
                </div>

                <div class="slide-main-img" node_ref=main_ref>
                    <div class="slide-main-img-wrapper">
                        <img src=first.image alt=""/>
                    </div>
                </div>

                <div class="slide-copy">
                    <div class="slide-title" node_ref=title_ref>
                        <h1>{first.title}</h1>
                    </div>
                    <div class="slide-description" node_ref=description_ref>
                        <p>{first.description}</p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
