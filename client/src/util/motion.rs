//! Web Animations driver for choreography timelines.
//!
//! ARCHITECTURE
//! ============
//! `play` resolves each tween target to an element, starts one
//! `Element.animate` per tween with explicit from/to keyframes, and fires the
//! completion callback once every gating tween has finished. On finish the
//! end pose is written inline and the animation is cancelled, so elements
//! never accumulate filling animations across sequences.
//!
//! Targets that do not resolve are skipped silently. If no gating tween
//! could start, completion still fires on the next task so callers never
//! wait on an animation that does not exist.

use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, KeyframeAnimationOptions};

use crate::util::choreography::{Timeline, Tween};
use crate::util::style::Style;

type Completion = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Write `style` inline without animating.
pub fn apply_style(el: &HtmlElement, style: &Style) {
    let css = el.style();
    for (prop, value) in style.declarations() {
        let _ = css.set_property(prop.css_name(), &value);
    }
}

/// Play `timeline`, then call `on_complete` once.
pub fn play<T, R, F>(timeline: &Timeline<T>, resolve: R, on_complete: F)
where
    T: Copy + PartialEq + Debug,
    R: Fn(T) -> Option<HtmlElement>,
    F: FnOnce() + 'static,
{
    let completion: Completion = Rc::new(RefCell::new(Some(Box::new(on_complete))));
    let pending = Rc::new(Cell::new(0_usize));

    for tween in &timeline.tweens {
        let Some(el) = resolve(tween.target) else {
            log::trace!("motion target {:?} not mounted; skipping", tween.target);
            continue;
        };
        let gates = timeline.gates_completion(tween);
        match start(&el, tween) {
            Ok(animation) => {
                if gates {
                    pending.set(pending.get() + 1);
                }
                let finish = on_finish(el, tween.to, animation.clone(), gates, Rc::clone(&pending), Rc::clone(&completion));
                animation.set_onfinish(Some(finish.unchecked_ref()));
            }
            Err(err) => {
                log::debug!("animate() failed for {:?}: {err:?}", tween.target);
                apply_style(&el, &tween.to);
            }
        }
    }

    if pending.get() == 0 {
        Timeout::new(0, move || fire(&completion)).forget();
    }
}

fn start<T>(el: &HtmlElement, tween: &Tween<T>) -> Result<web_sys::Animation, JsValue> {
    let keyframes: Object = Array::of2(&keyframe(&tween.from), &keyframe(&tween.to)).into();
    let options = Object::new();
    Reflect::set(&options, &"duration".into(), &tween.duration_ms.into())?;
    Reflect::set(&options, &"delay".into(), &tween.delay_ms.into())?;
    Reflect::set(&options, &"easing".into(), &tween.ease.css().into())?;
    Reflect::set(&options, &"fill".into(), &"both".into())?;
    let options: KeyframeAnimationOptions = options.unchecked_into();
    el.animate_with_keyframe_animation_options(Some(&keyframes), &options)
}

fn keyframe(style: &Style) -> Object {
    let frame = Object::new();
    for (prop, value) in style.declarations() {
        let _ = Reflect::set(&frame, &prop.keyframe_name().into(), &value.into());
    }
    frame
}

fn on_finish(
    el: HtmlElement,
    end: Style,
    animation: web_sys::Animation,
    gates: bool,
    pending: Rc<Cell<usize>>,
    completion: Completion,
) -> JsValue {
    Closure::once_into_js(move || {
        apply_style(&el, &end);
        animation.cancel();
        if gates {
            let left = pending.get().saturating_sub(1);
            pending.set(left);
            if left == 0 {
                fire(&completion);
            }
        }
    })
}

fn fire(completion: &Completion) {
    let callback = completion.borrow_mut().take();
    if let Some(callback) = callback {
        callback();
    }
}
