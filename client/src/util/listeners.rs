//! Scoped window event listeners.
//!
//! A `WindowListener` owns both the JS closure and its registration; dropping
//! it removes the listener. Components keep these guards inside the effect
//! that attached them, so disposing the component's reactive owner tears the
//! listeners down with it.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;

use crate::error::MountError;

pub struct WindowListener {
    window: web_sys::Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Register `handler` for `event` on `window`.
    ///
    /// `passive: false` lets the handler call `preventDefault`, which wheel
    /// and touch listeners need to stop the page from scrolling.
    ///
    /// # Errors
    ///
    /// Returns `MissingAnchor("window")` outside a browser window or when the
    /// registration is refused.
    pub fn new<E, F>(event: &'static str, passive: bool, mut handler: F) -> Result<Self, MountError>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let window = web_sys::window().ok_or(MountError::MissingAnchor("window"))?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| MountError::MissingAnchor("window"))?;
        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
