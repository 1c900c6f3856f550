//! Navigation bar toggle and the full-screen overlay menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MenuState` gates the toggle so sequences never overlap; the preview
//! stack renders reactively and each hovered image plays its own reveal on
//! mount. The page container is passed in because the open sequence tilts
//! it away behind the overlay.

use leptos::html;
use leptos::prelude::*;

use crate::config::MotionConfig;
use crate::state::catalog::{MENU_LINKS, SOCIAL_LINKS};
use crate::state::menu::MenuState;
use crate::state::preview::{PreviewEntry, PreviewStack};
use crate::util::choreography::{content_closed, label_hidden, overlay_closed, preview_enter, reveal_hidden};

#[cfg(feature = "hydrate")]
use crate::state::menu::MenuMotion;
#[cfg(feature = "hydrate")]
use crate::util::choreography::{MenuTarget, menu_close, menu_open, preview_reveal};
#[cfg(feature = "hydrate")]
use crate::util::motion::{apply_style, play};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::HtmlElement;

/// Elements the menu sequences drive, resolved once after mount.
#[cfg(feature = "hydrate")]
struct MenuAnchors {
    container: HtmlElement,
    overlay: HtmlElement,
    content: HtmlElement,
    open_label: Option<HtmlElement>,
    close_label: Option<HtmlElement>,
    reveals: Vec<HtmlElement>,
}

#[cfg(feature = "hydrate")]
impl MenuAnchors {
    /// Labels are optional; every other root is required.
    fn resolve(
        container: Option<HtmlElement>,
        overlay: Option<HtmlElement>,
        content: Option<HtmlElement>,
        preview: Option<HtmlElement>,
        open_label: Option<HtmlElement>,
        close_label: Option<HtmlElement>,
    ) -> Result<Self, crate::error::MountError> {
        use crate::error::MountError;

        let container = container.ok_or(MountError::MissingAnchor("container"))?;
        let overlay = overlay.ok_or(MountError::MissingAnchor("menu-overlay"))?;
        let content = content.ok_or(MountError::MissingAnchor("menu-content"))?;
        preview.ok_or(MountError::MissingAnchor("menu-preview-img"))?;

        let mut reveals = Vec::new();
        if let Ok(nodes) = content.query_selector_all(".menu-links .link a, .menu-socials .social a") {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                    reveals.push(el);
                }
            }
        }
        Ok(Self { container, overlay, content, open_label, close_label, reveals })
    }

    fn element(&self, target: MenuTarget) -> Option<HtmlElement> {
        match target {
            MenuTarget::Container => Some(self.container.clone()),
            MenuTarget::Overlay => Some(self.overlay.clone()),
            MenuTarget::Content => Some(self.content.clone()),
            MenuTarget::Reveal(i) => self.reveals.get(i).cloned(),
            MenuTarget::OpenLabel => self.open_label.clone(),
            MenuTarget::CloseLabel => self.close_label.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
fn run_sequence(
    motion: MenuMotion,
    anchors: &MenuAnchors,
    menu: RwSignal<MenuState>,
    preview: RwSignal<PreviewStack>,
    cfg: &MotionConfig,
) {
    let timeline = match motion {
        MenuMotion::Open => menu_open(cfg, anchors.reveals.len()),
        MenuMotion::Close => menu_close(cfg),
    };
    log::debug!("menu sequence {motion:?} started");
    let reveals = anchors.reveals.clone();
    play(&timeline, |target| anchors.element(target), move || {
        let _ = menu.try_update(MenuState::finish);
        if motion == MenuMotion::Close {
            let hidden = reveal_hidden();
            for el in &reveals {
                apply_style(el, &hidden);
            }
            let _ = preview.try_update(PreviewStack::reset);
        }
    });
}

/// Menu toggle in the nav bar plus the overlay it controls.
#[component]
pub fn Menu(container: NodeRef<html::Div>) -> impl IntoView {
    let cfg = use_context::<MotionConfig>().unwrap_or_default();
    let menu = RwSignal::new(MenuState::default());
    let preview = RwSignal::new(PreviewStack::new(cfg.preview_capacity));

    let overlay_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let preview_ref = NodeRef::<html::Div>::new();
    let open_label_ref = NodeRef::<html::P>::new();
    let close_label_ref = NodeRef::<html::P>::new();

    #[cfg(feature = "hydrate")]
    let anchors: Rc<RefCell<Option<MenuAnchors>>> = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let anchors = Rc::clone(&anchors);
        Effect::new(move || {
            let resolved = MenuAnchors::resolve(
                container.get().map(Into::into),
                overlay_ref.get().map(Into::into),
                content_ref.get().map(Into::into),
                preview_ref.get().map(Into::into),
                open_label_ref.get().map(Into::into),
                close_label_ref.get().map(Into::into),
            );
            let found = match resolved {
                Ok(found) => Some(found),
                Err(err) => {
                    log::debug!("menu controller disabled: {err}");
                    None
                }
            };
            *anchors.borrow_mut() = found;
        });
    }

    let on_toggle = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let anchors = anchors.borrow();
            let Some(found) = anchors.as_ref() else {
                return;
            };
            if let Some(motion) = menu.try_update(MenuState::toggle).flatten() {
                run_sequence(motion, found, menu, preview, &cfg);
            }
        }
    };

    let toggle_class = move || {
        if menu.with(|m| m.marks_toggle_open()) { "menu-toggle menu-open" } else { "menu-toggle" }
    };
    let reveal_baseline = reveal_hidden().inline();

    let links = MENU_LINKS
        .iter()
        .map(|link| {
            let src = link.preview;
            let on_hover = move |_ev: leptos::ev::MouseEvent| {
                if !menu.with_untracked(|m| m.accepts_hover()) {
                    return;
                }
                preview.maybe_update(|stack| stack.push(src));
            };
            view! {
                <div class="link">
                    <a href="#" data-img=src style=reveal_baseline.clone() on:mouseenter=on_hover>
                        {link.label}
                    </a>
                </div>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|name| {
            view! {
                <div class="social">
                    <a href="#" style=reveal_baseline.clone()>
                        {*name}
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <nav>
            <div class="logo">
                <a href="#">"Elegance"</a>
            </div>
            <div class=toggle_class on:click=on_toggle>
                <div class="menu-icon">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
                <div class="menu-text">
                    <p id="menu-open" node_ref=open_label_ref>
                        "Menu"
                    </p>
                    <p id="menu-close" node_ref=close_label_ref style=label_hidden(1.0).inline()>
                        "Close"
                    </p>
                </div>
            </div>
        </nav>

        <div class="menu-overlay" node_ref=overlay_ref style=overlay_closed().inline()>
            <div class="menu-content" node_ref=content_ref style=content_closed().inline()>
                <div class="menu-items">
                    <div class="col-lg">
                        <div class="menu-preview-img" node_ref=preview_ref>
                            <For
                                each=move || preview.with(|stack| stack.iter().cloned().collect::<Vec<_>>())
                                key=|entry| entry.id
                                children=move |entry| view! { <PreviewImage entry=entry/> }
                            />
                        </div>
                    </div>
                    <div class="col-sm">
                        <div class="menu-links">{links}</div>
                        <div class="menu-socials">{socials}</div>
                    </div>
                </div>
                <div class="menu-footer">
                    <div class="col-lg">
                        <a href="#">"Run Sequence"</a>
                    </div>
                    <div class="col-sm">
                        <a href="#">"Origin"</a>
                        <a href="#">"Join Signal"</a>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One image in the preview stack. Hovered entries mount in their entry
/// pose and animate to rest.
#[component]
fn PreviewImage(entry: PreviewEntry) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let style = if entry.reveal { preview_enter().inline() } else { String::new() };

    #[cfg(feature = "hydrate")]
    {
        if entry.reveal {
            Effect::new(move || {
                if let Some(img) = img_ref.get() {
                    let el: HtmlElement = img.into();
                    play(&preview_reveal(), |()| Some(el.clone()), || {});
                }
            });
        }
    }

    view! { <img src=entry.src alt="" style=style node_ref=img_ref/> }
}
