//! Event binding.
//!
//! Wires navigation listeners: menu toggle, nav links, in-page anchors and
//! the window scroll that drives scroll-spy. Handlers only forward to the
//! controllers in `state`.

use crate::dom::{self, Elements};
use crate::state;
use crate::theme;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// Attach a listener for the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        warn!("failed to attach {event} listener: {err:?}");
    }
    cb.forget();
}

pub fn on_click<F>(target: &EventTarget, handler: F)
where
    F: FnMut(Event) + 'static,
{
    listen(target, "click", handler);
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Theme ──
    theme::bind_theme_toggle(els);

    // ── Mobile menu ──
    if let (Some(toggle), Some(_)) = (&els.menu_toggle, &els.mobile_menu) {
        on_click(toggle, |_| {
            state::with_navigation(|nav| nav.toggle_menu());
        });
    }

    // ── Nav links ──
    for link in &els.nav_links {
        let link2 = link.clone();
        on_click(link, move |e| {
            e.prevent_default();
            let href = link2.get_attribute("href").unwrap_or_default();
            state::with_navigation(|nav| nav.on_nav_link_click(&href));
        });
    }

    // ── Other in-page anchors ──
    for anchor in &els.anchors {
        let anchor2 = anchor.clone();
        on_click(anchor, move |e| {
            e.prevent_default();
            let href = anchor2.get_attribute("href").unwrap_or_default();
            state::with_navigation(|nav| nav.on_anchor_click(&href));
        });
    }

    // ── Scroll-spy ──
    if let Some(window) = dom::window() {
        listen(&window, "scroll", |_| {
            state::with_navigation(|nav| nav.on_scroll());
        });
    }
}
