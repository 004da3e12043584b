//! Native `IntersectionObserver` feeding the reveal animator.
//!
//! Each observed element gets a `data-reveal-id` pointing at its slot in the
//! animator; the observer stops watching an element once it is revealed.

use crate::browser::TimeoutScheduler;
use crate::dom::{self, DomElement};
use crate::state;
use pf_core::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use pf_core::{RevealAnimator, RevealId, RevealKind};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Elements animated on reveal, in observation order.
const REVEAL_SELECTORS: [&str; 3] = [".project-card", ".skill-bar", ".animate-on-scroll"];

fn on_entries(entries: js_sys::Array, observer: IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let Some(id) = target
            .get_attribute(REVEAL_ID_ATTR)
            .and_then(|raw| raw.parse::<usize>().ok())
        else {
            continue;
        };
        let revealed = state::with_reveal(|reveal| {
            reveal.on_intersection(
                RevealId(id),
                entry.is_intersecting(),
                entry.intersection_ratio(),
            )
        })
        .unwrap_or(false);
        if revealed {
            observer.unobserve(&target);
        }
    }
}

fn observer() -> Result<IntersectionObserver, JsValue> {
    let cb = Closure::wrap(
        Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>
    );
    let opts = IntersectionObserverInit::new();
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    cb.forget();
    Ok(observer)
}

/// Start watching every rendered card, skill bar and `.animate-on-scroll`
/// block. Call after the content has been rendered.
pub fn init_reveal() -> Result<(), JsValue> {
    let observer = observer()?;
    let mut animator = RevealAnimator::new(Rc::new(TimeoutScheduler));

    for selector in REVEAL_SELECTORS {
        for el in dom::query_all(selector) {
            if el.has_attribute(REVEAL_ID_ATTR) {
                continue;
            }
            let handle = DomElement(el.clone());
            let kind = RevealKind::classify(&handle);
            let id = animator.observe(handle, kind);
            el.set_attribute(REVEAL_ID_ATTR, &id.0.to_string())?;
            observer.observe(&el);
        }
    }

    debug!(count = animator.len(), "reveal observer attached");
    state::set_reveal(animator);
    Ok(())
}
