//! Browser implementations of the controller ports.

use crate::dom;
use anyhow::{Result, anyhow};
use gloo_timers::callback::Timeout;
use pf_core::{ColorScheme, Extent, Scheduler, Viewport};
use pf_storage::PreferenceStore;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// `localStorage`, raw string values.
#[derive(Default)]
pub struct LocalPreferenceStore;

fn storage() -> Result<web_sys::Storage> {
    dom::window()
        .ok_or_else(|| anyhow!("no window"))?
        .local_storage()
        .map_err(|e| anyhow!("localStorage blocked: {e:?}"))?
        .ok_or_else(|| anyhow!("localStorage unavailable"))
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|e| anyhow!("localStorage read of {key} failed: {e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage write of {key} failed: {e:?}"))
    }
}

/// `(prefers-color-scheme: dark)`, queried on every call.
pub struct MediaColorScheme;

impl ColorScheme for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        dom::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mql| mql.matches())
    }
}

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        dom::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn extent_of(&self, id: &str) -> Option<Extent> {
        let el = dom::by_id(id)?.dyn_into::<HtmlElement>().ok()?;
        Some(Extent::new(
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }

    fn scroll_to(&self, top: f64) {
        let Some(window) = dom::window() else {
            return;
        };
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_left(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// `setTimeout`-backed scheduler. Timers are fire-and-forget.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
