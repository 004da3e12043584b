//! Portfolio page front-end.
//!
//! Binds the page's DOM to the controllers in `pf-core`: theme toggle,
//! navigation with scroll-spy, reveal-on-scroll, the typing line and the
//! rendered project and skill lists. Each concern lives in its own module.

pub mod actions;
pub mod browser;
pub mod content;
pub mod dom;
pub mod events;
pub mod logging;
pub mod navigation;
pub mod reveal;
pub mod state;
pub mod theme;
pub mod typing;

use pf_content::{ContentRenderer, SiteContent};
use tracing::info;
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind();

    // Theme first so the page never paints in the wrong scheme
    theme::init_theme(&els);
    navigation::init_navigation(&els);

    let site = SiteContent::bundled().map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
    state::set_contact(site.contact.clone());
    let typing = site.typing.clone();
    let renderer = ContentRenderer::new(site);
    content::render_content(&els, &renderer);

    // Cards and bars must exist before the observer is attached
    reveal::init_reveal()?;
    typing::start_typing(&els, &typing);

    events::bind_events(&els);

    info!("portfolio initialised");
    Ok(())
}
