//! Functions exported to the page's inline handlers.
//!
//! Contact buttons open the matching URI in a new tab; hero buttons jump to a
//! section when it is on the page.

use crate::dom;
use crate::state;
use pf_api_types::SectionId;
use pf_content::ContactAction;
use tracing::warn;
use wasm_bindgen::prelude::*;

fn open(action: ContactAction) {
    let Some(profile) = state::contact() else {
        warn!(?action, "contact details not loaded");
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };
    let uri = action.uri(&profile);
    if let Err(err) = window.open_with_url_and_target(&uri, "_blank") {
        warn!("failed to open {uri}: {err:?}");
    }
}

fn scroll_to(section: SectionId) {
    state::with_navigation(|nav| nav.scroll_if_present(section.as_str()));
}

#[wasm_bindgen(js_name = openEmail)]
pub fn open_email() {
    open(ContactAction::Email);
}

#[wasm_bindgen(js_name = openPhone)]
pub fn open_phone() {
    open(ContactAction::Phone);
}

#[wasm_bindgen(js_name = openGitHub)]
pub fn open_github() {
    open(ContactAction::GitHub);
}

#[wasm_bindgen(js_name = openLinkedIn)]
pub fn open_linkedin() {
    open(ContactAction::LinkedIn);
}

#[wasm_bindgen(js_name = openTwitter)]
pub fn open_twitter() {
    open(ContactAction::Twitter);
}

#[wasm_bindgen(js_name = scrollToProjects)]
pub fn scroll_to_projects() {
    scroll_to(SectionId::Projects);
}

#[wasm_bindgen(js_name = scrollToContact)]
pub fn scroll_to_contact() {
    scroll_to(SectionId::Contact);
}
