//! Navigation controller setup.

use crate::browser::WindowViewport;
use crate::dom::{DomElement, Elements};
use crate::state;
use pf_core::{NavigationConfig, NavigationController, NavigationElements};

pub fn init_navigation(els: &Elements) {
    let elements = NavigationElements {
        mobile_menu: els.mobile_menu.clone().map(DomElement),
        menu_icon: els.menu_icon.clone().map(DomElement),
        links: els.nav_links.iter().cloned().map(DomElement).collect(),
    };
    state::set_navigation(NavigationController::new(
        WindowViewport,
        elements,
        NavigationConfig::default(),
    ));
}
