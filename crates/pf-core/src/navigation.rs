//! Mobile menu and scroll-spy.
//!
//! State is `is_menu_open x active_section`. Scroll events recompute the
//! active section by scanning the registry top to bottom; the first section
//! whose `[top, top + height)` contains `scroll_y + lookahead` wins.

use crate::ports::{ElementHandle, Extent, Viewport};
use pf_api_types::SectionId;
use tracing::debug;

pub const MENU_OPEN_ICON: &str = r#"<path d="M18 6L6 18M6 6l12 12"></path>"#;
pub const MENU_CLOSED_ICON: &str = r#"<path d="M3 12h18M3 6h18M3 18h18"></path>"#;

/// Classes carried by the nav link of the active section.
pub const ACTIVE_LINK_CLASSES: [&str; 2] = ["active", "text-blue-500"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationConfig {
    /// Height of the fixed header; scroll targets land this far below it.
    pub header_offset: f64,
    /// Added to `scroll_y` before matching sections.
    pub scroll_lookahead: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_lookahead: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub is_menu_open: bool,
    pub active_section: SectionId,
}

/// Elements the controller writes to. All optional except the link list,
/// which may simply be empty.
pub struct NavigationElements<E> {
    pub mobile_menu: Option<E>,
    pub menu_icon: Option<E>,
    pub links: Vec<E>,
}

impl<E> Default for NavigationElements<E> {
    fn default() -> Self {
        Self {
            mobile_menu: None,
            menu_icon: None,
            links: Vec::new(),
        }
    }
}

/// First section in `registry` whose extent contains `position`.
pub fn section_at<F>(registry: &[SectionId], position: f64, extent_of: F) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<Extent>,
{
    registry
        .iter()
        .copied()
        .find(|&section| extent_of(section).is_some_and(|extent| extent.contains(position)))
}

pub struct NavigationController<E, V> {
    state: NavigationState,
    config: NavigationConfig,
    registry: Vec<SectionId>,
    viewport: V,
    elements: NavigationElements<E>,
}

impl<E, V> NavigationController<E, V>
where
    E: ElementHandle,
    V: Viewport,
{
    pub fn new(viewport: V, elements: NavigationElements<E>, config: NavigationConfig) -> Self {
        Self {
            state: NavigationState::default(),
            config,
            registry: SectionId::ALL.to_vec(),
            viewport,
            elements,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn toggle_menu(&mut self) {
        self.state.is_menu_open = !self.state.is_menu_open;
        self.render_menu();
        debug!(open = self.state.is_menu_open, "mobile menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.state.is_menu_open = false;
        self.render_menu();
    }

    fn render_menu(&self) {
        let open = self.state.is_menu_open;
        if let Some(menu) = &self.elements.mobile_menu {
            menu.set_style("display", if open { "block" } else { "none" });
        }
        if let Some(icon) = &self.elements.menu_icon {
            icon.set_inner_html(if open { MENU_OPEN_ICON } else { MENU_CLOSED_ICON });
        }
    }

    /// A `.nav-link` was clicked; the caller has already prevented the
    /// default navigation. Links to anything but a known section go to the
    /// top, like a known section with no element on the page.
    pub fn on_nav_link_click(&mut self, href: &str) {
        self.close_menu();
        match href.parse::<SectionId>() {
            Ok(section) => self.scroll_to_target(section.as_str()),
            Err(err) => {
                debug!(%err, "nav link outside the section registry");
                self.viewport.scroll_to(0.0);
            }
        }
    }

    /// Any other in-page anchor. Does nothing unless `href` is `#id` and the
    /// element exists.
    pub fn on_anchor_click(&self, href: &str) -> bool {
        match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => self.scroll_if_present(id),
            _ => false,
        }
    }

    /// Like [`Self::scroll_to_target`], but leaves the page alone when the
    /// element is missing. Returns whether it scrolled.
    pub fn scroll_if_present(&self, id: &str) -> bool {
        let Some(extent) = self.viewport.extent_of(id) else {
            debug!(section = id, "scroll target missing");
            return false;
        };
        let top = (extent.top - self.config.header_offset).max(0.0);
        self.viewport.scroll_to(top);
        true
    }

    /// Smooth-scroll so the target sits just under the fixed header. `home`
    /// and ids with no element on the page scroll to the very top.
    pub fn scroll_to_target(&self, id: &str) {
        let top = match self.viewport.extent_of(id) {
            Some(extent) if id != SectionId::Home.as_str() => {
                (extent.top - self.config.header_offset).max(0.0)
            }
            _ => 0.0,
        };
        debug!(section = id, top, "scrolling to section");
        self.viewport.scroll_to(top);
    }

    pub fn on_scroll(&mut self) {
        let position = self.viewport.scroll_y() + self.config.scroll_lookahead;
        let found = section_at(&self.registry, position, |section| {
            self.viewport.extent_of(section.as_str())
        });
        if let Some(section) = found {
            self.set_active_section(section);
        }
    }

    pub fn set_active_section(&mut self, section: SectionId) {
        if self.state.active_section == section {
            return;
        }
        self.state.active_section = section;

        let fragment = section.fragment();
        for link in &self.elements.links {
            let is_active = link.attribute("href").as_deref() == Some(fragment.as_str());
            for class in ACTIVE_LINK_CLASSES {
                if is_active {
                    link.add_class(class);
                } else {
                    link.remove_class(class);
                }
            }
        }
        debug!(section = %section, "active section changed");
    }
}
