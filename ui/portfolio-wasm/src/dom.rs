//! DOM element bindings.
//!
//! Every element the page scripts touch is resolved once at startup. All of
//! them are optional: a page without a menu or a typing line just loses that
//! behaviour.

use pf_content::SkillGroup;
use pf_core::ElementHandle;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

// ── Helpers ──

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nl) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// A page element as seen by the controllers.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(pub Element);

impl ElementHandle for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(DomElement)
    }
}

// ── Elements struct ──

/// Element references used by the page scripts.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub root: Option<Element>,

    // Theme
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,

    // Navigation
    pub menu_toggle: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub menu_icon: Option<Element>,
    pub nav_links: Vec<Element>,
    /// In-page anchors other than the nav links.
    pub anchors: Vec<Element>,

    // Content
    pub typing_text: Option<Element>,
    pub projects_container: Option<Element>,
    pub programming_skills: Option<Element>,
    pub web_skills: Option<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Elements {
        let theme_toggle = by_id("theme-toggle");
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|t| t.query_selector(".theme-icon").ok().flatten());
        let menu_toggle = by_id("mobile-menu-toggle");
        let menu_icon = menu_toggle
            .as_ref()
            .and_then(|t| t.query_selector(".menu-icon").ok().flatten());

        Elements {
            root: document().and_then(|d| d.document_element()),

            theme_toggle,
            theme_icon,

            menu_toggle,
            mobile_menu: by_id("mobile-menu"),
            menu_icon,
            nav_links: query_all(".nav-link"),
            anchors: query_all("a[href^=\"#\"]:not(.nav-link)"),

            typing_text: by_id("typing-text"),
            projects_container: by_id("projects-container"),
            programming_skills: by_id(SkillGroup::Programming.container_id()),
            web_skills: by_id(SkillGroup::Web.container_id()),
        }
    }
}
