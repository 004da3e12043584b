//! Seams between the controllers and the page.

/// A handle to one element of the page.
///
/// Handles are cheap to clone and refer to the same underlying node, like
/// DOM references do. Writes never fail: an implementation that cannot
/// perform one drops it.
pub trait ElementHandle: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_text(&self, text: &str);
    fn set_inner_html(&self, html: &str);
    fn set_style(&self, property: &str, value: &str);
    /// First descendant matching a CSS selector.
    fn find(&self, selector: &str) -> Option<Self>;
}

/// The OS/browser "prefers dark" signal.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Scroll state of the window plus lookup of elements by id.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn extent_of(&self, id: &str) -> Option<Extent>;
    /// Smooth-scroll the window so its top edge lands on `top`.
    fn scroll_to(&self, top: f64);
}

/// "Run this after N ms" on the single UI thread.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
