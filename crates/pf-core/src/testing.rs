//! In-memory stand-ins for the page, used by the unit tests.

use crate::ports::{ColorScheme, ElementHandle, Extent, Scheduler, Viewport};
use anyhow::{Result, bail};
use pf_storage::PreferenceStore;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct FakeNode {
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    text_history: Vec<String>,
    inner_html: String,
    style: HashMap<String, String>,
    children: HashMap<String, FakeElement>,
    class_writes: usize,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_owned());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_child(self, selector: &str, child: FakeElement) -> Self {
        self.0
            .borrow_mut()
            .children
            .insert(selector.to_owned(), child);
        self
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text_history.last().cloned().unwrap_or_default()
    }

    pub fn text_history(&self) -> Vec<String> {
        self.0.borrow().text_history.clone()
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }

    /// Number of class mutations that actually changed the element.
    pub fn class_writes(&self) -> usize {
        self.0.borrow().class_writes
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeElement")
            .field("classes", &self.0.borrow().classes)
            .finish()
    }
}

impl ElementHandle for FakeElement {
    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_owned());
            node.class_writes += 1;
        }
    }

    fn remove_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        if node.classes.len() != before {
            node.class_writes += 1;
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text_history.push(text.to_owned());
    }

    fn set_inner_html(&self, html: &str) {
        self.0.borrow_mut().inner_html = html.to_owned();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.borrow().children.get(selector).cloned()
    }
}

#[derive(Default)]
pub struct FakeViewport {
    scroll_y: Cell<f64>,
    extents: RefCell<HashMap<String, Extent>>,
    scrolls: RefCell<Vec<f64>>,
}

impl FakeViewport {
    pub fn with_section(self, id: &str, top: f64, height: f64) -> Self {
        self.extents
            .borrow_mut()
            .insert(id.to_owned(), Extent::new(top, height));
        self
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn extent_of(&self, id: &str) -> Option<Extent> {
        self.extents.borrow().get(id).copied()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}

/// Storage that is switched off, e.g. blocked by privacy settings.
#[derive(Default)]
pub struct FailingPreferenceStore {
    writes: Cell<usize>,
}

impl FailingPreferenceStore {
    /// Writes attempted so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for FailingPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        bail!("storage disabled, cannot read {key}")
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        bail!("storage disabled, cannot write {key}")
    }
}

pub struct FixedColorScheme(pub Cell<bool>);

impl FixedColorScheme {
    pub fn dark() -> Self {
        Self(Cell::new(true))
    }

    pub fn light() -> Self {
        Self(Cell::new(false))
    }
}

impl ColorScheme for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0.get()
    }
}

type Task = Box<dyn FnOnce()>;

/// Fake clock: tasks run only when [`ManualScheduler::advance`] passes their
/// due time, in due-time then submission order.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<(u64, u64, Task)>>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(i, _)| i);
                position.map(|i| queue.remove(i))
            };
            let Some((due, _, task)) = next else {
                break;
            };
            self.now.set(due);
            task();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let due = self.now.get() + u64::from(delay_ms);
        self.queue.borrow_mut().push((due, seq, task));
    }
}
