//! One-shot reveal animations for elements scrolling into view.
//!
//! An element is revealed the first time at least 10% of it is visible
//! inside the viewport shrunk by 100px at the bottom. Nothing is ever
//! un-revealed.

use crate::ports::{ElementHandle, Scheduler};
use std::rc::Rc;
use tracing::debug;

pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the observer's viewport by 100px at the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const FADE_IN_CLASS: &str = "animate-fade-in";
pub const SLIDE_UP_CLASS: &str = "animate-slide-up";

pub const SKILL_FILL_DELAY_MS: u32 = 200;

pub use pf_api_types::{CARD_STAGGER_MS, stagger_delay_ms};

#[derive(Debug, Clone, PartialEq)]
pub enum RevealKind<E> {
    Generic,
    /// Fills `progress` to `percentage`% shortly after the reveal.
    SkillBar { percentage: u8, progress: E },
    /// Slides up after its stagger delay.
    ProjectCard { stagger_delay_ms: u32 },
}

impl<E: ElementHandle> RevealKind<E> {
    /// Recover the reveal metadata rendered into the markup.
    pub fn classify(element: &E) -> Self {
        if element.has_class("skill-bar") {
            let bar = element.find(".skill-progress").and_then(|progress| {
                let percentage = progress
                    .attribute("data-percentage")?
                    .trim()
                    .parse::<u8>()
                    .ok()?
                    .min(100);
                Some(Self::SkillBar {
                    percentage,
                    progress,
                })
            });
            if let Some(bar) = bar {
                return bar;
            }
        }
        if element.has_class("project-card") {
            let stagger_delay_ms = element
                .attribute("data-delay")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(0);
            return Self::ProjectCard { stagger_delay_ms };
        }
        Self::Generic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(pub usize);

struct Observed<E> {
    element: E,
    kind: RevealKind<E>,
    revealed: bool,
}

pub struct RevealAnimator<E> {
    scheduler: Rc<dyn Scheduler>,
    observed: Vec<Observed<E>>,
}

impl<E: ElementHandle + 'static> RevealAnimator<E> {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            observed: Vec::new(),
        }
    }

    pub fn observe(&mut self, element: E, kind: RevealKind<E>) -> RevealId {
        self.observed.push(Observed {
            element,
            kind,
            revealed: false,
        });
        RevealId(self.observed.len() - 1)
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.observed.get(id.0).is_some_and(|o| o.revealed)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Feed one visibility sample. Returns `true` only for the sample that
    /// revealed the element; the caller may stop watching it afterwards.
    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        let Some(entry) = self.observed.get_mut(id.0) else {
            return false;
        };
        if entry.revealed {
            return false;
        }
        entry.revealed = true;
        entry.element.add_class(FADE_IN_CLASS);

        match &entry.kind {
            RevealKind::Generic => {}
            RevealKind::SkillBar {
                percentage,
                progress,
            } => {
                let progress = progress.clone();
                let width = format!("{percentage}%");
                self.scheduler.schedule(
                    SKILL_FILL_DELAY_MS,
                    Box::new(move || progress.set_style("width", &width)),
                );
            }
            RevealKind::ProjectCard { stagger_delay_ms } => {
                let card = entry.element.clone();
                self.scheduler.schedule(
                    *stagger_delay_ms,
                    Box::new(move || card.add_class(SLIDE_UP_CLASS)),
                );
            }
        }
        debug!(id = id.0, "element revealed");
        true
    }
}
