//! Typewriter effect: type a phrase, pause, delete it, move to the next one,
//! forever.

use crate::ports::{ElementHandle, Scheduler};
use pf_api_types::TypingConfig;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// Text to show now, and how long until the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    typing_speed_ms: u32,
    deleting_speed_ms: u32,
    pause_duration_ms: u32,
    phrase_index: usize,
    /// Characters of the current phrase on screen.
    shown: usize,
    is_deleting: bool,
}

impl TypingAnimator {
    pub fn new(config: &TypingConfig) -> Self {
        Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            typing_speed_ms: config.typing_speed_ms,
            deleting_speed_ms: config.deleting_speed_ms,
            pause_duration_ms: config.pause_duration_ms,
            phrase_index: 0,
            shown: 0,
            is_deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn current_text(&self) -> String {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Advance one step. `None` when there is nothing to type.
    ///
    /// Reaching the full phrase flips to deleting and returns the pause as
    /// the delay, so the next tick removes the first character.
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let phrase_len = self.phrases.get(self.phrase_index)?.len();

        if self.is_deleting {
            self.shown = self.shown.saturating_sub(1);
            let text = self.current_text();
            let next_delay_ms = if self.shown == 0 {
                self.is_deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.typing_speed_ms
            } else {
                self.deleting_speed_ms
            };
            return Some(TypingFrame { text, next_delay_ms });
        }

        self.shown = (self.shown + 1).min(phrase_len);
        let next_delay_ms = if self.shown == phrase_len {
            self.is_deleting = true;
            self.pause_duration_ms
        } else {
            self.typing_speed_ms
        };
        Some(TypingFrame {
            text: self.current_text(),
            next_delay_ms,
        })
    }
}

/// Stops a running [`TypingLoop`] before its next tick.
#[derive(Clone, Default)]
pub struct TypingHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TypingHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Drives a [`TypingAnimator`] with chained single-shot timers: each tick
/// schedules the next one, so ticks never overlap.
pub struct TypingLoop;

impl TypingLoop {
    /// Writes the first frame immediately.
    pub fn start<E>(animator: TypingAnimator, target: E, scheduler: Rc<dyn Scheduler>) -> TypingHandle
    where
        E: ElementHandle + 'static,
    {
        let handle = TypingHandle::default();
        debug!(phrases = animator.phrases.len(), "typing loop started");
        step(
            Rc::new(RefCell::new(animator)),
            target,
            scheduler,
            handle.clone(),
        );
        handle
    }
}

fn step<E>(
    animator: Rc<RefCell<TypingAnimator>>,
    target: E,
    scheduler: Rc<dyn Scheduler>,
    handle: TypingHandle,
) where
    E: ElementHandle + 'static,
{
    if handle.is_cancelled() {
        debug!("typing loop cancelled");
        return;
    }
    let Some(frame) = animator.borrow_mut().tick() else {
        return;
    };
    target.set_text(&frame.text);

    let next = scheduler.clone();
    scheduler.schedule(
        frame.next_delay_ms,
        Box::new(move || step(animator, target, next, handle)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, ManualScheduler};

    fn frames(animator: &mut TypingAnimator, n: usize) -> Vec<(String, u32)> {
        (0..n)
            .filter_map(|_| animator.tick())
            .map(|f| (f.text, f.next_delay_ms))
            .collect()
    }

    #[test]
    fn single_phrase_cycles_with_default_speeds() {
        let mut animator = TypingAnimator::new(&TypingConfig::with_phrases(["AB"]));
        let expected = [
            ("A", 100),
            ("AB", 2000),
            ("A", 50),
            ("", 100),
            ("A", 100),
            ("AB", 2000),
            ("A", 50),
            ("", 100),
        ];
        let got = frames(&mut animator, expected.len());
        let want: Vec<(String, u32)> = expected.iter().map(|(t, d)| (t.to_string(), *d)).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn never_skips_a_length_or_overruns_the_phrase() {
        let phrases = ["Problem Solver", "Rust", "x"];
        let mut animator = TypingAnimator::new(&TypingConfig::with_phrases(phrases));
        let mut previous = 0usize;
        for _ in 0..200 {
            let phrase = phrases[animator.phrase_index()];
            let frame = animator.tick().unwrap();
            let len = frame.text.chars().count();
            assert!(len <= phrase.chars().count());
            assert!(phrase.starts_with(&frame.text));
            assert_eq!(len.abs_diff(previous), 1, "jumped from {previous} to {len}");
            previous = len;
        }
    }

    #[test]
    fn advances_through_phrases_in_order() {
        let mut animator = TypingAnimator::new(&TypingConfig::with_phrases(["ab", "c"]));
        let texts: Vec<String> = frames(&mut animator, 9).into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, ["a", "ab", "a", "", "c", "", "a", "ab", "a"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut animator = TypingAnimator::new(&TypingConfig::with_phrases(["héé"]));
        let texts: Vec<String> = frames(&mut animator, 3).into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, ["h", "hé", "héé"]);
    }

    #[test]
    fn custom_durations_are_used() {
        let config = TypingConfig {
            phrases: vec!["ab".into()],
            typing_speed_ms: 10,
            deleting_speed_ms: 5,
            pause_duration_ms: 30,
        };
        let mut animator = TypingAnimator::new(&config);
        let delays: Vec<u32> = frames(&mut animator, 4).into_iter().map(|(_, d)| d).collect();
        assert_eq!(delays, [10, 30, 5, 10]);
    }

    #[test]
    fn no_phrases_no_frames() {
        let mut animator = TypingAnimator::new(&TypingConfig::default());
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn loop_emits_frames_on_schedule() {
        let clock = Rc::new(ManualScheduler::default());
        let target = FakeElement::new();
        let animator = TypingAnimator::new(&TypingConfig::with_phrases(["AB"]));
        let _handle = TypingLoop::start(animator, target.clone(), clock.clone());

        assert_eq!(target.text_history(), ["A"]);
        clock.advance(99);
        assert_eq!(target.text(), "A");
        clock.advance(1);
        assert_eq!(target.text(), "AB");
        clock.advance(1999);
        assert_eq!(target.text(), "AB");
        clock.advance(1);
        assert_eq!(target.text(), "A");
        clock.advance(50);
        assert_eq!(target.text(), "");
        clock.advance(100);
        assert_eq!(target.text_history(), ["A", "AB", "A", "", "A"]);
        assert_eq!(clock.now(), 2250);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn cancelled_loop_stops_ticking() {
        let clock = Rc::new(ManualScheduler::default());
        let target = FakeElement::new();
        let animator = TypingAnimator::new(&TypingConfig::with_phrases(["hello"]));
        let handle = TypingLoop::start(animator, target.clone(), clock.clone());
        clock.advance(200);
        handle.cancel();
        clock.advance(10_000);
        assert_eq!(target.text_history(), ["h", "he", "hel"]);
        assert_eq!(clock.pending(), 0);
    }
}
