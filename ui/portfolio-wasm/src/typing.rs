//! Typing line in the hero section.

use crate::browser::TimeoutScheduler;
use crate::dom::{DomElement, Elements};
use crate::state;
use pf_api_types::TypingConfig;
use pf_core::{TypingAnimator, TypingLoop};
use std::rc::Rc;

pub fn start_typing(els: &Elements, config: &TypingConfig) {
    let Some(target) = &els.typing_text else {
        return;
    };
    let handle = TypingLoop::start(
        TypingAnimator::new(config),
        DomElement(target.clone()),
        Rc::new(TimeoutScheduler),
    );
    state::set_typing(handle);
}
