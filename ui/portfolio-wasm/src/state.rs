//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Accessors return `None` instead of panicking when the slot is empty or
//! already borrowed by an outer handler.

use crate::browser::{LocalPreferenceStore, MediaColorScheme, WindowViewport};
use crate::dom::DomElement;
use pf_api_types::ContactProfile;
use pf_core::{NavigationController, RevealAnimator, ThemeController, TypingHandle};
use std::cell::RefCell;

pub type Theme = ThemeController<LocalPreferenceStore, MediaColorScheme, DomElement>;
pub type Navigation = NavigationController<DomElement, WindowViewport>;
pub type Reveal = RevealAnimator<DomElement>;

thread_local! {
    static THEME: RefCell<Option<Theme>> = const { RefCell::new(None) };
    static NAVIGATION: RefCell<Option<Navigation>> = const { RefCell::new(None) };
    static REVEAL: RefCell<Option<Reveal>> = const { RefCell::new(None) };
    static CONTACT: RefCell<Option<ContactProfile>> = const { RefCell::new(None) };
    static TYPING: RefCell<Option<TypingHandle>> = const { RefCell::new(None) };
}

fn with_slot<T, F, R>(
    key: &'static std::thread::LocalKey<RefCell<Option<T>>>,
    f: F,
) -> Option<R>
where
    F: FnOnce(&mut T) -> R,
{
    key.with(|slot| {
        let mut guard = slot.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}

pub fn set_theme(theme: Theme) {
    THEME.with(|s| *s.borrow_mut() = Some(theme));
}

pub fn with_theme<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Theme) -> R,
{
    with_slot(&THEME, f)
}

pub fn set_navigation(nav: Navigation) {
    NAVIGATION.with(|s| *s.borrow_mut() = Some(nav));
}

pub fn with_navigation<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Navigation) -> R,
{
    with_slot(&NAVIGATION, f)
}

pub fn set_reveal(reveal: Reveal) {
    REVEAL.with(|s| *s.borrow_mut() = Some(reveal));
}

pub fn with_reveal<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Reveal) -> R,
{
    with_slot(&REVEAL, f)
}

pub fn set_contact(profile: ContactProfile) {
    CONTACT.with(|s| *s.borrow_mut() = Some(profile));
}

pub fn contact() -> Option<ContactProfile> {
    CONTACT.with(|s| s.borrow().clone())
}

pub fn set_typing(handle: TypingHandle) {
    TYPING.with(|s| {
        if let Some(previous) = s.borrow_mut().replace(handle) {
            previous.cancel();
        }
    });
}
