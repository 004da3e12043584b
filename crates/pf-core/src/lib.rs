//! Page behaviour for the portfolio front-end, independent of the browser.
//!
//! Every controller talks to the page through the traits in [`ports`], so the
//! same state machines run against `web-sys` in the wasm crate and against
//! in-memory fakes in tests.

pub mod navigation;
pub mod ports;
pub mod reveal;
pub mod theme;
pub mod typing;

#[cfg(test)]
pub(crate) mod testing;

pub use navigation::{NavigationConfig, NavigationController, NavigationElements, NavigationState};
pub use ports::{ColorScheme, ElementHandle, Extent, Scheduler, Viewport};
pub use reveal::{RevealAnimator, RevealId, RevealKind};
pub use theme::ThemeController;
pub use typing::{TypingAnimator, TypingFrame, TypingHandle, TypingLoop};
