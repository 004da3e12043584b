//! Theme wiring: restore the stored theme and flip it from the toggle button.

use crate::browser::{LocalPreferenceStore, MediaColorScheme};
use crate::dom::{DomElement, Elements};
use crate::events::on_click;
use crate::state;
use pf_core::ThemeController;
use tracing::info;

/// Apply the stored theme and paint the toggle icon.
pub fn init_theme(els: &Elements) {
    let theme = ThemeController::new(
        LocalPreferenceStore,
        MediaColorScheme,
        els.root.clone().map(DomElement),
        els.theme_icon.clone().map(DomElement),
    );
    theme.init();
    info!(theme = %theme.theme(), "theme restored");
    state::set_theme(theme);
}

pub fn bind_theme_toggle(els: &Elements) {
    let Some(toggle) = &els.theme_toggle else {
        return;
    };
    on_click(toggle, |_| {
        state::with_theme(|theme| theme.toggle());
    });
}
