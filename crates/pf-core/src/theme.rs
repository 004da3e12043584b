//! Light/dark theme management.
//!
//! The document root carries exactly one mode class. `system` is resolved
//! against the colour-scheme signal on every apply, never cached.

use crate::ports::{ColorScheme, ElementHandle};
use pf_api_types::{ResolvedTheme, ThemePreference};
use pf_storage::{PreferenceStore, load_theme, save_theme};
use tracing::{debug, warn};

/// Toggle glyph shown while the page is light (offers dark).
pub const MOON_ICON: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

/// Toggle glyph shown while the page is dark (offers light).
pub const SUN_ICON: &str = r#"<circle cx="12" cy="12" r="5"></circle><path d="M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"></path>"#;

const MODE_CLASSES: [&str; 2] = ["light", "dark"];

/// Stored theme, or `light` when nothing (readable) is stored.
pub fn initial_theme<P: PreferenceStore>(store: &P) -> ThemePreference {
    match load_theme(store) {
        Ok(Some(theme)) => theme,
        Ok(None) => ThemePreference::Light,
        Err(err) => {
            warn!("theme preference unreadable, using light: {err:#}");
            ThemePreference::Light
        }
    }
}

pub struct ThemeController<P, C, E> {
    theme: ThemePreference,
    store: P,
    scheme: C,
    root: Option<E>,
    icon: Option<E>,
}

impl<P, C, E> ThemeController<P, C, E>
where
    P: PreferenceStore,
    C: ColorScheme,
    E: ElementHandle,
{
    /// `root` is the document element, `icon` the `.theme-icon` inside the
    /// toggle button. Either may be absent.
    pub fn new(store: P, scheme: C, root: Option<E>, icon: Option<E>) -> Self {
        let theme = initial_theme(&store);
        Self {
            theme,
            store,
            scheme,
            root,
            icon,
        }
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    /// Paint the stored theme and the matching toggle glyph.
    pub fn init(&self) {
        self.apply(&self.theme);
        self.update_icon();
    }

    /// `None` for values that are neither a known mode nor `system`.
    pub fn resolve(&self, theme: &ThemePreference) -> Option<ResolvedTheme> {
        match theme {
            ThemePreference::Light => Some(ResolvedTheme::Light),
            ThemePreference::Dark => Some(ResolvedTheme::Dark),
            ThemePreference::System => Some(if self.scheme.prefers_dark() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }),
            ThemePreference::Custom(_) => None,
        }
    }

    pub fn apply(&self, theme: &ThemePreference) {
        let Some(root) = &self.root else {
            return;
        };
        for class in MODE_CLASSES {
            root.remove_class(class);
        }
        match self.resolve(theme) {
            Some(mode) => root.add_class(mode.class_name()),
            // Unknown values go on verbatim.
            None => root.add_class(theme.as_str()),
        }
        debug!(theme = %theme, "theme applied");
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        if let Err(err) = save_theme(&self.store, &theme) {
            warn!("failed to persist theme {theme}: {err:#}");
        }
        self.theme = theme;
        self.apply(&self.theme);
        self.update_icon();
    }

    /// User-initiated toggle: light goes dark, everything else goes light.
    pub fn toggle(&mut self) {
        let next = self.theme.toggled();
        self.set_theme(next);
    }

    fn update_icon(&self) {
        let Some(icon) = &self.icon else {
            return;
        };
        let glyph = match self.resolve(&self.theme) {
            Some(ResolvedTheme::Light) => MOON_ICON,
            _ => SUN_ICON,
        };
        icon.set_inner_html(glyph);
    }
}
