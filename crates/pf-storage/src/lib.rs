use anyhow::Result;
use pf_api_types::{THEME_STORAGE_KEY, ThemePreference};
use std::cell::RefCell;
use std::collections::HashMap;

/// Origin-scoped string key/value store (the browser's `localStorage` in
/// production). Single-threaded: implementations use interior mutability.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> Result<Option<ThemePreference>> {
    Ok(store.get(THEME_STORAGE_KEY)?.map(ThemePreference::from))
}

pub fn save_theme<S: PreferenceStore + ?Sized>(store: &S, theme: &ThemePreference) -> Result<()> {
    store.set(THEME_STORAGE_KEY, theme.as_str())
}
