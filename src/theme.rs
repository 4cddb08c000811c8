//! Light/dark theme toggle with a persisted preference.
//!
//! The preference is the only state that survives a reload. It is stored
//! under [`STORAGE_KEY`] as `"light"` or `"dark"` through a
//! [`PreferenceStore`], which the browser binding backs with
//! `localStorage` and tests back with [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class for the toggle: a sun offers the way back to light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value storage for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when browser storage is unavailable and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// The toggle's state, bound to its preference store.
#[derive(Debug)]
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Read the stored preference once. Missing or unrecognized values mean
    /// light.
    pub fn load(store: S) -> Self {
        let stored = store.get(STORAGE_KEY);
        let current = match stored.as_deref().map(Theme::parse) {
            Some(Some(theme)) => theme,
            Some(None) => {
                log::warn!("ignoring stored theme {stored:?}; using light");
                Theme::Light
            }
            None => Theme::Light,
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(STORAGE_KEY, self.current.as_str());
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
