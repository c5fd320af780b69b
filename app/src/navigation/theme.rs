//! Theme preference and the two capabilities the header needs around it:
//! a key-value store that persists the preference and an applier that
//! mirrors it onto the document.
//!
//! Browser-backed implementations are only compiled with the `hydrate`
//! feature. Server rendering and tests use [`MemoryThemeStore`] and
//! [`NoopThemeApplier`].

use std::{collections::HashMap, sync::RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key under which the dark-mode flag is persisted.
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parses the persisted flag. Only the literals `"true"` and `"false"`
    /// are understood; anything else yields `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }

    /// The literal written to storage for this theme.
    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Accessible label for a button that switches away from this theme.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("storage access was rejected: {0}")]
    Rejected(String),
    #[error("storage lock was poisoned")]
    Poisoned,
}

/// Persistence capability for the theme preference.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeStore {
    /// Returns the stored value for `key`, or `None` if nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Mirrors the active theme onto whatever surface renders the page.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeApplier {
    fn apply(&self, theme: Theme);
}

/// In-process store used for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        store
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Applier for environments without a document, such as server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopThemeApplier;

impl ThemeApplier for NoopThemeApplier {
    fn apply(&self, theme: Theme) {
        tracing::trace!(?theme, "no document to apply theme to");
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{document, window};

    use super::{DARK_CLASS, StorageError, Theme, ThemeApplier, ThemeStore};

    /// `window.localStorage` backed store.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorageThemeStore;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .local_storage()
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    impl ThemeStore for LocalStorageThemeStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
    }

    /// Toggles the dark class on `document.documentElement`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DocumentThemeApplier;

    impl ThemeApplier for DocumentThemeApplier {
        fn apply(&self, theme: Theme) {
            let Some(root) = document().document_element() else {
                tracing::warn!("document has no root element; theme not applied");
                return;
            };
            if let Err(err) = root
                .class_list()
                .toggle_with_force(DARK_CLASS, theme.is_dark())
            {
                tracing::warn!(error = ?err, "failed to toggle theme class");
            }
        }
    }

}

#[cfg(feature = "hydrate")]
pub use browser::{DocumentThemeApplier, LocalStorageThemeStore};

/// Store used by the running application on the current platform.
#[cfg(feature = "hydrate")]
pub type PlatformThemeStore = LocalStorageThemeStore;
#[cfg(not(feature = "hydrate"))]
pub type PlatformThemeStore = MemoryThemeStore;

/// Applier used by the running application on the current platform.
#[cfg(feature = "hydrate")]
pub type PlatformThemeApplier = DocumentThemeApplier;
#[cfg(not(feature = "hydrate"))]
pub type PlatformThemeApplier = NoopThemeApplier;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_literals() {
        assert_eq!(Theme::from_stored("true"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("false"), Some(Theme::Light));
        assert_eq!(Theme::from_stored(" true\n"), Some(Theme::Dark));
        assert_eq!(Theme::Dark.as_stored(), "true");
        assert_eq!(Theme::Light.as_stored(), "false");
    }

    #[test]
    fn test_unparseable_values_are_rejected() {
        for value in ["", "dark", "TRUE", "1", "null", "\"true\""] {
            assert_eq!(Theme::from_stored(value), None, "value: {value:?}");
        }
    }

    #[test]
    fn test_toggled_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryThemeStore::new();
        assert_eq!(store.get(THEME_STORAGE_KEY), Ok(None));

        store.set(THEME_STORAGE_KEY, "true").unwrap();
        assert_eq!(store.get(THEME_STORAGE_KEY), Ok(Some("true".to_owned())));

        let seeded = MemoryThemeStore::with_entry(THEME_STORAGE_KEY, "false");
        assert_eq!(seeded.get(THEME_STORAGE_KEY), Ok(Some("false".to_owned())));
        assert_eq!(seeded.get("other"), Ok(None));
    }

    #[test]
    fn test_storage_error_messages() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "storage is not available in this environment"
        );
        assert_eq!(
            StorageError::Rejected("SecurityError".into()).to_string(),
            "storage access was rejected: SecurityError"
        );
    }
}
