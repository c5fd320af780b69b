//! Framework-independent navigation state for the site header.
//!
//! The types here model what the header shows and how it reacts to input:
//! the link list and its visibility rules, the authentication snapshot it is
//! given, the persisted theme, and the [`NavigationHeader`] container that
//! ties them together. Rendering lives in `components::header`.

mod auth;
mod header;
mod items;
mod theme;

pub use auth::{AuthContext, CurrentUser, LogoutHandler};
pub use header::{NavigationHeader, Origin};
pub use items::{IconRef, LOGIN_ITEM, NAVIGATION_ITEMS, NavEntry, NavigationItem, Visibility};
#[cfg(feature = "hydrate")]
pub use theme::{DocumentThemeApplier, LocalStorageThemeStore};
pub use theme::{
    DARK_CLASS, MemoryThemeStore, NoopThemeApplier, PlatformThemeApplier, PlatformThemeStore,
    StorageError, THEME_STORAGE_KEY, Theme, ThemeApplier, ThemeStore,
};
#[cfg(test)]
pub use theme::{MockThemeApplier, MockThemeStore};

/// Routing capability used when a navigation item is selected.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}
