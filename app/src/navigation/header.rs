//! The header's state container.
//!
//! `NavigationHeader` owns the theme, mobile menu and search visibility, and
//! derives the rendered link set from the auth context and current path it is
//! handed on every render. It has no knowledge of Leptos; the component in
//! `components::header` drives it through a reactive signal.

use tracing::{debug, warn};

use super::{
    AuthContext, NAVIGATION_ITEMS, NavEntry, NavigationItem, Navigator, THEME_STORAGE_KEY, Theme,
    ThemeApplier, ThemeStore,
};

/// Where a navigation or logout action was triggered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The inline navigation bar shown on wide screens.
    Desktop,
    /// The collapsible drawer shown on narrow screens.
    Mobile,
}

#[derive(Debug)]
pub struct NavigationHeader<S, A> {
    store: S,
    applier: A,
    items: Vec<NavigationItem>,
    theme: Theme,
    menu_open: bool,
    search_open: bool,
}

impl<S: ThemeStore, A: ThemeApplier> NavigationHeader<S, A> {
    /// Mounts the header with the default navigation items.
    ///
    /// The stored theme is resolved and applied before this returns, so the
    /// first render already sees the correct document flag.
    pub fn mount(store: S, applier: A) -> Self {
        Self::with_items(store, applier, NAVIGATION_ITEMS.to_vec())
    }

    pub fn with_items(store: S, applier: A, items: Vec<NavigationItem>) -> Self {
        let theme = read_theme(&store);
        applier.apply(theme);
        debug!(?theme, "navigation header mounted");

        Self {
            store,
            applier,
            items,
            theme,
            menu_open: false,
            search_open: false,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub const fn is_search_open(&self) -> bool {
        self.search_open
    }

    #[must_use]
    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Flips the theme, persists it, and applies it. Returns the new theme.
    ///
    /// A failed write is logged; the new theme is still shown.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, self.theme.as_stored()) {
            warn!(error = %err, theme = ?self.theme, "failed to persist theme preference");
        }
        self.applier.apply(self.theme);
        debug!(theme = ?self.theme, "theme toggled");
        self.theme
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn toggle_search(&mut self) -> bool {
        self.search_open = !self.search_open;
        self.search_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.menu_open = false;
    }

    /// Local state change that accompanies leaving via a link or logout:
    /// actions from the mobile drawer close it, desktop actions change nothing.
    pub fn dismiss(&mut self, origin: Origin) {
        if origin == Origin::Mobile {
            self.close_mobile_menu();
        }
    }

    /// Navigates to `item.path`. Selections from the mobile drawer also close it.
    pub fn select_navigation_item<N>(&mut self, item: &NavigationItem, origin: Origin, navigator: &N)
    where
        N: Navigator + ?Sized,
    {
        debug!(path = item.path, ?origin, "navigation item selected");
        self.dismiss(origin);
        navigator.navigate(item.path);
    }

    /// Hands logout to the auth context's callback, if it supplied one.
    pub fn logout(&mut self, auth: &AuthContext, origin: Origin) {
        self.dismiss(origin);
        auth.request_logout();
    }

    /// Items the given auth state may see, in declaration order.
    pub fn visible_items<'a>(
        &'a self,
        auth: &'a AuthContext,
    ) -> impl Iterator<Item = &'a NavigationItem> + 'a {
        self.items.iter().filter(move |item| item.visible_when(auth))
    }

    /// The rendered link set for one pass: visible items and whether each
    /// matches `current_path`.
    #[must_use]
    pub fn entries(&self, auth: &AuthContext, current_path: &str) -> Vec<NavEntry> {
        self.visible_items(auth)
            .map(|item| NavEntry {
                item: *item,
                active: item.is_active(current_path),
            })
            .collect()
    }
}

fn read_theme<S: ThemeStore>(store: &S) -> Theme {
    match store.get(THEME_STORAGE_KEY) {
        Ok(Some(value)) => Theme::from_stored(&value).unwrap_or_else(|| {
            warn!(value, "unrecognized stored theme; using light");
            Theme::Light
        }),
        Ok(None) => Theme::Light,
        Err(err) => {
            warn!(error = %err, "could not read stored theme; using light");
            Theme::Light
        }
    }
}
