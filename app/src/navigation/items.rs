use super::AuthContext;

/// Opaque handle naming an icon. The rendering layer decides what glyph a
/// handle maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const HOME: Self = Self("home");
    pub const POSTS: Self = Self("posts");
    pub const ABOUT: Self = Self("about");
    pub const ADMIN: Self = Self("admin");
    pub const LOGIN: Self = Self("login");

    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Who gets to see a navigation item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    AdminOnly,
    AnonymousOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconRef,
    pub visibility: Visibility,
}

impl NavigationItem {
    #[must_use]
    pub const fn public(label: &'static str, path: &'static str, icon: IconRef) -> Self {
        Self {
            label,
            path,
            icon,
            visibility: Visibility::Public,
        }
    }

    #[must_use]
    pub const fn admin(label: &'static str, path: &'static str, icon: IconRef) -> Self {
        Self {
            label,
            path,
            icon,
            visibility: Visibility::AdminOnly,
        }
    }

    #[must_use]
    pub const fn visible_when(&self, auth: &AuthContext) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::AdminOnly => auth.is_authenticated,
            Visibility::AnonymousOnly => !auth.is_authenticated,
        }
    }

    /// Exact string comparison against the current path. No prefix matching
    /// and no trailing-slash normalization.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// The header's links, in display order.
pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem::public("Home", "/", IconRef::HOME),
    NavigationItem::public("Posts", "/posts", IconRef::POSTS),
    NavigationItem::public("About", "/about", IconRef::ABOUT),
    NavigationItem::admin("Admin", "/admin", IconRef::ADMIN),
];

/// Sign-in link shown in the auth controls to anonymous visitors.
pub const LOGIN_ITEM: NavigationItem = NavigationItem {
    label: "Login",
    path: "/login",
    icon: IconRef::LOGIN,
    visibility: Visibility::AnonymousOnly,
};

/// A visible item together with its highlight state for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: NavigationItem,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_predicate() {
        let anonymous = AuthContext::anonymous();
        let signed_in = AuthContext::authenticated(None);

        let home = NAVIGATION_ITEMS[0];
        assert!(home.visible_when(&anonymous));
        assert!(home.visible_when(&signed_in));

        let admin = NAVIGATION_ITEMS[3];
        assert!(!admin.visible_when(&anonymous));
        assert!(admin.visible_when(&signed_in));

        assert!(LOGIN_ITEM.visible_when(&anonymous));
        assert!(!LOGIN_ITEM.visible_when(&signed_in));
    }

    #[test]
    fn test_is_active_is_exact() {
        let posts = NavigationItem::public("Posts", "/posts", IconRef::POSTS);
        assert!(posts.is_active("/posts"));
        assert!(!posts.is_active("/posts/"));
        assert!(!posts.is_active("/posts/1"));
        assert!(!posts.is_active("/Posts"));
        assert!(!posts.is_active(""));
    }

    #[test]
    fn test_exactly_one_admin_item() {
        let admins = NAVIGATION_ITEMS
            .iter()
            .filter(|item| item.visibility == Visibility::AdminOnly)
            .count();
        assert_eq!(admins, 1);
    }
}
