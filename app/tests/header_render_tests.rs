//! Server-side rendering of the header: what an anonymous or signed-in
//! request actually receives in its HTML.
#![cfg(feature = "ssr")]

use blog_ui::{
    components::header,
    navigation::{
        AuthContext, CurrentUser, MemoryThemeStore, NavigationHeader, NoopThemeApplier,
        THEME_STORAGE_KEY,
    },
};
use leptos::prelude::*;

struct RenderOptions {
    auth: AuthContext,
    path: &'static str,
    menu_open: bool,
    stored_theme: Option<&'static str>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            auth: AuthContext::anonymous(),
            path: "/",
            menu_open: false,
            stored_theme: None,
        }
    }
}

fn render_html(options: RenderOptions) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let store = options.stored_theme.map_or_else(MemoryThemeStore::new, |value| {
            MemoryThemeStore::with_entry(THEME_STORAGE_KEY, value)
        });
        let mut state = NavigationHeader::mount(store, NoopThemeApplier);
        if options.menu_open {
            state.toggle_mobile_menu();
        }

        header::render(
            RwSignal::new(state),
            Signal::stored(options.auth),
            Signal::stored(options.path.to_owned()),
            |_: &str| {},
        )
        .to_html()
    })
}

/// Opening `<a ...>` tags whose href is exactly `href`.
fn anchor_tags<'a>(html: &'a str, href: &str) -> Vec<&'a str> {
    let needle = format!("href=\"{href}\"");
    html.match_indices("<a ")
        .filter_map(|(start, _)| {
            let end = start + html[start..].find('>')?;
            let tag = &html[start..=end];
            tag.contains(&needle).then_some(tag)
        })
        .collect()
}

#[cfg(test)]
mod header_render_tests {
    use super::*;

    #[test]
    fn test_anonymous_html_has_no_admin_link() {
        let html = render_html(RenderOptions {
            menu_open: true,
            ..RenderOptions::default()
        });

        assert!(anchor_tags(&html, "/admin").is_empty());
        assert!(!html.contains("/admin"));
        assert!(!anchor_tags(&html, "/login").is_empty());
    }

    #[test]
    fn test_authenticated_html_has_one_admin_link_per_nav() {
        let auth = AuthContext::authenticated(Some(CurrentUser::new("alex")));

        let closed = render_html(RenderOptions {
            auth: auth.clone(),
            ..RenderOptions::default()
        });
        assert_eq!(anchor_tags(&closed, "/admin").len(), 1);
        assert!(closed.contains("alex"));
        assert!(closed.contains("Logout"));
        assert!(anchor_tags(&closed, "/login").is_empty());

        let open = render_html(RenderOptions {
            auth,
            menu_open: true,
            ..RenderOptions::default()
        });
        assert_eq!(anchor_tags(&open, "/admin").len(), 2);
    }

    #[test]
    fn test_only_exact_path_is_marked_current() {
        let html = render_html(RenderOptions {
            path: "/posts",
            ..RenderOptions::default()
        });

        let posts = anchor_tags(&html, "/posts");
        assert_eq!(posts.len(), 1);
        assert!(posts[0].contains("aria-current=\"page\""));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);

        let nested = render_html(RenderOptions {
            path: "/posts/1",
            ..RenderOptions::default()
        });
        assert!(!nested.contains("aria-current=\"page\""));
    }

    #[test]
    fn test_mobile_drawer_only_rendered_when_open() {
        let closed = render_html(RenderOptions::default());
        assert!(!closed.contains("aria-label=\"Mobile\""));
        assert_eq!(anchor_tags(&closed, "/about").len(), 1);

        let open = render_html(RenderOptions {
            menu_open: true,
            ..RenderOptions::default()
        });
        assert!(open.contains("aria-label=\"Mobile\""));
        assert_eq!(anchor_tags(&open, "/about").len(), 2);
    }

    #[test]
    fn test_theme_toggle_markup_ignores_stored_theme() {
        // Hydration keeps server-rendered attributes, so the markup must not
        // depend on state the server cannot see.
        let light = render_html(RenderOptions::default());
        let dark = render_html(RenderOptions {
            stored_theme: Some("true"),
            ..RenderOptions::default()
        });
        assert_eq!(light, dark);

        assert!(dark.contains("Switch to dark mode"));
        assert!(dark.contains("aria-pressed=\"false\""));
    }

    #[test]
    fn test_theme_glyphs_follow_document_class() {
        let html = render_html(RenderOptions {
            stored_theme: Some("true"),
            ..RenderOptions::default()
        });
        assert!(html.contains("class=\"dark:hidden\""));
        assert!(html.contains("class=\"hidden dark:inline\""));
    }

    #[test]
    fn test_search_input_hidden_until_toggled() {
        let html = render_html(RenderOptions::default());
        assert!(!html.contains("type=\"search\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }
}
