//! Site header: navigation links, auth controls, theme and search toggles,
//! and the mobile drawer.
//!
//! All state lives in a [`NavigationHeader`] held in a reactive signal; this
//! module only wires DOM events to its operations and renders what it derives.
//! Links are plain anchors so the server-rendered page works before hydration;
//! once hydrated, clicks are routed through the client-side router.

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

use crate::{
    components::icons,
    navigation::{
        AuthContext, LOGIN_ITEM, NavEntry, NavigationHeader, NavigationItem, Navigator, Origin,
        PlatformThemeApplier, PlatformThemeStore, Theme, ThemeApplier, ThemeStore,
    },
};

const LINK_CLASS: &str = "flex flex-row gap-2 items-center text-lg font-bold transition-all duration-500 hover:text-[#ffef5c]";
const ACTIVE_LINK_CLASS: &str = "flex flex-row gap-2 items-center text-lg font-bold transition-all duration-500 text-[#ffef5c] underline";
const BUTTON_CLASS: &str = "p-2 rounded-lg transition-all duration-500 hover:text-[#ffef5c]";

/// Reads the auth context supplied by the surrounding application, treating
/// a missing context as an anonymous visitor.
#[must_use]
pub fn use_auth() -> Signal<AuthContext> {
    use_context::<Signal<AuthContext>>().unwrap_or_else(|| Signal::stored(AuthContext::anonymous()))
}

/// Mounts the header against the router and the platform's theme storage.
pub fn component() -> impl IntoView {
    let auth = use_auth();
    let current_path: Signal<String> = use_location().pathname.into();
    let navigate = use_navigate();
    let navigator = move |path: &str| navigate(path, NavigateOptions::default());
    let header = RwSignal::new(NavigationHeader::mount(
        PlatformThemeStore::default(),
        PlatformThemeApplier::default(),
    ));

    render(header, auth, current_path, navigator)
}

/// Renders the header for an already mounted [`NavigationHeader`].
pub fn render<S, A, N>(
    header: RwSignal<NavigationHeader<S, A>>,
    auth: Signal<AuthContext>,
    current_path: Signal<String>,
    navigator: N,
) -> impl IntoView
where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
    N: Navigator + Clone + Send + Sync + 'static,
{
    let entries = Memo::new(move |_| {
        let path = current_path.get();
        auth.with(|auth| header.with(|header| header.entries(auth, &path)))
    });
    // The server renders without theme storage, so the first hydration pass
    // must describe the default theme too. The effect only runs in the
    // browser, after hydration, and then switches to the real one.
    let settled = RwSignal::new(false);
    Effect::new(move |_| settled.set(true));
    let theme = Memo::new(move |_| {
        if settled.get() {
            header.with(NavigationHeader::theme)
        } else {
            Theme::default()
        }
    });
    let menu_open = Memo::new(move |_| header.with(NavigationHeader::is_menu_open));
    let search_open = Memo::new(move |_| header.with(NavigationHeader::is_search_open));

    let desktop_links = nav_links(entries, Origin::Desktop, header, navigator.clone());
    let desktop_auth = auth_controls(auth, current_path, Origin::Desktop, header, navigator.clone());
    let mobile_navigator = navigator;

    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-4 px-4 md:px-6 bg-white/80 dark:bg-[#1e1e1e]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-5xl">
                <div class="flex flex-row justify-between items-center text-gray-900 dark:text-white">
                    <nav class="hidden flex-row gap-4 md:flex" aria-label="Main">
                        {desktop_links}
                    </nav>
                    <div class="flex flex-row gap-2 items-center">
                        <button
                            type="button"
                            class=BUTTON_CLASS
                            aria-label="Toggle search"
                            aria-expanded=move || search_open.get().to_string()
                            on:click=move |_| {
                                header.update(|header| {
                                    header.toggle_search();
                                });
                            }
                        >
                            {icons::svg_icon(icondata::BsSearch, "size-5")}
                        </button>
                        {theme_toggle(header, theme)}
                        <div class="hidden md:flex">{desktop_auth}</div>
                        <button
                            type="button"
                            class=format!("{BUTTON_CLASS} md:hidden")
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| {
                                header.update(|header| {
                                    header.toggle_mobile_menu();
                                });
                            }
                        >
                            <span class:hidden=move || menu_open.get()>
                                {icons::svg_icon(icondata::BsList, "size-6")}
                            </span>
                            <span class:hidden=move || !menu_open.get()>
                                {icons::svg_icon(icondata::BsXLg, "size-6")}
                            </span>
                        </button>
                    </div>
                </div>
                <Show when=move || search_open.get()>
                    <div class="mt-3">
                        <input
                            type="search"
                            name="q"
                            placeholder="Search posts..."
                            aria-label="Search posts"
                            class="py-2 px-4 w-full placeholder-gray-400 rounded-lg focus:ring-2 focus:outline-none bg-gray-100 dark:bg-[#2a2a2a] focus:ring-[#ffef5c]"
                        />
                    </div>
                </Show>
                <Show when=move || menu_open.get()>
                    <nav class="flex flex-col gap-3 pt-4 mt-4 border-t md:hidden border-gray-300 dark:border-gray-700" aria-label="Mobile">
                        {nav_links(entries, Origin::Mobile, header, mobile_navigator.clone())}
                        {auth_controls(auth, current_path, Origin::Mobile, header, mobile_navigator.clone())}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

fn theme_toggle<S, A>(header: RwSignal<NavigationHeader<S, A>>, theme: Memo<Theme>) -> impl IntoView
where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
{
    view! {
        <button
            type="button"
            class=BUTTON_CLASS
            aria-label=move || theme.get().toggle_label()
            aria-pressed=move || theme.get().is_dark().to_string()
            on:click=move |_| {
                header.update(|header| {
                    header.toggle_theme();
                });
            }
        >
            // Glyphs follow the document's `dark` class, which is set before
            // first paint, rather than header state.
            <span class="dark:hidden">{icons::svg_icon(icondata::BsMoon, "size-5")}</span>
            <span class="hidden dark:inline">{icons::svg_icon(icondata::BsSun, "size-5")}</span>
        </button>
    }
}

fn nav_links<S, A, N>(
    entries: Memo<Vec<NavEntry>>,
    origin: Origin,
    header: RwSignal<NavigationHeader<S, A>>,
    navigator: N,
) -> impl IntoView
where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
    N: Navigator + Clone + Send + Sync + 'static,
{
    move || {
        entries
            .get()
            .into_iter()
            .map(|entry| nav_link(entry, origin, header, navigator.clone()))
            .collect_view()
    }
}

fn nav_link<S, A, N>(
    entry: NavEntry,
    origin: Origin,
    header: RwSignal<NavigationHeader<S, A>>,
    navigator: N,
) -> impl IntoView
where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
    N: Navigator + Clone + Send + Sync + 'static,
{
    let NavEntry { item, active } = entry;
    let class = if active { ACTIVE_LINK_CLASS } else { LINK_CLASS };

    view! {
        <a
            href=item.path
            class=class
            aria-current=active.then_some("page")
            on:click=move |event| {
                event.prevent_default();
                follow_link(header, &item, origin, &navigator);
            }
        >
            {icons::nav_icon(item.icon)}
            <span>{item.label}</span>
        </a>
    }
}

/// Updates header state, then navigates once the signal is released, so the
/// router and anything it triggers may read the header.
fn follow_link<S, A, N>(
    header: RwSignal<NavigationHeader<S, A>>,
    item: &NavigationItem,
    origin: Origin,
    navigator: &N,
) where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
    N: Navigator + ?Sized,
{
    tracing::debug!(path = item.path, ?origin, "navigation item selected");
    header.update(|header| header.dismiss(origin));
    navigator.navigate(item.path);
}

/// Like [`follow_link`], the logout callback runs outside the header update.
fn request_logout<S, A>(header: RwSignal<NavigationHeader<S, A>>, auth: &AuthContext, origin: Origin)
where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
{
    header.update(|header| header.dismiss(origin));
    auth.request_logout();
}

fn auth_controls<S, A, N>(
    auth: Signal<AuthContext>,
    current_path: Signal<String>,
    origin: Origin,
    header: RwSignal<NavigationHeader<S, A>>,
    navigator: N,
) -> impl IntoView
where
    S: ThemeStore + Send + Sync + 'static,
    A: ThemeApplier + Send + Sync + 'static,
    N: Navigator + Clone + Send + Sync + 'static,
{
    move || {
        if !auth.with(|auth| auth.is_authenticated) {
            let entry = NavEntry {
                item: LOGIN_ITEM,
                active: current_path.with(|path| LOGIN_ITEM.is_active(path)),
            };
            return nav_link(entry, origin, header, navigator.clone()).into_any();
        }

        let username = auth.with(|auth| auth.username().map(str::to_owned));
        view! {
            <div class="flex flex-row gap-3 items-center">
                {username.map(|name| view! { <span class="text-sm font-semibold">{name}</span> })}
                <button
                    type="button"
                    class=LINK_CLASS
                    on:click=move |_| request_logout(header, &auth.get_untracked(), origin)
                >
                    {icons::svg_icon(icondata::BsBoxArrowRight, "size-4")}
                    <span>"Logout"</span>
                </button>
            </div>
        }
        .into_any()
    }
}
