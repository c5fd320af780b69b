//! Server-rendered, hydrated blog front end built around its navigation header.

use crate::{
    components::{header, not_found},
    navigation::{DARK_CLASS, THEME_STORAGE_KEY},
};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod navigation;
mod pages;

/// Inline script that applies the stored dark theme before first paint, ahead
/// of hydration.
#[must_use]
pub fn theme_bootstrap_script() -> String {
    format!(
        "try{{if(window.localStorage.getItem('{THEME_STORAGE_KEY}')==='true'){{document.documentElement.classList.add('{DARK_CLASS}')}}}}catch(_){{}}"
    )
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            view! { <script inner_html=theme_bootstrap_script()></script> },
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/blog.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("blog").build()),
        )),
        body()
            .class("text-gray-900 bg-white dark:text-white dark:bg-[#1e1e1e]")
            .child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto min-h-screen font-poppins">
                {header::component()}
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto mt-16 max-w-4xl md:px-0">
                    <FlatRoutes fallback=not_found::component>
                        <Route path=StaticSegment("") view=pages::home/>
                        <Route path=StaticSegment("posts") view=pages::posts/>
                        <Route path=StaticSegment("about") view=pages::about/>
                        <Route path=StaticSegment("login") view=pages::login/>
                        <Route path=StaticSegment("admin") view=pages::admin/>
                    </FlatRoutes>
                </main>
            </div>
        </Router>
    }
}
