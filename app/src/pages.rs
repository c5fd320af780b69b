//! Route views behind the header's links.
//!
//! Content is served elsewhere; these views only give each navigation target a
//! page of its own. The admin view re-checks the auth context so the route is
//! indistinguishable from an unknown path for anonymous visitors.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{header::use_auth, not_found};

fn page(title: &'static str, summary: &'static str) -> impl IntoView {
    view! {
        <Title text=title/>
        <section class="flex flex-col gap-4">
            <h1 class="text-3xl font-bold text-[#ffef5c]">{title}</h1>
            <p class="text-gray-600 dark:text-gray-300">{summary}</p>
        </section>
    }
}

pub fn home() -> impl IntoView {
    page("blog", "Notes on Rust, systems, and the web.")
}

pub fn posts() -> impl IntoView {
    page("Posts", "Everything published so far, newest first.")
}

pub fn about() -> impl IntoView {
    page("About", "Who writes here and why.")
}

pub fn login() -> impl IntoView {
    page("Login", "Sign in to manage posts.")
}

pub fn admin() -> impl IntoView {
    let auth = use_auth();
    move || {
        if auth.with(|auth| auth.is_authenticated) {
            page("Admin", "Drafts, publishing, and site settings.").into_any()
        } else {
            not_found::component().into_any()
        }
    }
}
