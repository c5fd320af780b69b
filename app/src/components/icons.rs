//! Resolves navigation icon handles to `icondata` glyphs and renders them as
//! inline SVG.

use icondata::Icon;
use leptos::prelude::*;

use crate::navigation::IconRef;

/// Maps a navigation icon handle to its glyph. Unknown handles render as a dot.
#[must_use]
pub fn resolve(icon: IconRef) -> Icon {
    match icon {
        IconRef::HOME => icondata::BsHouse,
        IconRef::POSTS => icondata::BsJournalText,
        IconRef::ABOUT => icondata::BsInfoCircle,
        IconRef::ADMIN => icondata::BsShieldLock,
        IconRef::LOGIN => icondata::BsBoxArrowInRight,
        _ => icondata::BsDot,
    }
}

pub fn svg_icon(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox=icon.view_box
            fill="currentColor"
            aria-hidden="true"
            inner_html=icon.data
        ></svg>
    }
}

pub fn nav_icon(icon: IconRef) -> impl IntoView {
    svg_icon(resolve(icon), "size-4")
}
