//! Reusable UI components: the site header, icon rendering, and the
//! not-found view used as the router fallback.

pub mod header;
pub mod icons;
pub mod not_found;
