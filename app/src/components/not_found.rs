//! Router fallback for paths the site does not serve.
//!
//! On the server it also sets the response status so crawlers and caches see
//! a real 404 rather than a 200 with an error body.

use http::status::StatusCode;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

pub fn component() -> impl IntoView {
    let error = AppError::NotFound;

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(error.status_code());
    }

    let heading = format!("{}| {error}", error.status_code().as_u16());
    view! {
        <div class="grid place-content-center px-4 h-full antialiased">
            <h1 class="text-xl tracking-widest text-center text-gray-400 uppercase">{heading}</h1>
            <a href="/" class="mt-6 text-center duration-200 hover:text-[#68b5fc]">"Go back home"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }
}
