use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, views};

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    NotFound,
    Input(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message_key) = match self {
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "error.internal"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "error.not_found"),
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "error.bad_request"),
        };

        (code, error_page(message_key)).into_response()
    }
}

fn error_page(message_key: &str) -> Markup {
    // Locale extraction already happened in the handler; errors fall back to
    // the default locale.
    let locale = names::DEFAULT_LOCALE;
    views::page(
        "Error",
        html! {
            h1 { (t!(message_key, locale = locale)) }
        },
        locale,
    )
}

pub trait ResultExt<T> {
    /// Log the underlying error and turn it into an opaque 500.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}
