//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. Its `IntoResponse`
//! implementation is the single place failures are logged and mapped onto a status code
//! with a `{ "message": ... }` body.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so handlers and services can
/// propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// `RecordNotFound` and `RecordNotUpdated` result in 404 Not Found, every other
    /// database error in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Request failed schema validation.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Binding the listener or serving connections failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_)
            | Self::DbErr(DbErr::RecordNotFound(_))
            | Self::DbErr(DbErr::RecordNotUpdated) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationError::Body(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(ValidationError::Query(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// Every error is logged, client errors at warn level and server errors at error level.
/// Client errors are answered with their message; server errors only with a generic one
/// so driver details stay in the logs.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound` and missing database records
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            return InternalServerError(self).into_response();
        }

        tracing::warn!(status = status.as_u16(), "{}", self);

        (
            status,
            Json(ErrorDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message. Used for server-side `AppError`s and for
/// failures that never reached a handler's `Result`, such as panics caught by the router.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
