//! Extractors whose rejections are reported through `AppError`.
//!
//! Axum's own `Json` and `Query` extractors answer malformed input with plain-text
//! bodies and 422 statuses. These wrappers turn the rejection into a schema validation
//! error so clients always get a 400 with a `{ "message": ... }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body parsed into `T`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string parsed into `T`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
