//! JSON response writer.
//!
//! Handlers produce their response through [`JsonWriter`] instead of building
//! an axum [`Response`] themselves. The writer is consumed by
//! [`JsonWriter::write_json`], so a handler can answer at most once.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serializes a value as a JSON response with the given status.
pub trait JsonWriter {
    /// What writing produces (an axum [`Response`] for [`AxumJsonWriter`]).
    type Output;

    /// Set `content-type: application/json`, the status, and the body.
    fn write_json<T>(self, status: StatusCode, value: &T) -> Self::Output
    where
        T: Serialize + ?Sized;
}

/// [`JsonWriter`] producing an axum [`Response`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AxumJsonWriter;

impl JsonWriter for AxumJsonWriter {
    type Output = Response;

    fn write_json<T>(self, status: StatusCode, value: &T) -> Response
    where
        T: Serialize + ?Sized,
    {
        (status, Json(value)).into_response()
    }
}
