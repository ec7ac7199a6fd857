//! Request decoding errors.

/// Failure to turn a request body into a pairing request.
///
/// Both variants display the underlying message unchanged; it is sent back to
/// the client as the `400` body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body stream could not be read (I/O failure or size limit).
    #[error(transparent)]
    Read(#[from] axum::Error),

    /// The body is not JSON, or not the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
