//! Error types for the todo API client.
//!
//! `NotFound` and `BadRequest` get dedicated variants because they are the
//! two failures the server reports on purpose. Any other unexpected status
//! lands in `HttpError` with the raw status and body.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: no todo carries the requested id.
    #[error("todo not found")]
    NotFound,

    /// The server returned 400 and rejected the request body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
