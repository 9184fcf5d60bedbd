//! Error types for the client crate.

/// Errors surfaced by [`crate::OrdersClient`] calls.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request never produced an HTTP response, or the response body
    /// could not be decoded as the expected type.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `message` is taken from the body's `message` field when present,
    /// otherwise the raw body text.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}
