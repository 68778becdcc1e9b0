/// Error types for backend fetches
use thiserror::Error;

/// Failure modes of a single backend request.
///
/// An empty result set is not an error; callers render a "no data" state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS, aborted)
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expected
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
