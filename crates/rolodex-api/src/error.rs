use thiserror::Error;

/// Errors that can occur when talking to the directory endpoint
#[derive(Error, Debug)]
pub enum Error {
    /// A transport-level failure from the HTTP client
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The response body, as far as it could be read
        body: String,
    },

    /// The response body could not be decoded as a user collection
    #[error("failed to decode user listing: {0}")]
    Decode(String),

    /// The configured endpoint is not a usable URL
    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint {
        /// The rejected URL text
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, Error>;
