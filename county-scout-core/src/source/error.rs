use thiserror::Error;

/// Errors from [`crate::source::CountySource::fetch_counties`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountySourceError {
    /// The state identifier could not be resolved.
    #[error("unknown state '{state}'")]
    UnknownState {
        /// Identifier supplied by the caller.
        state: String,
    },

    /// The request timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL, with any API key redacted.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },

    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Request URL, with any API key redacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error details.
        message: String,
    },

    /// A network-level failure occurred (DNS, connection refused, etc.).
    #[error("network error for {url}: {message}")]
    Network {
        /// Request URL, with any API key redacted.
        url: String,
        /// Error details.
        message: String,
    },

    /// The payload could not be decoded into county records.
    #[error("malformed county payload: {message}")]
    Malformed {
        /// Decoding details.
        message: String,
    },
}
