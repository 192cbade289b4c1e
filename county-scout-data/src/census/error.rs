//! Census decoding and source construction errors.

use thiserror::Error;

/// Errors raised while decoding a census table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table had no header row.
    #[error("census table is empty")]
    Empty,
    /// A required header column was absent.
    #[error("census table is missing the {column} column")]
    MissingColumn {
        /// Variable code of the missing column.
        column: String,
    },
}

/// Errors raised while building an [`HttpCensusSource`](super::HttpCensusSource).
#[derive(Debug, Error)]
pub enum CensusSourceBuildError {
    /// The base URL could not be parsed.
    #[error("invalid census base URL {url}: {source}")]
    BaseUrl {
        /// Rejected URL.
        url: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
