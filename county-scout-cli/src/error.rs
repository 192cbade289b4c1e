//! Error types emitted by the county-scout CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use county_scout_core::CountySourceError;
use county_scout_data::{CensusSourceBuildError, InputError};
use county_scout_ranker::RankingError;
use thiserror::Error;

/// Errors emitted by the county-scout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Neither a counties file nor a state to fetch was given.
    #[error("no county input: pass a {file} file or set --{state}")]
    MissingCountyInput {
        /// Name of the file argument.
        file: &'static str,
        /// Flag naming the state to fetch.
        state: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// Reading an input file failed.
    #[error("failed to read {path:?}: {source}")]
    ReadInput {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A counties file could not be decoded.
    #[error("failed to parse counties in {path:?}: {source}")]
    ParseCounties {
        /// File being decoded.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: InputError,
    },
    /// A shortlist file could not be decoded.
    #[error("failed to parse shortlist in {path:?}: {source}")]
    ParseShortlist {
        /// File being decoded.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the census source failed.
    #[error("failed to build census source for {base_url:?}: {source}")]
    BuildCensusSource {
        /// Configured census endpoint.
        base_url: String,
        /// Construction failure.
        #[source]
        source: CensusSourceBuildError,
    },
    /// Fetching live county data failed.
    #[error("failed to fetch counties for {state}: {source}")]
    FetchCounties {
        /// State that was requested.
        state: String,
        /// Source failure.
        #[source]
        source: CountySourceError,
    },
    /// The ranking inputs were rejected.
    #[error(transparent)]
    Ranking(#[from] RankingError),
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the report's parent directory failed.
    #[error("failed to create directory for {path:?}: {source}")]
    CreateOutputDirectory {
        /// Report destination.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}
