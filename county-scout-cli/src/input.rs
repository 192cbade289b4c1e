//! County inputs: offline files or live census fetches.

use std::cell::OnceCell;

use camino::{Utf8Path, Utf8PathBuf};
use county_scout_core::{CountyRecord, CountySource};
use county_scout_data::{HttpCensusSource, parse_counties, resolve_state};
use log::info;

use crate::{CliError, fs, options::CensusOptions};

/// Where one state's counties come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CountyInput {
    /// A local census table or county-row JSON file.
    File {
        /// File to read.
        path: Utf8PathBuf,
        /// Name reported for the state.
        label: String,
    },
    /// A live census fetch.
    Census {
        /// Canonical state name, or the text given when unrecognised.
        state: String,
    },
}

impl CountyInput {
    /// Choose the input from an optional file and optional state.
    ///
    /// A file wins when both are present; the state then only names the
    /// report.
    pub(crate) fn resolve(
        file: Option<Utf8PathBuf>,
        state: Option<String>,
        file_field: &'static str,
        state_field: &'static str,
    ) -> Result<Self, CliError> {
        let state = state.map(|text| canonical_state(&text));
        match (file, state) {
            (Some(path), state) => {
                let label = state.unwrap_or_else(|| {
                    path.file_stem().unwrap_or(path.as_str()).to_owned()
                });
                Ok(Self::File { path, label })
            }
            (None, Some(state)) => Ok(Self::Census { state }),
            (None, None) => Err(CliError::MissingCountyInput {
                file: file_field,
                state: state_field,
            }),
        }
    }

    /// Name reported for the state.
    pub(crate) fn label(&self) -> &str {
        match self {
            Self::File { label, .. } => label,
            Self::Census { state } => state,
        }
    }

    pub(crate) fn validate_sources(&self, field: &'static str) -> Result<(), CliError> {
        match self {
            Self::File { path, .. } => require_file(path, field),
            Self::Census { .. } => Ok(()),
        }
    }
}

fn canonical_state(text: &str) -> String {
    resolve_state(text).map_or_else(|| text.trim().to_owned(), |state| state.name.to_owned())
}

/// Read county records from a local JSON file.
pub(crate) fn read_counties(path: &Utf8Path) -> Result<Vec<CountyRecord>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let counties = parse_counties(&text).map_err(|source| CliError::ParseCounties {
        path: path.to_path_buf(),
        source,
    })?;
    info!("read {} counties from {path}", counties.len());
    Ok(counties)
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builds the live county source for a command invocation.
pub(crate) trait CountySourceBuilder {
    fn build(&self, census: &CensusOptions) -> Result<Box<dyn CountySource>, CliError>;
}

/// Builds an [`HttpCensusSource`] against the configured census API.
pub(crate) struct HttpCensusSourceBuilder;

impl CountySourceBuilder for HttpCensusSourceBuilder {
    fn build(&self, census: &CensusOptions) -> Result<Box<dyn CountySource>, CliError> {
        let source = HttpCensusSource::with_config(census.source_config()).map_err(|source| {
            CliError::BuildCensusSource {
                base_url: census.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(source))
    }
}

/// Loads county inputs, building the live source on first use.
pub(crate) struct CountyLoader<'a> {
    census: &'a CensusOptions,
    builder: &'a dyn CountySourceBuilder,
    source: OnceCell<Box<dyn CountySource>>,
}

impl<'a> CountyLoader<'a> {
    pub(crate) fn new(census: &'a CensusOptions, builder: &'a dyn CountySourceBuilder) -> Self {
        Self {
            census,
            builder,
            source: OnceCell::new(),
        }
    }

    /// Load the counties named by `input`.
    pub(crate) fn load(&self, input: &CountyInput) -> Result<Vec<CountyRecord>, CliError> {
        match input {
            CountyInput::File { path, .. } => read_counties(path),
            CountyInput::Census { state } => self
                .source()?
                .fetch_counties(state)
                .map_err(|source| CliError::FetchCounties {
                    state: state.clone(),
                    source,
                }),
        }
    }

    fn source(&self) -> Result<&dyn CountySource, CliError> {
        if let Some(source) = self.source.get() {
            return Ok(source.as_ref());
        }
        let built = self.builder.build(self.census)?;
        Ok(self.source.get_or_init(|| built).as_ref())
    }
}
