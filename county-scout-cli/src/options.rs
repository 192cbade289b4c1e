//! Ranking and census options shared by the `rank` and `compare` commands.

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use county_scout_core::UserPriorityProfile;
use county_scout_data::{DEFAULT_CENSUS_BASE_URL, DEFAULT_DATASET_YEAR, HttpCensusSourceConfig};
use county_scout_ranker::{CuratedShortlist, RankingConfig, RankingService};
use log::debug;

use crate::{ARG_SHORTLIST, CliError, fs, input::require_file};

/// Census API settings used when a state is fetched live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CensusOptions {
    /// Census API endpoint.
    pub(crate) base_url: String,
    /// Optional API key.
    pub(crate) api_key: Option<String>,
    /// ACS 5-year vintage.
    pub(crate) year: u16,
    /// Request timeout in seconds.
    pub(crate) timeout_secs: Option<u64>,
}

impl CensusOptions {
    pub(crate) fn new(
        base_url: Option<String>,
        api_key: Option<String>,
        year: Option<u16>,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_CENSUS_BASE_URL.to_owned()),
            api_key,
            year: year.unwrap_or(DEFAULT_DATASET_YEAR),
            timeout_secs,
        }
    }

    pub(crate) fn source_config(&self) -> HttpCensusSourceConfig {
        let mut config = HttpCensusSourceConfig::new(self.base_url.clone()).with_year(self.year);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Budget, priorities, and report settings for one ranking run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankingOptions {
    /// Home-buying budget in USD.
    pub(crate) budget: f64,
    /// Free-text buyer preferences.
    pub(crate) preferences: String,
    /// Maximum counties per report.
    pub(crate) max_results: Option<usize>,
    /// Curated shortlist JSON file.
    pub(crate) shortlist: Option<Utf8PathBuf>,
    /// Report destination; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankingOptions {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.shortlist
            .as_deref()
            .map_or(Ok(()), |path| require_file(path, ARG_SHORTLIST))
    }

    /// Build the ranking service these options describe.
    pub(crate) fn service(&self) -> Result<RankingService, CliError> {
        let profile = UserPriorityProfile::parse(&self.preferences);
        debug!("parsed preferences {profile:?}");
        let mut config = RankingConfig::default();
        if let Some(max_results) = self.max_results {
            config = config.with_max_results(max_results);
        }
        if let Some(path) = &self.shortlist {
            config = config.with_shortlist(load_shortlist(path)?);
        }
        Ok(RankingService::with_config(self.budget, profile, config)?)
    }
}

/// Load a curated shortlist mapping state names to county names.
pub(crate) fn load_shortlist(path: &Utf8Path) -> Result<CuratedShortlist, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseShortlist {
        path: path.to_path_buf(),
        source,
    })
}
