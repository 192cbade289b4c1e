//! Compare command implementation for the county-scout CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use county_scout_ranker::StateComparison;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{CountyInput, CountyLoader, CountySourceBuilder};
use crate::options::{CensusOptions, RankingOptions};
use crate::output::write_report;
use crate::{
    ARG_BUDGET, ARG_LEFT, ARG_LEFT_STATE, ARG_RIGHT, ARG_RIGHT_STATE, ARG_SHORTLIST, CliError,
    ENV_COMPARE_BUDGET,
};

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank two states side by side. Each state is scored against \
                 its own medians. Either side may come from a local JSON \
                 file or a live census fetch.",
    about = "Compare the counties of two states"
)]
#[ortho_config(prefix = "COUNTY_SCOUT")]
pub(crate) struct CompareArgs {
    /// JSON file of counties for the first state.
    #[arg(long = ARG_LEFT, value_name = "path")]
    #[serde(default)]
    pub(crate) left: Option<Utf8PathBuf>,
    /// JSON file of counties for the second state.
    #[arg(long = ARG_RIGHT, value_name = "path")]
    #[serde(default)]
    pub(crate) right: Option<Utf8PathBuf>,
    /// First state to fetch, or its report name when --left is given.
    #[arg(long = ARG_LEFT_STATE, value_name = "state")]
    #[serde(default)]
    pub(crate) left_state: Option<String>,
    /// Second state to fetch, or its report name when --right is given.
    #[arg(long = ARG_RIGHT_STATE, value_name = "state")]
    #[serde(default)]
    pub(crate) right_state: Option<String>,
    /// Home-buying budget in USD.
    #[arg(long = ARG_BUDGET, value_name = "usd")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Free-text description of what matters to the buyer.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) preferences: Option<String>,
    /// Maximum number of counties to report per state.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
    /// Path to a curated shortlist JSON file.
    #[arg(long = ARG_SHORTLIST, value_name = "path")]
    #[serde(default)]
    pub(crate) shortlist: Option<Utf8PathBuf>,
    /// Write the comparison here instead of stdout.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Base URL for the census API.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub(crate) census_base_url: Option<String>,
    /// Census API key.
    #[arg(long, value_name = "key")]
    #[serde(default)]
    pub(crate) census_api_key: Option<String>,
    /// ACS 5-year dataset vintage.
    #[arg(long, value_name = "year")]
    #[serde(default)]
    pub(crate) census_year: Option<u16>,
    /// Census request timeout in seconds.
    #[arg(long, value_name = "seconds")]
    #[serde(default)]
    pub(crate) census_timeout: Option<u64>,
}

impl CompareArgs {
    pub(crate) fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        let config = CompareConfig::try_from(merged)?;
        config.validate_sources()?;
        Ok(config)
    }
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompareConfig {
    pub(crate) left: CountyInput,
    pub(crate) right: CountyInput,
    pub(crate) ranking: RankingOptions,
    pub(crate) census: CensusOptions,
}

impl CompareConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.left.validate_sources(ARG_LEFT)?;
        self.right.validate_sources(ARG_RIGHT)?;
        self.ranking.validate_sources()
    }
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let budget = args.budget.ok_or(CliError::MissingArgument {
            field: ARG_BUDGET,
            env: ENV_COMPARE_BUDGET,
        })?;
        let left = CountyInput::resolve(args.left, args.left_state, ARG_LEFT, ARG_LEFT_STATE)?;
        let right =
            CountyInput::resolve(args.right, args.right_state, ARG_RIGHT, ARG_RIGHT_STATE)?;
        Ok(Self {
            left,
            right,
            ranking: RankingOptions {
                budget,
                preferences: args.preferences.unwrap_or_default(),
                max_results: args.max_results,
                shortlist: args.shortlist,
                output: args.output,
            },
            census: CensusOptions::new(
                args.census_base_url,
                args.census_api_key,
                args.census_year,
                args.census_timeout,
            ),
        })
    }
}

pub(crate) fn run_compare(
    config: CompareConfig,
    builder: &dyn CountySourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let comparison = execute_compare(&config, builder)?;
    write_report(&comparison, config.ranking.output.as_deref(), writer)
}

pub(crate) fn execute_compare(
    config: &CompareConfig,
    builder: &dyn CountySourceBuilder,
) -> Result<StateComparison, CliError> {
    let service = config.ranking.service()?;
    let loader = CountyLoader::new(&config.census, builder);
    let left = loader.load(&config.left)?;
    let right = loader.load(&config.right)?;
    Ok(service.compare(
        (config.left.label(), left),
        (config.right.label(), right),
    ))
}
