//! Rank command implementation for the county-scout CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use county_scout_ranker::RankingReport;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{CountyInput, CountyLoader, CountySourceBuilder};
use crate::options::{CensusOptions, RankingOptions};
use crate::output::write_report;
use crate::{ARG_BUDGET, ARG_COUNTIES, ARG_SHORTLIST, ARG_STATE, CliError, ENV_RANK_BUDGET};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the counties of one state for a home-buying budget. \
                 Counties come from a local JSON file (a saved census table \
                 or an array of county objects) or, without a file, from a \
                 live census fetch for --state.",
    about = "Rank the counties of one state"
)]
#[ortho_config(prefix = "COUNTY_SCOUT")]
pub(crate) struct RankArgs {
    /// Path to a JSON file of counties.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) counties: Option<Utf8PathBuf>,
    /// Home-buying budget in USD.
    #[arg(long = ARG_BUDGET, value_name = "usd")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Free-text description of what matters to the buyer.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) preferences: Option<String>,
    /// State to fetch, or to name the report when a file is given.
    #[arg(long = ARG_STATE, value_name = "state")]
    #[serde(default)]
    pub(crate) state: Option<String>,
    /// Maximum number of counties to report.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
    /// Path to a curated shortlist JSON file.
    #[arg(long = ARG_SHORTLIST, value_name = "path")]
    #[serde(default)]
    pub(crate) shortlist: Option<Utf8PathBuf>,
    /// Write the report here instead of stdout.
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

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        let config = RankConfig::try_from(merged)?;
        config.validate_sources()?;
        Ok(config)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) input: CountyInput,
    pub(crate) ranking: RankingOptions,
    pub(crate) census: CensusOptions,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.input.validate_sources(ARG_COUNTIES)?;
        self.ranking.validate_sources()
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let budget = args.budget.ok_or(CliError::MissingArgument {
            field: ARG_BUDGET,
            env: ENV_RANK_BUDGET,
        })?;
        let input = CountyInput::resolve(args.counties, args.state, ARG_COUNTIES, ARG_STATE)?;
        Ok(Self {
            input,
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

pub(crate) fn run_rank(
    config: RankConfig,
    builder: &dyn CountySourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_rank(&config, builder)?;
    write_report(&report, config.ranking.output.as_deref(), writer)
}

pub(crate) fn execute_rank(
    config: &RankConfig,
    builder: &dyn CountySourceBuilder,
) -> Result<RankingReport, CliError> {
    let service = config.ranking.service()?;
    let loader = CountyLoader::new(&config.census, builder);
    let counties = loader.load(&config.input)?;
    let report = service.rank(config.input.label(), counties);
    info!(
        "{}: ranked {} of {} counties ({} tier{})",
        report.state,
        report.counties.len(),
        report.total_counties,
        report.tier,
        if report.relaxed { ", relaxed thresholds" } else { "" }
    );
    Ok(report)
}
