//! Command-line interface for ranking U.S. counties by buyer fit.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod compare;
mod error;
mod fs;
mod input;
mod options;
mod output;
mod rank;

pub use error::CliError;

use compare::CompareArgs;
use input::HttpCensusSourceBuilder;
use rank::RankArgs;

pub(crate) const ARG_COUNTIES: &str = "counties";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_STATE: &str = "state";
pub(crate) const ARG_SHORTLIST: &str = "shortlist";
pub(crate) const ARG_LEFT: &str = "left";
pub(crate) const ARG_RIGHT: &str = "right";
pub(crate) const ARG_LEFT_STATE: &str = "left-state";
pub(crate) const ARG_RIGHT_STATE: &str = "right-state";
pub(crate) const ENV_RANK_BUDGET: &str = "COUNTY_SCOUT_CMDS_RANK_BUDGET";
pub(crate) const ENV_COMPARE_BUDGET: &str = "COUNTY_SCOUT_CMDS_COMPARE_BUDGET";

/// Run the county-scout CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be loaded, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    let sources = HttpCensusSourceBuilder;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args.into_config()?, &sources, &mut stdout),
        Command::Compare(args) => {
            compare::run_compare(args.into_config()?, &sources, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "county-scout",
    about = "Rank the counties of a U.S. state against a home-buying budget",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the counties of one state.
    Rank(RankArgs),
    /// Rank two states side by side.
    Compare(CompareArgs),
}

#[cfg(test)]
mod tests;
