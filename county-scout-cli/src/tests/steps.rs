//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{StubSourceBuilder, Workspace, modest_counties};
use super::*;
use crate::rank::{RankConfig, execute_rank};
use camino::Utf8PathBuf;
use county_scout_core::BudgetTier;
use county_scout_ranker::RankingReport;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// Aggregates rank CLI scenario state so each step only needs a single world
/// argument.
struct RankWorld {
    workspace: Workspace,
    counties_file: RefCell<Option<Utf8PathBuf>>,
    shortlist_file: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    sources: RefCell<StubSourceBuilder>,
    result: RefCell<Option<Result<RankingReport, CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            counties_file: RefCell::new(None),
            shortlist_file: RefCell::new(None),
            cli_args: RefCell::new(vec!["county-scout".to_owned(), "rank".to_owned()]),
            sources: RefCell::new(StubSourceBuilder::default()),
            result: RefCell::new(None),
        }
    }

    fn counties_file(&self) -> String {
        self.counties_file
            .borrow()
            .as_ref()
            .map(ToString::to_string)
            .expect("counties file written")
    }

    fn push_args<I: IntoIterator<Item = String>>(&self, args: I) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn report(&self) -> RankingReport {
        self.result
            .borrow()
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .map(Clone::clone)
            .unwrap_or_else(|err| panic!("expected success, found {err:?}"))
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

#[given("a counties file for five modest counties")]
fn counties_file(#[from(world)] world: &RankWorld) {
    let path = world
        .workspace
        .write_counties("counties.json", &modest_counties("Plain"));
    *world.counties_file.borrow_mut() = Some(path);
}

#[given("the census service knows the counties of \"{state}\"")]
fn census_knows(#[from(world)] world: &RankWorld, state: String) {
    let sources = world.sources.replace(StubSourceBuilder::default());
    *world.sources.borrow_mut() = sources.with_state(&state, modest_counties("Plain"));
}

#[given("a shortlist for \"{state}\" naming \"{county}\"")]
fn shortlist(#[from(world)] world: &RankWorld, state: String, county: String) {
    let json = serde_json::json!({ state: [county] }).to_string();
    let path = world.workspace.write("shortlist.json", &json);
    world.push_args([format!("--{ARG_SHORTLIST}"), path.to_string()]);
    *world.shortlist_file.borrow_mut() = Some(path);
}

#[given("I pass the counties file with a budget of {budget}")]
fn pass_file(#[from(world)] world: &RankWorld, budget: u64) {
    world.push_args([
        world.counties_file(),
        format!("--{ARG_BUDGET}"),
        budget.to_string(),
    ]);
}

#[given("I pass the counties file for state \"{state}\" with a budget of {budget}")]
fn pass_file_for_state(#[from(world)] world: &RankWorld, state: String, budget: u64) {
    world.push_args([
        world.counties_file(),
        format!("--{ARG_STATE}"),
        state,
        format!("--{ARG_BUDGET}"),
        budget.to_string(),
    ]);
}

#[given("I ask for state \"{state}\" with a budget of {budget}")]
fn ask_for_state(#[from(world)] world: &RankWorld, state: String, budget: u64) {
    world.push_args([
        format!("--{ARG_STATE}"),
        state,
        format!("--{ARG_BUDGET}"),
        budget.to_string(),
    ]);
}

#[given("I pass the counties file without a budget")]
fn pass_file_without_budget(#[from(world)] world: &RankWorld) {
    world.push_args([world.counties_file()]);
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let args = world.cli_args.borrow().clone();
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let Command::Rank(rank_args) = cli.command else {
        panic!("expected the rank subcommand");
    };
    let sources = world.sources.borrow();
    let result = RankConfig::try_from(rank_args).and_then(|config| {
        config.validate_sources()?;
        execute_rank(&config, &*sources)
    });
    *world.result.borrow_mut() = Some(result);
}

#[then("the report ranks {count} counties in the {tier} tier")]
fn ranks_in_tier(#[from(world)] world: &RankWorld, count: usize, tier: BudgetTier) {
    let report = world.report();
    assert_eq!(report.counties.len(), count);
    assert_eq!(report.tier, tier);
}

#[then("the report is named \"{state}\"")]
fn report_named(#[from(world)] world: &RankWorld, state: String) {
    assert_eq!(world.report().state, state);
}

#[then("the census service was contacted once")]
fn contacted_once(#[from(world)] world: &RankWorld) {
    assert_eq!(world.sources.borrow().builds(), 1);
}

#[then("only \"{county}\" is ranked")]
fn only_ranked(#[from(world)] world: &RankWorld, county: String) {
    assert!(world.shortlist_file.borrow().is_some());
    let names: Vec<String> = world
        .report()
        .counties
        .into_iter()
        .map(|ranked| ranked.name)
        .collect();
    assert_eq!(names, [county]);
}

#[then("the CLI reports that the \"{flag}\" flag is missing")]
fn reports_missing_flag(#[from(world)] world: &RankWorld, flag: String) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, flag),
        other => panic!("unexpected error {other:?}"),
    }
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(ranking_local_file, "ranking a local counties file");
register_rank_scenario!(fetching_live_state, "fetching a state live");
register_rank_scenario!(narrowing_to_shortlist, "narrowing to a curated shortlist");
register_rank_scenario!(rejecting_missing_budget, "rejecting a command without a budget");
