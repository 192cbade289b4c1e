//! The end-to-end ranking pipeline.

use county_scout_core::{
    BudgetTier, County, CountyRecord, CountySource, CountySourceError, DataQualityIssue,
    DerivedMetrics, ScoreSet, StateMedians, UserPriorityProfile,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    CountyScorer, CountyTags, CuratedShortlist, DimensionWeights, EligibilityFilter, RankingError,
};

/// Tunable limits for a ranking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Maximum number of counties in a report.
    pub max_results: usize,
    /// Optional curated shortlist applied to upper tiers.
    pub shortlist: Option<CuratedShortlist>,
}

impl RankingConfig {
    /// Default cap on ranked counties per state.
    pub const DEFAULT_MAX_RESULTS: usize = 25;

    /// Override the result limit.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Attach a curated shortlist.
    #[must_use]
    pub fn with_shortlist(mut self, shortlist: CuratedShortlist) -> Self {
        self.shortlist = Some(shortlist);
        self
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: Self::DEFAULT_MAX_RESULTS,
            shortlist: None,
        }
    }
}

/// One county in a ranked report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCounty {
    /// One-based position, best first.
    pub rank: usize,
    /// County name.
    pub name: String,
    /// Raw statistics.
    pub record: CountyRecord,
    /// Derived metrics.
    pub metrics: DerivedMetrics,
    /// Sub-scores.
    pub scores: ScoreSet,
    /// Weighted composite score.
    pub composite: f64,
    /// Presentation tags.
    pub tags: CountyTags,
    /// Data-quality faults found in the record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_quality: Vec<DataQualityIssue>,
}

/// Ranked counties for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// State the counties belong to.
    pub state: String,
    /// Budget tier used for the pass.
    pub tier: BudgetTier,
    /// Budget in USD.
    pub budget: f64,
    /// Parsed buyer priorities.
    pub priorities: UserPriorityProfile,
    /// Baseline computed over every county in the state.
    pub state_medians: StateMedians,
    /// Number of counties supplied.
    pub total_counties: usize,
    /// Number of counties that passed eligibility.
    pub eligible_counties: usize,
    /// Whether the eligibility filter had to relax its thresholds.
    pub relaxed: bool,
    /// Ranked counties, best first.
    pub counties: Vec<RankedCounty>,
}

impl RankingReport {
    /// Whether no county could be ranked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}

/// Two independently ranked states.
///
/// Composite scores are relative to each state's own medians and are not
/// comparable across the two sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateComparison {
    /// First state.
    pub left: RankingReport,
    /// Second state.
    pub right: RankingReport,
}

/// Ranks counties for one buyer.
///
/// The service is immutable once built and holds no per-state data, so the
/// same instance can rank any number of states.
#[derive(Debug, Clone)]
pub struct RankingService {
    budget: f64,
    tier: BudgetTier,
    profile: UserPriorityProfile,
    config: RankingConfig,
}

impl RankingService {
    /// Create a service with the default configuration.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidBudget`] when `budget` is not a
    /// positive, finite number.
    pub fn new(budget: f64, profile: UserPriorityProfile) -> Result<Self, RankingError> {
        Self::with_config(budget, profile, RankingConfig::default())
    }

    /// Create a service with an explicit configuration.
    ///
    /// # Errors
    /// Returns [`RankingError::InvalidBudget`] for a non-positive or
    /// non-finite budget and [`RankingError::InvalidResultLimit`] when
    /// `config.max_results` is zero.
    pub fn with_config(
        budget: f64,
        profile: UserPriorityProfile,
        config: RankingConfig,
    ) -> Result<Self, RankingError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(RankingError::InvalidBudget { budget });
        }
        if config.max_results == 0 {
            return Err(RankingError::InvalidResultLimit);
        }
        Ok(Self {
            budget,
            tier: BudgetTier::from_budget(budget),
            profile,
            config,
        })
    }

    /// Budget tier derived from the budget.
    #[must_use]
    pub const fn tier(&self) -> BudgetTier {
        self.tier
    }

    /// Parsed buyer priorities.
    #[must_use]
    pub const fn profile(&self) -> &UserPriorityProfile {
        &self.profile
    }

    /// Rank every county supplied for `state`.
    ///
    /// An empty input yields an empty report rather than an error.
    #[must_use]
    pub fn rank(&self, state: &str, records: Vec<CountyRecord>) -> RankingReport {
        let counties: Vec<County> = records.into_iter().map(County::from_record).collect();
        let state_medians = StateMedians::compute(&counties);

        let filter = EligibilityFilter::new(self.tier, &self.profile, self.budget);
        let outcome = filter.apply(&counties);
        let relaxed = outcome.relaxed();
        let eligible = match &self.config.shortlist {
            Some(shortlist) => shortlist.narrow(state, self.tier, outcome.counties),
            None => outcome.counties,
        };
        let eligible_counties = eligible.len();

        let scorer = CountyScorer::new(&state_medians, self.tier, self.budget);
        let mut scored: Vec<(County, ScoreSet, f64)> = eligible
            .into_iter()
            .map(|county| {
                let scores = scorer.score(&county);
                let composite = DimensionWeights::for_scores(&scores, &self.profile, self.tier)
                    .composite(&scores);
                (county, scores, composite)
            })
            .collect();
        scored.sort_by(|(_, _, left), (_, _, right)| right.total_cmp(left));
        scored.truncate(self.config.max_results);

        let ranked: Vec<RankedCounty> = scored
            .into_iter()
            .zip(1..)
            .map(|((county, scores, composite), rank)| RankedCounty {
                rank,
                name: county.record.name.clone(),
                tags: CountyTags::derive(&county, &scores),
                data_quality: county.record.data_quality_issues(),
                metrics: county.metrics,
                record: county.record,
                scores,
                composite,
            })
            .collect();
        debug!(
            "ranked {} of {} eligible counties in {state}",
            ranked.len(),
            eligible_counties
        );

        RankingReport {
            state: state.to_owned(),
            tier: self.tier,
            budget: self.budget,
            priorities: self.profile,
            state_medians,
            total_counties: counties.len(),
            eligible_counties,
            relaxed,
            counties: ranked,
        }
    }

    /// Fetch counties for `state` from `source` and rank them.
    ///
    /// # Errors
    /// Propagates any [`CountySourceError`] raised by the source.
    pub fn rank_from_source<S>(
        &self,
        source: &S,
        state: &str,
    ) -> Result<RankingReport, CountySourceError>
    where
        S: CountySource + ?Sized,
    {
        let records = source.fetch_counties(state)?;
        Ok(self.rank(state, records))
    }

    /// Rank two states side by side, each against its own medians.
    #[must_use]
    pub fn compare(
        &self,
        left: (&str, Vec<CountyRecord>),
        right: (&str, Vec<CountyRecord>),
    ) -> StateComparison {
        let (left_state, left_records) = left;
        let (right_state, right_records) = right;
        StateComparison {
            left: self.rank(left_state, left_records),
            right: self.rank(right_state, right_records),
        }
    }

    /// Fetch and rank two states from `source`.
    ///
    /// # Errors
    /// Propagates the first [`CountySourceError`] raised by the source.
    pub fn compare_from_source<S>(
        &self,
        source: &S,
        left_state: &str,
        right_state: &str,
    ) -> Result<StateComparison, CountySourceError>
    where
        S: CountySource + ?Sized,
    {
        Ok(StateComparison {
            left: self.rank_from_source(source, left_state)?,
            right: self.rank_from_source(source, right_state)?,
        })
    }
}
