//! Sub-score computation.
//!
//! Every sub-score lies in `0.0..=100.0`. Scores are built from banded
//! bonuses, so a county's score only moves when a statistic crosses a band
//! edge. State-relative scores read their baseline from [`StateMedians`] and
//! contribute nothing when the baseline is missing.
#![expect(
    clippy::float_arithmetic,
    reason = "scores are weighted sums of census ratios"
)]

use county_scout_core::{BudgetTier, County, ScoreSet, StateMedians};
use log::warn;

use crate::numeric::as_f64;

const MAX_SCORE: f64 = 100.0;
const NEUTRAL_SAFETY: f64 = 50.0;

/// Upper ratio bound paired with the score awarded at or below it.
type Band = (f64, f64);

const STANDARD_PRICE_TO_INCOME: [Band; 4] = [(2.5, 100.0), (3.5, 80.0), (4.5, 60.0), (6.0, 40.0)];
const PREMIUM_PRICE_TO_INCOME: [Band; 4] = [(4.0, 100.0), (5.5, 80.0), (7.0, 60.0), (9.0, 40.0)];
const PRICE_TO_INCOME_FLOOR: f64 = 20.0;

/// Inclusive lower and upper bounds paired with the score awarded inside.
type Range = (f64, f64, f64);

const STANDARD_POPULATION_SWEET_SPOT: [Range; 3] = [
    (50_000.0, 200_000.0, 30.0),
    (25_000.0, 300_000.0, 20.0),
    (10_000.0, 500_000.0, 10.0),
];
const PREMIUM_POPULATION_SWEET_SPOT: [Range; 3] = [
    (100_000.0, 1_000_000.0, 30.0),
    (50_000.0, 2_000_000.0, 20.0),
    (25_000.0, 3_000_000.0, 10.0),
];
const STANDARD_VALUE_RATIO: [Range; 3] = [(0.8, 1.5, 50.0), (0.6, 2.0, 35.0), (0.4, 3.0, 20.0)];
const PREMIUM_VALUE_RATIO: [Range; 3] = [(1.2, 3.0, 50.0), (0.9, 4.0, 35.0), (0.6, 5.0, 20.0)];
/// Home value to state median band that suits a move-up purchase.
const MOVE_UP_VALUE_RATIO: (f64, f64) = (1.0, 2.0);

/// Lower bound paired with the score awarded at or above it.
type Step = (f64, f64);

const STANDARD_FAMILY_INCOME: [Step; 3] = [(70_000.0, 30.0), (50_000.0, 20.0), (35_000.0, 10.0)];
const PREMIUM_FAMILY_INCOME: [Step; 3] = [(120_000.0, 30.0), (90_000.0, 20.0), (60_000.0, 10.0)];
const EDUCATION_STEPS: [Step; 3] = [(35.0, 35.0), (25.0, 25.0), (15.0, 15.0)];
const ECONOMIC_SCALE_STEPS: [Step; 3] = [(100_000.0, 25.0), (50_000.0, 15.0), (25_000.0, 10.0)];

/// Scores counties against one state's baseline for one buyer.
///
/// # Examples
///
/// ```
/// use county_scout_core::{BudgetTier, County, CountyRecord, StateMedians};
/// use county_scout_ranker::CountyScorer;
///
/// let medians = StateMedians {
///     home_value: 200_000.0,
///     income: 60_000.0,
///     population: 50_000.0,
///     degree_rate: 25.0,
/// };
/// let scorer = CountyScorer::new(&medians, BudgetTier::Affordable, 250_000.0);
/// let county = County::from_record(CountyRecord {
///     median_household_income: 60_000,
///     median_home_value: 150_000,
///     ..CountyRecord::default()
/// });
/// assert_eq!(scorer.affordability(&county), 100.0);
/// assert_eq!(scorer.score(&county).safety, None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CountyScorer<'a> {
    medians: &'a StateMedians,
    tier: BudgetTier,
    budget: f64,
}

impl<'a> CountyScorer<'a> {
    /// Build a scorer for one query.
    #[must_use]
    pub const fn new(medians: &'a StateMedians, tier: BudgetTier, budget: f64) -> Self {
        Self {
            medians,
            tier,
            budget,
        }
    }

    /// Tier the scorer grades against.
    #[must_use]
    pub const fn tier(&self) -> BudgetTier {
        self.tier
    }

    /// Compute every sub-score for `county`.
    #[must_use]
    pub fn score(&self, county: &County) -> ScoreSet {
        ScoreSet {
            affordability: self.affordability(county),
            family_friendly: self.family_friendly(county),
            economic_vitality: self.economic_vitality(county),
            housing_stability: self.housing_stability(county),
            budget_compatibility: self.budget_compatibility(county),
            safety: safety(county),
        }
    }

    /// Score the home-price-to-income ratio; lower ratios score higher.
    ///
    /// Premium tiers tolerate higher ratios. A county without income data
    /// scores `0.0`.
    #[must_use]
    pub fn affordability(&self, county: &County) -> f64 {
        let Some(ratio) = price_to_income(county) else {
            return 0.0;
        };
        let bands = if self.tier.is_premium() {
            &PREMIUM_PRICE_TO_INCOME
        } else {
            &STANDARD_PRICE_TO_INCOME
        };
        bands
            .iter()
            .find(|(upper, _)| ratio <= *upper)
            .map_or(PRICE_TO_INCOME_FLOOR, |(_, score)| *score)
    }

    /// Score households with children, income level, and county size.
    #[must_use]
    pub fn family_friendly(&self, county: &County) -> f64 {
        let record = &county.record;
        let children = if record.total_occupied_households == 0 {
            0.0
        } else {
            (as_f64(record.households_with_children) / as_f64(record.total_occupied_households)
                * 100.0)
                .min(40.0)
        };
        let (income_steps, sweet_spot) = if self.tier.is_premium() {
            (&PREMIUM_FAMILY_INCOME, &PREMIUM_POPULATION_SWEET_SPOT)
        } else {
            (&STANDARD_FAMILY_INCOME, &STANDARD_POPULATION_SWEET_SPOT)
        };
        let income = step(income_steps, as_f64(record.median_household_income));
        let size = range(sweet_spot, as_f64(record.population));
        (children + income + size).min(MAX_SCORE)
    }

    /// Score income against the state, education, and economic scale.
    #[must_use]
    pub fn economic_vitality(&self, county: &County) -> f64 {
        let income = self
            .medians
            .income_ratio(county.record.median_household_income)
            .map_or(0.0, |ratio| (ratio * 40.0).min(40.0));
        let education = step(&EDUCATION_STEPS, county.metrics.college_degree_rate);
        let scale = step(&ECONOMIC_SCALE_STEPS, as_f64(county.record.population));
        (income + education + scale).min(MAX_SCORE)
    }

    /// Score homeownership and home value against the state.
    #[must_use]
    pub fn housing_stability(&self, county: &County) -> f64 {
        let ownership = county
            .metrics
            .homeownership_rate
            .map_or(0.0, |rate| rate / 100.0 * 50.0);
        let bands = if self.tier.is_premium() {
            &PREMIUM_VALUE_RATIO
        } else {
            &STANDARD_VALUE_RATIO
        };
        let value = self
            .medians
            .home_value_ratio(county.record.median_home_value)
            .map_or(0.0, |ratio| range(bands, ratio));
        (ownership + value).min(MAX_SCORE)
    }

    /// Score how well the county fits the buyer's budget tier.
    #[must_use]
    pub fn budget_compatibility(&self, county: &County) -> f64 {
        let record = &county.record;
        let home_value = as_f64(record.median_home_value);
        let income = as_f64(record.median_household_income);
        let degree_rate = county.metrics.college_degree_rate;
        let value_ratio = self.medians.home_value_ratio(record.median_home_value);
        let score = match self.tier {
            BudgetTier::Affordable => {
                award(home_value <= self.budget * 3.0, 50.0)
                    + award(income >= 40_000.0, 30.0)
                    + award(price_to_income(county).is_some_and(|ratio| ratio <= 3.5), 20.0)
            }
            BudgetTier::MoveUp => {
                let (lower, upper) = MOVE_UP_VALUE_RATIO;
                let step_up = value_ratio.is_some_and(|ratio| (lower..=upper).contains(&ratio));
                award(step_up && home_value <= self.budget, 40.0)
                    + award(income >= 70_000.0, 30.0)
                    + award(degree_rate >= 20.0, 30.0)
            }
            BudgetTier::Luxury => {
                award(value_ratio.is_some_and(|ratio| ratio >= 1.2), 30.0)
                    + award(income >= 100_000.0, 35.0)
                    + award(degree_rate >= 30.0, 35.0)
            }
            BudgetTier::UltraLuxury => {
                let prestige = match value_ratio {
                    Some(ratio) if ratio >= 2.5 => 25.0,
                    Some(ratio) if ratio >= 1.5 => 15.0,
                    _ => 0.0,
                };
                prestige
                    + award(income >= 150_000.0, 25.0)
                    + award(degree_rate >= 35.0, 25.0)
                    + award(as_f64(record.population) >= 100_000.0, 25.0)
            }
        };
        score.min(MAX_SCORE)
    }
}

/// Pass a safety reading through, replacing unusable values with a neutral
/// `50.0`. Counties without a reading have no safety dimension.
fn safety(county: &County) -> Option<f64> {
    county.record.safety_score.map(|reading| {
        if reading.is_finite() && reading > 0.0 && reading <= MAX_SCORE {
            reading
        } else {
            warn!(
                "{}: safety reading {reading} is out of range; using {NEUTRAL_SAFETY}",
                county.record.name
            );
            NEUTRAL_SAFETY
        }
    })
}

fn price_to_income(county: &County) -> Option<f64> {
    let income = county.record.median_household_income;
    (income > 0).then(|| as_f64(county.record.median_home_value) / as_f64(income))
}

fn step(steps: &[Step], value: f64) -> f64 {
    steps
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map_or(0.0, |(_, score)| *score)
}

fn range(ranges: &[Range], value: f64) -> f64 {
    ranges
        .iter()
        .find(|(lower, upper, _)| (*lower..=*upper).contains(&value))
        .map_or(0.0, |(_, _, score)| *score)
}

const fn award(condition: bool, points: f64) -> f64 {
    if condition { points } else { 0.0 }
}
