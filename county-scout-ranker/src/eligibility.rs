//! Tier- and preference-aware eligibility filtering.
//!
//! The filter runs a strict pass first. When fewer than
//! [`EligibilityFilter::MIN_SURVIVORS`] counties survive, a single emergency
//! pass with relaxed thresholds adds further counties. Survivors are ordered by
//! population, largest first, with the county name breaking ties.

use county_scout_core::{BudgetTier, CommunityType, County, UserPriorityProfile};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::numeric::as_f64;

/// Budget at which suburban buyers are steered towards larger, wealthier
/// counties.
const HIGH_BUDGET_SUBURBAN: f64 = 800_000.0;

/// Minimum values a county must meet to stay in the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum population.
    pub population: f64,
    /// Minimum median household income in USD.
    pub income: f64,
    /// Minimum median home value in USD.
    pub home_value: f64,
    /// Minimum college-degree rate in percent.
    pub degree_rate: f64,
}

impl Thresholds {
    /// Base thresholds for `tier` before any preference adjustment.
    #[must_use]
    pub const fn for_tier(tier: BudgetTier) -> Self {
        match tier {
            BudgetTier::Affordable => Self::new(25_000.0, 30_000.0, 80_000.0, 6.0),
            BudgetTier::MoveUp => Self::new(50_000.0, 35_000.0, 100_000.0, 8.0),
            BudgetTier::Luxury => Self::new(75_000.0, 40_000.0, 130_000.0, 10.0),
            BudgetTier::UltraLuxury => Self::new(100_000.0, 45_000.0, 150_000.0, 12.0),
        }
    }

    const fn new(population: f64, income: f64, home_value: f64, degree_rate: f64) -> Self {
        Self {
            population,
            income,
            home_value,
            degree_rate,
        }
    }

    /// Strict thresholds for a query, adjusted for community type and budget.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "rural buyers accept counties half the tier's minimum size"
    )]
    pub fn strict(tier: BudgetTier, profile: &UserPriorityProfile, budget: f64) -> Self {
        let mut thresholds = Self::for_tier(tier);
        let premium = tier.is_premium();
        match profile.community_type {
            CommunityType::Suburban => {
                let floor = if premium { 150_000.0 } else { 75_000.0 };
                thresholds.population = thresholds.population.max(floor);
            }
            CommunityType::Urban => {
                let floor = if premium { 200_000.0 } else { 100_000.0 };
                thresholds.population = thresholds.population.max(floor);
            }
            CommunityType::Rural => {
                thresholds.population = (thresholds.population / 2.0).max(15_000.0);
            }
            CommunityType::Unset => {}
        }
        if budget >= HIGH_BUDGET_SUBURBAN && profile.community_type == CommunityType::Suburban {
            thresholds.population = thresholds.population.max(200_000.0);
            thresholds.income = thresholds.income.max(50_000.0);
        }
        thresholds
    }

    /// Relaxed thresholds derived from `self`.
    ///
    /// Each value drops by a fixed factor but never below an absolute floor,
    /// and never rises above the strict value it relaxes.
    #[must_use]
    pub fn emergency(&self) -> Self {
        Self {
            population: relax(self.population, 0.5, 10_000.0),
            income: relax(self.income, 0.7, 25_000.0),
            home_value: relax(self.home_value, 0.6, 60_000.0),
            degree_rate: relax(self.degree_rate, 0.5, 5.0),
        }
    }

    /// Whether `county` meets every threshold.
    #[must_use]
    pub fn admits(&self, county: &County) -> bool {
        as_f64(county.record.population) >= self.population
            && as_f64(county.record.median_household_income) >= self.income
            && as_f64(county.record.median_home_value) >= self.home_value
            && county.metrics.college_degree_rate >= self.degree_rate
    }
}

#[expect(clippy::float_arithmetic, reason = "thresholds scale by a factor")]
fn relax(strict: f64, factor: f64, floor: f64) -> f64 {
    (strict * factor).max(floor).min(strict)
}

/// Result of filtering one state's counties.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityOutcome {
    /// Surviving counties, largest population first.
    pub counties: Vec<County>,
    /// Thresholds used by the strict pass.
    pub strict: Thresholds,
    /// Thresholds used by the emergency pass, if it ran.
    pub emergency: Option<Thresholds>,
}

impl EligibilityOutcome {
    /// Whether the emergency pass ran.
    #[must_use]
    pub const fn relaxed(&self) -> bool {
        self.emergency.is_some()
    }
}

/// Removes counties that do not suit a buyer's tier and preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityFilter {
    tier: BudgetTier,
    strict: Thresholds,
}

impl EligibilityFilter {
    /// Strict-pass survivor count below which the emergency pass runs.
    pub const MIN_SURVIVORS: usize = 3;

    /// Build the filter for one query.
    #[must_use]
    pub fn new(tier: BudgetTier, profile: &UserPriorityProfile, budget: f64) -> Self {
        Self {
            tier,
            strict: Thresholds::strict(tier, profile, budget),
        }
    }

    /// Thresholds applied by the strict pass.
    #[must_use]
    pub const fn strict(&self) -> Thresholds {
        self.strict
    }

    /// Filter `counties`, relaxing once if too few pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use county_scout_core::{BudgetTier, County, CountyRecord, UserPriorityProfile};
    /// use county_scout_ranker::EligibilityFilter;
    ///
    /// let tiny = County::from_record(CountyRecord {
    ///     name: "Tiny County".into(),
    ///     population: 900,
    ///     ..CountyRecord::default()
    /// });
    /// let filter = EligibilityFilter::new(
    ///     BudgetTier::Affordable,
    ///     &UserPriorityProfile::default(),
    ///     200_000.0,
    /// );
    /// let outcome = filter.apply(&[tiny]);
    /// assert!(outcome.counties.is_empty());
    /// assert!(outcome.relaxed());
    /// assert!(!filter.apply(&[]).relaxed());
    /// ```
    #[must_use]
    pub fn apply(&self, counties: &[County]) -> EligibilityOutcome {
        let mut admitted: Vec<bool> = counties
            .iter()
            .map(|county| self.strict.admits(county))
            .collect();
        let strict_count = admitted.iter().filter(|&&kept| kept).count();
        debug!(
            "strict {} filter kept {strict_count} of {} counties",
            self.tier,
            counties.len()
        );

        let mut emergency = None;
        if !counties.is_empty() && strict_count < Self::MIN_SURVIVORS {
            let relaxed = self.strict.emergency();
            for (kept, county) in admitted.iter_mut().zip(counties) {
                *kept = *kept || relaxed.admits(county);
            }
            warn!(
                "only {strict_count} counties met the {} thresholds; relaxed filter now keeps {}",
                self.tier,
                admitted.iter().filter(|&&kept| kept).count()
            );
            emergency = Some(relaxed);
        }

        let mut survivors: Vec<County> = counties
            .iter()
            .zip(&admitted)
            .filter(|(_, kept)| **kept)
            .map(|(county, _)| county.clone())
            .collect();
        survivors.sort_by(|left, right| {
            right
                .record
                .population
                .cmp(&left.record.population)
                .then_with(|| left.record.name.cmp(&right.record.name))
        });

        EligibilityOutcome {
            counties: survivors,
            strict: self.strict,
            emergency,
        }
    }
}
