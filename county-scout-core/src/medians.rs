//! State-level medians used as the scoring baseline.
//!
//! Medians are computed once per query over the *full* county set for a
//! state. Computing them over a filtered subset would bias every relative
//! score towards whichever counties survived filtering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::County;

/// Median home value, income, population, and degree rate for one state.
///
/// A zero median means "no baseline available"; ratios against it are
/// undefined (see [`StateMedians::home_value_ratio`]).
///
/// # Examples
///
/// ```
/// use county_scout_core::{County, CountyRecord, StateMedians};
///
/// let counties: Vec<County> = [40_000, 50_000, 90_000]
///     .into_iter()
///     .map(|income| {
///         County::from_record(CountyRecord {
///             median_household_income: income,
///             ..CountyRecord::default()
///         })
///     })
///     .collect();
/// let medians = StateMedians::compute(&counties);
/// assert_eq!(medians.income, 50_000.0);
/// assert_eq!(medians.home_value, 0.0);
/// assert_eq!(medians.income_ratio(75_000), Some(1.5));
/// assert_eq!(medians.home_value_ratio(100_000), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateMedians {
    /// Median of positive county median home values.
    pub home_value: f64,
    /// Median of positive county median household incomes.
    pub income: f64,
    /// Median of positive county populations.
    pub population: f64,
    /// Median of positive county college-degree rates.
    pub degree_rate: f64,
}

impl StateMedians {
    /// Compute medians over every county in the state.
    ///
    /// Each metric ignores counties whose value for *that* metric is zero;
    /// those counties still contribute to the other medians. An empty slice
    /// yields all-zero medians.
    #[must_use]
    pub fn compute(counties: &[County]) -> Self {
        Self {
            home_value: positive_median(
                counties
                    .iter()
                    .map(|county| county.record.median_home_value as f64),
            ),
            income: positive_median(
                counties
                    .iter()
                    .map(|county| county.record.median_household_income as f64),
            ),
            population: positive_median(
                counties
                    .iter()
                    .map(|county| county.record.population as f64),
            ),
            degree_rate: positive_median(
                counties
                    .iter()
                    .map(|county| county.metrics.college_degree_rate),
            ),
        }
    }

    /// Ratio of a county income to the state median, if a baseline exists.
    #[must_use]
    pub fn income_ratio(&self, income: u64) -> Option<f64> {
        ratio(income as f64, self.income)
    }

    /// Ratio of a county home value to the state median, if a baseline exists.
    #[must_use]
    pub fn home_value_ratio(&self, home_value: u64) -> Option<f64> {
        ratio(home_value as f64, self.home_value)
    }

    /// Whether every median is zero, i.e. no baseline was available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.home_value == 0.0
            && self.income == 0.0
            && self.population == 0.0
            && self.degree_rate == 0.0
    }
}

fn ratio(value: f64, baseline: f64) -> Option<f64> {
    (baseline > 0.0).then(|| value / baseline)
}

fn positive_median(values: impl Iterator<Item = f64>) -> f64 {
    median(values.filter(|value| *value > 0.0).collect())
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        return values.get(mid).copied().unwrap_or(0.0);
    }
    match (values.get(mid - 1), values.get(mid)) {
        (Some(lower), Some(upper)) => (lower + upper) / 2.0,
        _ => 0.0,
    }
}
