//! Per-county metrics derived from raw counts.
//!
//! Both rates are percentages in `0.0..=100.0`. Neither function divides by
//! zero: a missing adult population yields a `0.0` degree rate, while a
//! missing household count leaves the homeownership rate undefined so callers
//! can tell it apart from a genuine `0%`.

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CountyRecord;

/// Percentage of adults aged 25+ holding at least a bachelor's degree.
///
/// Returns `0.0` when the county reports no adults aged 25 and over.
///
/// # Examples
///
/// ```
/// use county_scout_core::{CountyRecord, college_degree_rate};
///
/// let county = CountyRecord {
///     adults_25_plus: 1_000,
///     bachelor_plus_count: 250,
///     ..CountyRecord::default()
/// };
/// assert_eq!(college_degree_rate(&county), 25.0);
/// assert_eq!(college_degree_rate(&CountyRecord::default()), 0.0);
/// ```
#[must_use]
pub fn college_degree_rate(county: &CountyRecord) -> f64 {
    percentage(county.bachelor_plus_count, county.adults_25_plus).unwrap_or(0.0)
}

/// Percentage of occupied housing units that are owner-occupied.
///
/// Returns `None` when the county reports no occupied households, or when the
/// owner-occupied count exceeds the occupied total (a data-quality fault that
/// must not surface as a corrupted percentage).
///
/// # Examples
///
/// ```
/// use county_scout_core::{CountyRecord, homeownership_rate};
///
/// let county = CountyRecord {
///     total_occupied_households: 200,
///     owner_occupied_households: 150,
///     ..CountyRecord::default()
/// };
/// assert_eq!(homeownership_rate(&county), Some(75.0));
/// assert_eq!(homeownership_rate(&CountyRecord::default()), None);
/// ```
#[must_use]
pub fn homeownership_rate(county: &CountyRecord) -> Option<f64> {
    if !county.has_consistent_tenure() {
        return None;
    }
    percentage(
        county.owner_occupied_households,
        county.total_occupied_households,
    )
}

fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(100.0 * part as f64 / whole as f64)
}

/// Metrics derived once per county and carried alongside the raw record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedMetrics {
    /// Degree rate in `0.0..=100.0`.
    pub college_degree_rate: f64,
    /// Homeownership rate in `0.0..=100.0`, undefined without households.
    pub homeownership_rate: Option<f64>,
}

impl DerivedMetrics {
    /// Compute every derived metric for `county`.
    #[must_use]
    pub fn derive(county: &CountyRecord) -> Self {
        Self {
            college_degree_rate: college_degree_rate(county),
            homeownership_rate: homeownership_rate(county),
        }
    }
}

/// A county record paired with its derived metrics.
///
/// Built once per ranking pass; the record is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct County {
    /// Raw statistics.
    pub record: CountyRecord,
    /// Metrics computed from [`County::record`].
    pub metrics: DerivedMetrics,
}

impl County {
    /// Derive metrics for `record`, logging any data-quality faults.
    ///
    /// # Examples
    ///
    /// ```
    /// use county_scout_core::{County, CountyRecord};
    ///
    /// let county = County::from_record(CountyRecord {
    ///     total_occupied_households: 10,
    ///     owner_occupied_households: 12,
    ///     ..CountyRecord::default()
    /// });
    /// assert!(county.metrics.homeownership_rate.is_none());
    /// ```
    #[must_use]
    pub fn from_record(record: CountyRecord) -> Self {
        for issue in record.data_quality_issues() {
            warn!("county {:?}: {issue}", record.name);
        }
        let metrics = DerivedMetrics::derive(&record);
        Self { record, metrics }
    }

    /// County name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

impl From<CountyRecord> for County {
    fn from(record: CountyRecord) -> Self {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(0, 500, 0.0)]
    #[case(125, 500, 25.0)]
    #[case(500, 500, 100.0)]
    fn degree_rate_handles_denominators(
        #[case] degrees: u64,
        #[case] adults: u64,
        #[case] expected: f64,
    ) {
        let county = CountyRecord {
            adults_25_plus: adults,
            bachelor_plus_count: degrees,
            ..CountyRecord::default()
        };
        assert!((college_degree_rate(&county) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn zero_households_leave_homeownership_undefined() {
        let county = CountyRecord {
            owner_occupied_households: 0,
            total_occupied_households: 0,
            ..CountyRecord::default()
        };
        assert_eq!(homeownership_rate(&county), None);
    }

    #[rstest]
    fn zero_owners_is_a_defined_zero_rate() {
        let county = CountyRecord {
            owner_occupied_households: 0,
            total_occupied_households: 40,
            ..CountyRecord::default()
        };
        assert_eq!(homeownership_rate(&county), Some(0.0));
    }

    #[rstest]
    fn tenure_fault_is_not_clamped() {
        let county = CountyRecord {
            owner_occupied_households: 41,
            total_occupied_households: 40,
            ..CountyRecord::default()
        };
        assert_eq!(homeownership_rate(&county), None);
    }

    #[rstest]
    fn county_carries_derived_metrics() {
        let county = County::from_record(CountyRecord {
            name: "Madison County".into(),
            adults_25_plus: 200,
            bachelor_plus_count: 70,
            total_occupied_households: 100,
            owner_occupied_households: 64,
            ..CountyRecord::default()
        });
        assert_eq!(county.name(), "Madison County");
        assert!((county.metrics.college_degree_rate - 35.0).abs() < 1e-9);
        assert_eq!(county.metrics.homeownership_rate, Some(64.0));
    }
}
