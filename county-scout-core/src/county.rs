//! Raw county statistics as supplied by a statistics collaborator.
//!
//! A [`CountyRecord`] carries one field per semantic metric. Translation from
//! census variable codes happens once, at the ingestion boundary, so nothing
//! downstream handles opaque keys.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One U.S. county's statistics for a single query.
///
/// # Examples
///
/// ```
/// use county_scout_core::CountyRecord;
///
/// let county = CountyRecord {
///     name: "Travis County".to_owned(),
///     population: 1_300_000,
///     median_household_income: 92_000,
///     median_home_value: 480_000,
///     ..CountyRecord::default()
/// };
/// assert!(county.data_quality_issues().is_empty());
/// assert!(county.safety_score.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountyRecord {
    /// County name without the trailing state, e.g. `"Shelby County"`.
    pub name: String,
    /// Total population.
    pub population: u64,
    /// Median household income in USD.
    pub median_household_income: u64,
    /// Median owner-occupied home value in USD.
    pub median_home_value: u64,
    /// Occupied housing units.
    pub total_occupied_households: u64,
    /// Owner-occupied housing units.
    pub owner_occupied_households: u64,
    /// Households with one or more children under 18.
    pub households_with_children: u64,
    /// Population aged 25 and over.
    pub adults_25_plus: u64,
    /// Bachelor's, master's, professional, and doctorate holders.
    pub bachelor_plus_count: u64,
    /// Optional `0..=100` safety reading.
    ///
    /// `None` means no crime-data source is configured, which removes the
    /// safety dimension entirely. A present but non-finite or out-of-range
    /// reading is scored as neutral.
    #[cfg_attr(feature = "serde", serde(default))]
    pub safety_score: Option<f64>,
}

/// Data-quality faults detected on a [`CountyRecord`].
///
/// These are flagged for the caller; scoring recovers from them locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DataQualityIssue {
    /// More owner-occupied units than occupied units; homeownership is
    /// treated as undefined.
    OwnerOccupiedExceedsOccupied,
    /// More households with children than occupied units.
    ChildHouseholdsExceedOccupied,
    /// More degree holders than adults aged 25 and over.
    DegreeHoldersExceedAdults,
}

impl DataQualityIssue {
    /// Return a short description of the fault.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::OwnerOccupiedExceedsOccupied => {
                "owner-occupied households exceed occupied households"
            }
            Self::ChildHouseholdsExceedOccupied => {
                "households with children exceed occupied households"
            }
            Self::DegreeHoldersExceedAdults => "degree holders exceed adults aged 25 and over",
        }
    }
}

impl std::fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

impl CountyRecord {
    /// Report invariant violations in the raw counts.
    ///
    /// An empty vector means the record is internally consistent.
    #[must_use]
    pub fn data_quality_issues(&self) -> Vec<DataQualityIssue> {
        let mut issues = Vec::new();
        if self.owner_occupied_households > self.total_occupied_households {
            issues.push(DataQualityIssue::OwnerOccupiedExceedsOccupied);
        }
        if self.households_with_children > self.total_occupied_households {
            issues.push(DataQualityIssue::ChildHouseholdsExceedOccupied);
        }
        if self.bachelor_plus_count > self.adults_25_plus {
            issues.push(DataQualityIssue::DegreeHoldersExceedAdults);
        }
        issues
    }

    /// Whether the owner-occupied count respects the occupied total.
    #[must_use]
    pub const fn has_consistent_tenure(&self) -> bool {
        self.owner_occupied_households <= self.total_occupied_households
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn consistent() -> CountyRecord {
        CountyRecord {
            name: "Lee County".into(),
            population: 170_000,
            total_occupied_households: 60_000,
            owner_occupied_households: 40_000,
            households_with_children: 18_000,
            adults_25_plus: 100_000,
            bachelor_plus_count: 30_000,
            ..CountyRecord::default()
        }
    }

    #[rstest]
    fn consistent_record_has_no_issues() {
        assert!(consistent().data_quality_issues().is_empty());
        assert!(consistent().has_consistent_tenure());
    }

    #[rstest]
    fn owner_overflow_is_flagged() {
        let record = CountyRecord {
            owner_occupied_households: 70_000,
            ..consistent()
        };
        assert_eq!(
            record.data_quality_issues(),
            vec![DataQualityIssue::OwnerOccupiedExceedsOccupied]
        );
        assert!(!record.has_consistent_tenure());
    }

    #[rstest]
    fn every_overflow_is_reported_in_order() {
        let record = CountyRecord {
            total_occupied_households: 0,
            bachelor_plus_count: 200_000,
            ..consistent()
        };
        assert_eq!(
            record.data_quality_issues(),
            vec![
                DataQualityIssue::OwnerOccupiedExceedsOccupied,
                DataQualityIssue::ChildHouseholdsExceedOccupied,
                DataQualityIssue::DegreeHoldersExceedAdults,
            ]
        );
    }

    #[rstest]
    fn issues_render_human_descriptions() {
        assert_eq!(
            DataQualityIssue::OwnerOccupiedExceedsOccupied.to_string(),
            "owner-occupied households exceed occupied households"
        );
    }
}
