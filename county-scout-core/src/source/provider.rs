//! County source trait.

use crate::CountyRecord;

use super::error::CountySourceError;

/// Fetch the raw county records for one U.S. state.
///
/// An empty vector is a valid answer ("no data for this state"); ranking an
/// empty list yields an empty report rather than an error.
///
/// # Examples
///
/// ```rust
/// use county_scout_core::{CountyRecord, CountySource, CountySourceError};
///
/// struct SingleCounty;
///
/// impl CountySource for SingleCounty {
///     fn fetch_counties(&self, state: &str) -> Result<Vec<CountyRecord>, CountySourceError> {
///         if state != "RI" {
///             return Err(CountySourceError::UnknownState { state: state.to_owned() });
///         }
///         Ok(vec![CountyRecord {
///             name: "Providence County".to_owned(),
///             population: 660_000,
///             ..CountyRecord::default()
///         }])
///     }
/// }
///
/// let counties = SingleCounty.fetch_counties("RI")?;
/// assert_eq!(counties.len(), 1);
/// assert!(SingleCounty.fetch_counties("XX").is_err());
/// # Ok::<(), CountySourceError>(())
/// ```
pub trait CountySource {
    /// Return every county record for `state`.
    ///
    /// `state` is whatever identifier the implementation understands, such as
    /// a FIPS code, a postal abbreviation, or a full state name.
    fn fetch_counties(&self, state: &str) -> Result<Vec<CountyRecord>, CountySourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::{CountyBuilder, MemorySource};

    #[rstest]
    fn memory_source_returns_registered_state() {
        let source = MemorySource::new().with_state(
            "Delaware",
            vec![
                CountyBuilder::new("Kent County").population(180_000).build(),
                CountyBuilder::new("Sussex County").population(240_000).build(),
            ],
        );
        let counties = source
            .fetch_counties("delaware")
            .expect("expected registered state");
        assert_eq!(counties.len(), 2);
    }

    #[rstest]
    fn memory_source_rejects_unknown_state() {
        let err = MemorySource::new()
            .fetch_counties("Atlantis")
            .expect_err("expected UnknownState for unregistered state");
        assert_eq!(
            err,
            CountySourceError::UnknownState {
                state: "Atlantis".into()
            }
        );
    }
}
